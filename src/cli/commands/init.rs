use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::PathBuf;

/// Handle the `init` command
///
/// Creates the config directory and writes a configuration file with the
/// default palette, paths and UTC offset. In `--test` mode nothing is
/// written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    println!("⚙️  Initializing rHeatlog…");

    let cfg = Config::init_all(&path, cli.test)?;

    if cli.test {
        info("Test mode: configuration file not written");
    } else {
        success(format!("Config file : {}", path.display()));
    }
    println!("📄 Activity log : {}", cfg.log_file);
    println!("📚 Docs dir     : {}", cfg.docs_dir);
    println!("🌐 Site dir     : {}", cfg.site_dir);

    Ok(())
}
