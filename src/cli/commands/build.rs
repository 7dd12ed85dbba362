use crate::cli::commands::reference_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::build::BuildLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Build { docs, site, date } = cmd {
        let today = reference_date(date, cfg)?;

        let docs = docs
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.docs_path());
        let site = site
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.site_path());

        BuildLogic::build(&docs, &site, &cfg.log_path(), today, cfg.palette.clone())?;
    }
    Ok(())
}
