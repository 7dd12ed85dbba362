use crate::cli::commands::reference_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::render::render_calendar;
use crate::errors::AppResult;
use crate::import::load_log;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render { date, out } = cmd {
        let today = reference_date(date, cfg)?;
        let log_path = cfg.log_path();

        let log = load_log(&log_path)?;
        info(format!(
            "Loaded {} day(s) from {}",
            log.len(),
            log_path.display()
        ));

        let images = render_calendar(&log, today, &cfg.palette)?;
        for path in images.write_to(&expand_tilde(out))? {
            success(format!("Written {}", path.display()));
        }
    }
    Ok(())
}
