//! rHeatlog main entrypoint.

use rheatlog::run;
use rheatlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
