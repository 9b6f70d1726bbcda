//! vreport entrypoint.

use volunteer_reports::run;
use volunteer_reports::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
