//! streamflow entrypoint.

use streamflow::run;
use streamflow::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
