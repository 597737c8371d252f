//! rTimetable main entrypoint.

use rtimetable::run;
use rtimetable::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
