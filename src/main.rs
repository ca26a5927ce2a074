//! rShiftgrid main entrypoint.

use rshiftgrid::run;

fn main() {
    println!();
    if let Err(e) = run() {
        rshiftgrid::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
