use std::process;

use ttyprobe::app;
use ttyprobe::probe::Variant;

fn main() {
    process::exit(app::run(Variant::StdoutOnly));
}
