use tracing::info;

/// Serial console of the board: the per-cycle status line and, in the extended
/// variant, the plotter series.
pub trait SerialOut: Send + Sync {
    fn status(&self, line: &str);
    fn plot(&self, line: &str);
}

/// Status lines go to the log, plotter lines to stdout so a plotter can read
/// them without log decoration.
#[derive(Debug, Default)]
pub struct ConsoleSerial;

impl SerialOut for ConsoleSerial {
    fn status(&self, line: &str) {
        info!(event = "cycle", "{}", line);
    }

    fn plot(&self, line: &str) {
        println!("{}", line);
    }
}
