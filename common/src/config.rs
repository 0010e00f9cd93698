#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Verbosity reduction.
    ///
    /// `1` hides headers, `2` also hides the per-record trees and only
    /// keeps the summary line.
    pub quiet: u8,
    /// Disables ANSI colors in terminal output.
    pub no_color: bool,
}
