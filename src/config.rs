//! Runner options consulted by the truncation gate

use serde::{Deserialize, Serialize};

/// The slice of the host runner's options that decides whether assertion
/// output may be shortened for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOptions {
    /// Count of `-v` flags the runner was invoked with. Quiet modes may
    /// drive this negative.
    pub verbose: i32,
}

impl RunOptions {
    /// Options for a run invoked with `verbose` `-v` flags.
    pub fn with_verbosity(verbose: i32) -> Self {
        Self { verbose }
    }

    /// True when the user asked for full assertion output (`-vv` and up).
    pub fn shows_full_output(&self) -> bool {
        self.verbose >= 2
    }
}
