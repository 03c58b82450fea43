//! `numsign-cli` — console adapter for sign classification.
//!
//! The value comes from, in order: the `NUMBER` argument, the `TEST_NUMBER`
//! environment variable, or one line typed at the `Enter a number: ` prompt.
//!
//! ## Exit Codes
//!
//! - 0: A line was printed, whether a result or an input error
//! - 1: Reading stdin or writing stdout failed

pub mod console;

pub use console::{ConsoleCli, LineSource, PROMPT, TEST_NUMBER_ENV};

/// Exit codes for the console
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const IO_ERROR: i32 = 1;
}
