//! `numsign-core` — sign classification shared by the HTTP and console adapters.
//!
//! The crate holds the only copy of the classification rule. Adapters turn
//! their external input into text, hand it to [`check_input`], and render the
//! returned [`Classification`] or [`ClassifyError`] for their own sink.
//!
//! ```
//! use numsign_core::{Sign, check_input};
//!
//! let c = check_input(Some("-3.5")).unwrap();
//! assert_eq!(c.sign(), Sign::Negative);
//! assert_eq!(c.to_string(), "-3.5 is NEGATIVE");
//! ```

pub mod classify;
pub mod error;
pub mod io;
pub mod parse;
pub mod render;

pub use classify::{Classification, Sign, classify};
pub use error::{ClassifyError, Result};
pub use io::{InputSource, OutputSink, resolve};
pub use parse::{check_input, parse_number};
pub use render::render_value;
