//! The classifier: a total mapping from `f64` to [`Sign`].

use std::fmt;

use serde::Serialize;

use crate::render::render_value;

/// Outcome of comparing a value against zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

impl Sign {
    /// Upper-case label used in every rendered result.
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Zero => "ZERO",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified value, carrying the input so it can be echoed back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    value: f64,
    sign: Sign,
}

impl Classification {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// `"<value> is <LABEL>"`, the text both adapters emit on success.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}", render_value(self.value), self.sign)
    }
}

/// Classify `value` by strict comparison against zero.
///
/// Total over every `f64`. NaN compares false against both bounds and lands
/// in [`Sign::Zero`]; callers rely on that rather than treating NaN as an
/// input error. `-0.0` is also [`Sign::Zero`].
pub fn classify(value: f64) -> Classification {
    let sign = if value > 0.0 {
        Sign::Positive
    } else if value < 0.0 {
        Sign::Negative
    } else {
        Sign::Zero
    };
    Classification { value, sign }
}
