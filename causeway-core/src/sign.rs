//! Three-valued sign arithmetic shared by effects, relation signs, and co-change calls.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

/// A direction: down, undetermined, or up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Sign of a real number. NaN maps to `Zero`.
    pub fn from_value(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::Zero
        }
    }

    /// Parse the integer encoding used in tabular inputs (-1, 0, 1).
    pub fn from_i8(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Self::Negative),
            0 => Some(Self::Zero),
            1 => Some(Self::Positive),
            _ => None,
        }
    }

    pub fn as_i8(self) -> i8 {
        match self {
            Self::Negative => -1,
            Self::Zero => 0,
            Self::Positive => 1,
        }
    }

    pub fn is_zero(self) -> bool {
        self == Self::Zero
    }

    pub fn flip(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Self::Zero, _) | (_, Self::Zero) => Self::Zero,
            (a, b) if a == b => Self::Positive,
            _ => Self::Negative,
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

/// Which outcome the search hunts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Relations whose mechanism explains the data.
    #[default]
    Causal,
    /// Relations whose mechanism contradicts the data.
    Conflicting,
}

impl Polarity {
    /// The value `source effect * co-change * relation sign` must equal.
    pub fn target_sign(self) -> Sign {
        match self {
            Self::Causal => Sign::Positive,
            Self::Conflicting => Sign::Negative,
        }
    }

    pub fn from_causal(causal: bool) -> Self {
        if causal {
            Self::Causal
        } else {
            Self::Conflicting
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Causal => Self::Conflicting,
            Self::Conflicting => Self::Causal,
        }
    }
}
