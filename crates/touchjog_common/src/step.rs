//! The fixed set of jog step sizes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::JogError;

/// One entry of the step selector, in machine units (usually millimeters).
///
/// The set is closed: a jog is always one of these distances, so holding a
/// `StepSize` guarantees there is exactly one valid current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum StepSize {
    Hundred,
    Fifty,
    Ten,
    #[default]
    One,
    Half,
    Twentieth,
}

impl StepSize {
    /// Selector order, top to bottom.
    pub const ALL: [StepSize; 6] = [
        StepSize::Hundred,
        StepSize::Fifty,
        StepSize::Ten,
        StepSize::One,
        StepSize::Half,
        StepSize::Twentieth,
    ];

    pub fn value(self) -> f64 {
        match self {
            StepSize::Hundred => 100.0,
            StepSize::Fifty => 50.0,
            StepSize::Ten => 10.0,
            StepSize::One => 1.0,
            StepSize::Half => 0.5,
            StepSize::Twentieth => 0.05,
        }
    }

    /// Position of this step in the selector stack.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or_default()
    }

    /// The step as printed inside a move command, e.g. `0.5`.
    pub fn positive(self) -> String {
        self.value().to_string()
    }

    /// The negated step as printed inside a move command, e.g. `-0.5`.
    pub fn negative(self) -> String {
        (-self.value()).to_string()
    }
}

impl fmt::Display for StepSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<f64> for StepSize {
    type Error = JogError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.value() == value)
            .ok_or(JogError::UnknownStep(value))
    }
}

impl From<StepSize> for f64 {
    fn from(step: StepSize) -> Self {
        step.value()
    }
}
