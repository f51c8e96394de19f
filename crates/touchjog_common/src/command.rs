//! Command templating: turning a jog pattern and a step size into G-code.
//!
//! Only direction arrows carry a [`MoveTemplate`]. Their commands are
//! resolved against the current step at click time and wrapped in a
//! [`MotionFrame`]. Macro and homing commands are emitted verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::step::StepSize;

/// Token replaced by the current step value.
pub const POSITIVE_STEP: &str = "{+step}";
/// Token replaced by the negated current step value.
pub const NEGATIVE_STEP: &str = "{-step}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn letter(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    pub fn token(self) -> &'static str {
        match self {
            Direction::Positive => POSITIVE_STEP,
            Direction::Negative => NEGATIVE_STEP,
        }
    }
}

/// A move line with step placeholders, e.g. `X{+step} Y{-step}`.
///
/// Whitespace is normalized on construction, so trailing or doubled spaces
/// in a template never reach the controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MoveTemplate(String);

impl MoveTemplate {
    pub fn new(template: impl AsRef<str>) -> Self {
        MoveTemplate(template.as_ref().split_whitespace().collect::<Vec<_>>().join(" "))
    }

    /// Template moving each listed axis one step in its direction.
    pub fn axes(moves: &[(Axis, Direction)]) -> Self {
        let words: Vec<String> = moves
            .iter()
            .map(|(axis, direction)| format!("{}{}", axis.letter(), direction.token()))
            .collect();
        MoveTemplate(words.join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitutes every step token. Unknown tokens pass through untouched.
    pub fn resolve(&self, step: StepSize) -> String {
        self.0
            .replace(POSITIVE_STEP, &step.positive())
            .replace(NEGATIVE_STEP, &step.negative())
    }
}

impl From<String> for MoveTemplate {
    fn from(value: String) -> Self {
        MoveTemplate::new(value)
    }
}

impl From<MoveTemplate> for String {
    fn from(value: MoveTemplate) -> Self {
        value.0
    }
}

impl fmt::Display for MoveTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The lines a relative move is wrapped in.
///
/// The result is always five newline-separated segments:
/// enable, relative mode, the move itself, absolute mode, disable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionFrame {
    pub enable: String,
    pub relative: String,
    pub move_code: String,
    pub absolute: String,
    pub disable: String,
}

impl Default for MotionFrame {
    fn default() -> Self {
        MotionFrame {
            enable: "M120".to_string(),
            relative: "G91".to_string(),
            move_code: "G1".to_string(),
            absolute: "G90".to_string(),
            disable: "M121".to_string(),
        }
    }
}

impl MotionFrame {
    pub fn wrap(&self, move_line: &str) -> String {
        format!(
            "{}\n{}\n{} {}\n{}\n{}",
            self.enable, self.relative, self.move_code, move_line, self.absolute, self.disable
        )
    }
}

/// What a widget sends when activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JogCommand {
    /// Relative move, resolved against the current step and framed.
    Move(MoveTemplate),
    /// Macro invocation, sent verbatim.
    Macro(String),
    /// Homing command, sent verbatim.
    Home(String),
}

impl JogCommand {
    pub fn resolve(&self, step: StepSize, frame: &MotionFrame) -> String {
        match self {
            JogCommand::Move(template) => frame.wrap(&template.resolve(step)),
            JogCommand::Macro(command) | JogCommand::Home(command) => command.clone(),
        }
    }
}
