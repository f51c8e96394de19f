use serde::{Deserialize, Serialize};

use crate::command::{JogCommand, MotionFrame};
use crate::error::JogError;
use crate::step::StepSize;
use crate::theme::{Palettes, Theme, ThemeVariant};

/// Macro files invoked by the round buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroSet {
    /// Directory prefix joined with every file name.
    pub directory: String,
    pub center: String,
    pub back_left: String,
    pub back_right: String,
    pub front_right: String,
    pub front_left: String,
    pub z_max: String,
    pub z_min: String,
}

impl Default for MacroSet {
    fn default() -> Self {
        MacroSet {
            directory: "0:/macros/jog/".to_string(),
            center: "center.g".to_string(),
            back_left: "backleft.g".to_string(),
            back_right: "backright.g".to_string(),
            front_right: "frontright.g".to_string(),
            front_left: "frontleft.g".to_string(),
            z_max: "zmax.g".to_string(),
            z_min: "zmin.g".to_string(),
        }
    }
}

impl MacroSet {
    /// `M98 P"<directory><file>"`.
    pub fn call(&self, file: &str) -> JogCommand {
        JogCommand::Macro(format!("M98 P\"{}{}\"", self.directory, file))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomingCommands {
    pub x: String,
    pub y: String,
    pub z: String,
    pub all: String,
}

impl Default for HomingCommands {
    fn default() -> Self {
        HomingCommands {
            x: "G28 X".to_string(),
            y: "G28 Y".to_string(),
            z: "G28 Z".to_string(),
            all: "G28".to_string(),
        }
    }
}

/// Everything a host may tune about a jog widget.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JogConfig {
    /// Length of each half of the click flash.
    pub animation_delay_ms: u64,
    pub default_step: StepSize,
    /// Theme used until the host calls `update_theme`.
    pub dark_theme: bool,
    /// Extra class put on text nodes, typically a `user-select: none` utility.
    pub no_select_class: Option<String>,
    pub palettes: Palettes,
    pub motion: MotionFrame,
    pub macros: MacroSet,
    pub homing: HomingCommands,
}

impl Default for JogConfig {
    fn default() -> Self {
        JogConfig {
            animation_delay_ms: 250,
            default_step: StepSize::default(),
            dark_theme: false,
            no_select_class: None,
            palettes: Palettes::default(),
            motion: MotionFrame::default(),
            macros: MacroSet::default(),
            homing: HomingCommands::default(),
        }
    }
}

impl JogConfig {
    pub fn from_json(json: &str) -> Result<Self, JogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn theme(&self, dark: bool) -> &Theme {
        self.palettes.get(ThemeVariant::from_dark(dark))
    }

    pub fn animation_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.animation_delay_ms)
    }
}
