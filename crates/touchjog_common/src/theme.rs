//! Color palettes and the mapping from part categories to colors.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An SVG paint value (`black`, `transparent`, `#ff6600`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(Cow<'static, str>);

impl Color {
    pub const fn named(value: &'static str) -> Self {
        Color(Cow::Borrowed(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Color(Cow::Owned(value))
    }
}

impl From<&'static str> for Color {
    fn from(value: &'static str) -> Self {
        Color(Cow::Borrowed(value))
    }
}

/// The four color roles every themed part draws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub secondary_text: Color,
    pub highlight: Color,
}

impl Theme {
    pub const fn light() -> Self {
        Theme {
            primary: Color::named("black"),
            secondary: Color::named("transparent"),
            secondary_text: Color::named("white"),
            highlight: Color::named("#ff6600"),
        }
    }

    pub const fn dark() -> Self {
        Theme {
            primary: Color::named("white"),
            secondary: Color::named("transparent"),
            secondary_text: Color::named("black"),
            highlight: Color::named("#ff6600"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
}

impl ThemeVariant {
    pub fn from_dark(dark: bool) -> Self {
        if dark { ThemeVariant::Dark } else { ThemeVariant::Light }
    }
}

/// The light and dark palettes a widget switches between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palettes {
    pub light: Theme,
    pub dark: Theme,
}

impl Default for Palettes {
    fn default() -> Self {
        Palettes {
            light: Theme::light(),
            dark: Theme::dark(),
        }
    }
}

impl Palettes {
    pub fn get(&self, variant: ThemeVariant) -> &Theme {
        match variant {
            ThemeVariant::Light => &self.light,
            ThemeVariant::Dark => &self.dark,
        }
    }
}

/// Category tag of a colorable sub-part.
///
/// Theme updates and flashes address parts by category, never by element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartCategory {
    ArrowBuffer,
    DirectionArrow,
    CircleButton,
    StepButton,
    StepText,
    HomeIcon,
    HomeText,
}

impl PartCategory {
    /// CSS class put on the rendered node.
    pub fn class_name(self) -> &'static str {
        match self {
            PartCategory::ArrowBuffer => "svg-arrow-buffer",
            PartCategory::DirectionArrow => "svg-direction-arrow",
            PartCategory::CircleButton => "circle-button",
            PartCategory::StepButton => "step-button",
            PartCategory::StepText => "step-text",
            PartCategory::HomeIcon => "home-icon",
            PartCategory::HomeText => "home-text",
        }
    }

    /// Whether a click on the owning widget flashes this part.
    pub fn flashes(self) -> bool {
        matches!(
            self,
            PartCategory::DirectionArrow | PartCategory::CircleButton | PartCategory::HomeIcon
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    Fill,
    Stroke,
}

/// Per-part inputs to [`color_for`] besides the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartState {
    /// The part belongs to the step box of the current step.
    pub selected: bool,
    /// The owning widget is in the first half of its click flash.
    pub flashing: bool,
}

impl PartState {
    pub const IDLE: PartState = PartState {
        selected: false,
        flashing: false,
    };

    pub fn selected(selected: bool) -> Self {
        PartState { selected, flashing: false }
    }

    pub fn flashing(flashing: bool) -> Self {
        PartState { selected: false, flashing }
    }
}

/// Color of `paint` on a part of `category`.
///
/// `None` means the part leaves that attribute unset. Every path that
/// colors a part (first build, theme update, step selection, flash, static
/// markup) goes through here.
pub fn color_for(category: PartCategory, paint: Paint, state: PartState, theme: &Theme) -> Option<&Color> {
    let flash = state.flashing && category.flashes();
    let color = match (category, paint) {
        (PartCategory::ArrowBuffer, Paint::Fill) => &theme.secondary,
        (PartCategory::ArrowBuffer, Paint::Stroke) => return None,

        (PartCategory::DirectionArrow, Paint::Fill) if flash => &theme.highlight,
        (PartCategory::DirectionArrow, Paint::Fill) => &theme.primary,
        (PartCategory::DirectionArrow, Paint::Stroke) => return None,

        (PartCategory::CircleButton, _) if flash => &theme.highlight,
        (PartCategory::CircleButton, Paint::Fill) => &theme.secondary,
        (PartCategory::CircleButton, Paint::Stroke) => &theme.primary,

        (PartCategory::StepButton, Paint::Fill) if state.selected => &theme.primary,
        (PartCategory::StepButton, Paint::Fill) => &theme.secondary,
        (PartCategory::StepButton, Paint::Stroke) => &theme.primary,

        (PartCategory::StepText, Paint::Fill) if state.selected => &theme.secondary_text,
        (PartCategory::StepText, Paint::Fill) => &theme.primary,
        (PartCategory::StepText, Paint::Stroke) => return None,

        (PartCategory::HomeIcon, _) if flash => &theme.highlight,
        (PartCategory::HomeIcon, Paint::Fill) => &theme.primary,
        (PartCategory::HomeIcon, Paint::Stroke) => &theme.secondary,

        (PartCategory::HomeText, Paint::Fill) => &theme.secondary_text,
        (PartCategory::HomeText, Paint::Stroke) => return None,
    };
    Some(color)
}
