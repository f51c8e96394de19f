//! Mutable state owned by one jog widget instance.

use crate::command::MotionFrame;
use crate::config::JogConfig;
use crate::layout::{Widget, WidgetAction};
use crate::step::StepSize;
use crate::theme::{PartCategory, PartState, ThemeVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPhase {
    #[default]
    Unrendered,
    Rendered,
}

/// Whether a theme switch reached the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChange {
    /// Nothing is rendered yet; the theme applies on the next render.
    Deferred,
    /// Rendered parts were recolored.
    Applied,
}

/// Current step, theme and render phase of a widget.
///
/// There is no ambient state: every handler and color lookup reads this
/// struct through the widget that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JogState {
    step: StepSize,
    variant: ThemeVariant,
    phase: RenderPhase,
}

impl Default for JogState {
    fn default() -> Self {
        JogState::new(StepSize::default(), false)
    }
}

impl JogState {
    pub fn new(step: StepSize, dark: bool) -> Self {
        JogState {
            step,
            variant: ThemeVariant::from_dark(dark),
            phase: RenderPhase::Unrendered,
        }
    }

    pub fn from_config(config: &JogConfig) -> Self {
        JogState::new(config.default_step, config.dark_theme)
    }

    pub fn step(&self) -> StepSize {
        self.step
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn is_dark(&self) -> bool {
        self.variant == ThemeVariant::Dark
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    pub fn is_rendered(&self) -> bool {
        self.phase == RenderPhase::Rendered
    }

    /// Makes `step` the current step. Returns whether it changed.
    pub fn select_step(&mut self, step: StepSize) -> bool {
        let changed = self.step != step;
        if changed {
            log::debug!("jog step {} -> {}", self.step, step);
        }
        self.step = step;
        changed
    }

    pub fn set_dark_theme(&mut self, dark: bool) -> ThemeChange {
        self.variant = ThemeVariant::from_dark(dark);
        match self.phase {
            RenderPhase::Unrendered => {
                log::debug!("theme {:?} recorded until first render", self.variant);
                ThemeChange::Deferred
            }
            RenderPhase::Rendered => ThemeChange::Applied,
        }
    }

    /// Records a (re)build. Returns the phase the widget was in before.
    pub fn mark_rendered(&mut self) -> RenderPhase {
        std::mem::replace(&mut self.phase, RenderPhase::Rendered)
    }

    /// The string sent to the host for a click on `widget`, if it sends one.
    pub fn command_for(&self, widget: &Widget, frame: &MotionFrame) -> Option<String> {
        match &widget.action {
            WidgetAction::Command(command) => Some(command.resolve(self.step, frame)),
            WidgetAction::SelectStep(_) => None,
        }
    }

    /// Color inputs for a part of `widget`, given whether it is flashing.
    pub fn part_state(&self, widget: &Widget, category: PartCategory, flashing: bool) -> PartState {
        let selected = matches!(category, PartCategory::StepButton | PartCategory::StepText)
            && widget.step() == Some(self.step);
        PartState { selected, flashing }
    }
}
