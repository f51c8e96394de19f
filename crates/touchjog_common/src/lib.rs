//! # TouchJog Common
//!
//! Target-independent core of the TouchJog widget: the step set, color
//! palettes, G-code command templating, widget geometry and the state a
//! widget instance owns.
//!
//! Nothing here touches the DOM. `touchjog_client` mounts a [`JogLayout`]
//! with Leptos; [`markup::render_svg`] renders the same tree to a string.
//!
//! ```rust
//! use touchjog_common::{JogConfig, JogLayout, JogState, StepSize};
//!
//! let config = JogConfig::default();
//! let layout = JogLayout::build(&config);
//! let mut state = JogState::from_config(&config);
//!
//! state.select_step(StepSize::Ten);
//! let up = layout.widget("y+").unwrap();
//! assert_eq!(
//!     state.command_for(up, &config.motion).as_deref(),
//!     Some("M120\nG91\nG1 Y10\nG90\nM121"),
//! );
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod layout;
pub mod markup;
pub mod state;
pub mod step;
pub mod theme;

pub use command::{Axis, Direction, JogCommand, MotionFrame, MoveTemplate};
pub use config::{HomingCommands, JogConfig, MacroSet};
pub use error::JogError;
pub use layout::{Cluster, JogLayout, Part, Shape, Widget, WidgetAction, WidgetKind};
pub use state::{JogState, RenderPhase, ThemeChange};
pub use step::StepSize;
pub use theme::{Color, Paint, Palettes, PartCategory, PartState, Theme, ThemeVariant, color_for};
