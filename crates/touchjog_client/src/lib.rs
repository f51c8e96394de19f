//! # TouchJog Client
//!
//! Leptos rendering of the TouchJog widget: XY and Z jog arrows, macro
//! buttons, a step selector and homing buttons drawn as one SVG, each
//! emitting a G-code string through a host callback.
//!
//! Two entry points:
//!
//! - [`JogControl`] for hosts that hand over a DOM element and drive the
//!   widget imperatively (`render`, `update_theme`).
//! - [`TouchJog`] for Leptos applications.
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use touchjog_client::TouchJog;
//!
//! #[component]
//! fn PrinterPanel() -> impl IntoView {
//!     let (dark, _) = signal(true);
//!     view! {
//!         <TouchJog
//!             on_command=|gcode: String| log::info!("send {gcode:?}")
//!             dark=dark
//!             height="320px"
//!         />
//!     }
//! }
//! ```

mod control;
mod view;

pub use control::JogControl;
pub use view::{CommandCallback, JogPad, TouchJog};

// Re-export the core types hosts need to configure the widget.
pub use touchjog_common::{JogConfig, JogError, JogState, StepSize, Theme};
