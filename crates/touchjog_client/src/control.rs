//! Imperative handle for hosts that own a plain DOM element.

use std::sync::Arc;

use leptos::mount::mount_to;
use leptos::prelude::*;
use touchjog_common::{JogConfig, JogError, JogState, StepSize, ThemeChange};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::view::{CommandCallback, JogPad};

/// A jog widget bound to one mount element.
///
/// ```rust,ignore
/// let mut jog = JogControl::attach("#jog", |gcode| send_to_printer(gcode))?;
/// jog.render();
/// jog.update_theme(true);
/// ```
///
/// Step and theme live in the handle, not in the rendered view, so they
/// survive [`render`](Self::render) calls.
pub struct JogControl {
    mount: HtmlElement,
    config: Arc<JogConfig>,
    on_command: CommandCallback,
    owner: Owner,
    state: RwSignal<JogState>,
    teardown: Option<Box<dyn FnOnce()>>,
}

impl JogControl {
    pub fn new<F>(mount: HtmlElement, on_command: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        Self::with_config(mount, JogConfig::default(), on_command)
    }

    pub fn with_config<F>(mount: HtmlElement, config: JogConfig, on_command: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        let owner = Owner::new();
        let state = owner.with(|| RwSignal::new(JogState::from_config(&config)));
        Self {
            mount,
            config: Arc::new(config),
            on_command: Arc::new(on_command),
            owner,
            state,
            teardown: None,
        }
    }

    /// Looks up the mount element with a CSS selector.
    pub fn attach<F>(selector: &str, on_command: F) -> Result<Self, JogError>
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        let mount = document()
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| JogError::MountNotFound(selector.to_string()))?;
        Ok(Self::new(mount, on_command))
    }

    /// Builds the widget into the mount element, discarding any previous
    /// build first.
    pub fn render(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            log::debug!("[JogControl] discarding previous render");
            teardown();
        }

        let height = self.mount.style().get_property_value("height").unwrap_or_default();
        let state = self.state;
        let config = Arc::clone(&self.config);
        let on_command = Arc::clone(&self.on_command);
        let mount = self.mount.clone();

        let handle = self.owner.with(move || {
            mount_to(mount, move || {
                view! { <JogPad state=state config=config on_command=on_command height=height/> }
            })
        });
        self.teardown = Some(Box::new(move || drop(handle)));
    }

    /// Switches between the light and dark palette.
    ///
    /// Before the first [`render`](Self::render) the choice is only recorded.
    pub fn update_theme(&self, dark: bool) {
        match self.state.try_update(|s| s.set_dark_theme(dark)) {
            Some(ThemeChange::Applied) => log::debug!("[JogControl] theme applied (dark: {dark})"),
            Some(ThemeChange::Deferred) => log::debug!("[JogControl] theme deferred (dark: {dark})"),
            None => log::warn!("[JogControl] theme update on a disposed widget"),
        }
    }

    /// Reserved for refreshing external state; currently does nothing.
    pub fn update(&self) {
        log::trace!("[JogControl] update");
    }

    pub fn current_step(&self) -> StepSize {
        self.state.with_untracked(|s| s.step())
    }

    pub fn is_rendered(&self) -> bool {
        self.state.with_untracked(|s| s.is_rendered())
    }

    pub fn is_dark_theme(&self) -> bool {
        self.state.with_untracked(|s| s.is_dark())
    }

    pub fn config(&self) -> &JogConfig {
        &self.config
    }
}

impl Drop for JogControl {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}
