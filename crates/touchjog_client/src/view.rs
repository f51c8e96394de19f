//! Leptos rendering of a [`JogLayout`].
//!
//! Geometry is built once per mount. Colors are reactive closures over the
//! active theme, the current step and a per-widget flash flag, so theme
//! switches and step selection only touch `fill`/`stroke` attributes.

use std::sync::Arc;

use leptos::prelude::*;
use touchjog_common::layout::{ASPECT_RATIO, SVG_CLASS, VIEW_BOX};
use touchjog_common::{
    Cluster, JogConfig, JogLayout, JogState, Paint, Part, PartCategory, PartState, Shape, StepSize, Theme, Widget,
    WidgetAction, color_for,
};

/// Host callback receiving one command string per activation.
pub type CommandCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Highlight cycle of one widget after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Flash {
    #[default]
    Idle,
    /// Drawn in the highlight color.
    Lit,
    /// Back to its theme color, transition still running.
    Fading,
}

/// Everything a widget needs to react to a click.
#[derive(Clone)]
struct PadContext {
    state: RwSignal<JogState>,
    step: Memo<StepSize>,
    theme: Memo<Theme>,
    config: Arc<JogConfig>,
    on_command: CommandCallback,
}

impl PadContext {
    fn activate(&self, widget: &Widget, flash: RwSignal<Flash>) {
        match &widget.action {
            WidgetAction::SelectStep(step) => {
                let step = *step;
                self.state.update(|s| {
                    s.select_step(step);
                });
            }
            WidgetAction::Command(_) => {
                let Some(command) = self.state.with_untracked(|s| s.command_for(widget, &self.config.motion)) else {
                    return;
                };
                log::debug!("[JogPad] {} -> {:?}", widget.key, command);
                (self.on_command)(command);

                // Transition style is set from the click to the end of the fade.
                let delay = self.config.animation_delay();
                flash.set(Flash::Lit);
                // The widget may have been torn down by a re-render.
                set_timeout(
                    move || {
                        let _ = flash.try_set(Flash::Fading);
                    },
                    delay,
                );
                set_timeout(
                    move || {
                        let _ = flash.try_update(|f| {
                            if *f == Flash::Fading {
                                *f = Flash::Idle;
                            }
                        });
                    },
                    delay * 2,
                );
            }
        }
    }
}

/// Reactive color inputs of a single part.
#[derive(Clone, Copy)]
struct PartColors {
    category: PartCategory,
    /// Step of the owning step box, if any.
    step: Option<StepSize>,
    current_step: Memo<StepSize>,
    theme: Memo<Theme>,
    flash: RwSignal<Flash>,
}

impl PartColors {
    fn get(self, paint: Paint) -> Option<String> {
        let state = PartState {
            selected: self.step.is_some_and(|step| self.current_step.get() == step),
            flashing: self.category.flashes() && self.flash.get() == Flash::Lit,
        };
        self.theme
            .with(|theme| color_for(self.category, paint, state, theme).map(|c| c.to_string()))
    }

    fn transition(self, ms: u64) -> String {
        if self.category.flashes() && self.flash.get() != Flash::Idle {
            format!("transition: fill {ms}ms linear, stroke {ms}ms linear")
        } else {
            String::new()
        }
    }
}

fn part_view(part: Part, colors: PartColors, config: &JogConfig) -> AnyView {
    let category = part.category;
    let fill = move || colors.get(Paint::Fill);
    let stroke = move || colors.get(Paint::Stroke);
    let transform = part.transform;
    let stroke_width = part.stroke_width;
    let ms = config.animation_delay_ms;
    let transition = move || colors.transition(ms);

    match part.shape {
        Shape::Rect { x, y, width, height, radius } => view! {
            <rect
                class=category.class_name()
                x=x.to_string()
                y=y.to_string()
                width=width.to_string()
                height=height.to_string()
                rx=radius.map(|r| r.to_string())
                ry=radius.map(|r| r.to_string())
                transform=transform
                stroke-width=stroke_width
                style=transition
                fill=fill
                stroke=stroke
            />
        }
        .into_any(),
        Shape::Path { d } => view! {
            <path
                class=category.class_name()
                d=d
                transform=transform
                stroke-width=stroke_width
                style=transition
                fill=fill
                stroke=stroke
            />
        }
        .into_any(),
        Shape::Circle { cx, cy, r } => view! {
            <circle
                class=category.class_name()
                cx=cx.to_string()
                cy=cy.to_string()
                r=r.to_string()
                stroke-width=stroke_width
                style=transition
                fill=fill
                stroke=stroke
            />
        }
        .into_any(),
        Shape::Text { x, y, font_size, content } => {
            let class = match &config.no_select_class {
                Some(extra) => format!("{} {}", category.class_name(), extra),
                None => category.class_name().to_string(),
            };
            view! {
                <text
                    class=class
                    x=x.to_string()
                    y=y.to_string()
                    font-size=font_size
                    text-anchor="middle"
                    alignment-baseline="middle"
                    style="cursor: default"
                    fill=fill
                >
                    {content}
                </text>
            }
            .into_any()
        }
    }
}

#[component]
fn WidgetView(widget: Widget, pad: PadContext) -> impl IntoView {
    let flash = RwSignal::new(Flash::Idle);
    let parts = widget
        .parts
        .iter()
        .cloned()
        .map(|part| {
            let colors = PartColors {
                category: part.category,
                step: widget.step(),
                current_step: pad.step,
                theme: pad.theme,
                flash,
            };
            part_view(part, colors, &pad.config)
        })
        .collect_view();

    let key = widget.key.clone();
    let transform = widget.transform.clone();
    let on_click = move |_| pad.activate(&widget, flash);

    view! {
        <g data-jog=key transform=transform on:click=on_click>
            {parts}
        </g>
    }
}

#[component]
fn ClusterView(cluster: Cluster, pad: PadContext) -> impl IntoView {
    let widgets = cluster
        .widgets
        .into_iter()
        .map(|widget| view! { <WidgetView widget=widget pad=pad.clone()/> })
        .collect_view();

    view! {
        <g data-cluster=cluster.name transform=cluster.transform>
            {widgets}
        </g>
    }
}

/// The jog widget's SVG tree, built from scratch every time it mounts.
///
/// `state` outlives the view: a rebuilt pad picks up the current step and
/// theme where the previous one left them.
#[component]
pub fn JogPad(
    state: RwSignal<JogState>,
    config: Arc<JogConfig>,
    on_command: CommandCallback,
    /// Copied onto the `<svg>` height attribute when non-empty.
    #[prop(optional, into)]
    height: String,
) -> impl IntoView {
    let previous = state.try_update_untracked(|s| s.mark_rendered());
    log::debug!("[JogPad] building layout (previous phase: {:?})", previous);

    let layout = JogLayout::build(&config);
    let theme = Memo::new({
        let config = Arc::clone(&config);
        move |_| state.with(|s| config.theme(s.is_dark()).clone())
    });
    let step = Memo::new(move |_| state.with(|s| s.step()));

    let pad = PadContext {
        state,
        step,
        theme,
        config,
        on_command,
    };
    let clusters = layout
        .clusters
        .into_iter()
        .map(|cluster| view! { <ClusterView cluster=cluster pad=pad.clone()/> })
        .collect_view();
    let height = (!height.is_empty()).then_some(height);

    view! {
        <svg
            class=SVG_CLASS
            width="100%"
            height=height
            viewBox=VIEW_BOX
            preserveAspectRatio=ASPECT_RATIO
        >
            {clusters}
        </svg>
    }
}

/// Declarative jog control for Leptos hosts.
///
/// ```rust,ignore
/// let (dark, set_dark) = signal(false);
/// view! {
///     <TouchJog on_command=move |gcode| send_to_printer(gcode) dark=dark height="300px"/>
/// }
/// ```
#[component]
pub fn TouchJog<F>(
    /// Called once per click with the command to send.
    on_command: F,
    /// Follows the host's dark-mode flag; the configured theme is used when absent.
    #[prop(optional, into)]
    dark: Option<Signal<bool>>,
    #[prop(optional)] config: Option<JogConfig>,
    #[prop(optional, into)] height: String,
) -> impl IntoView
where
    F: Fn(String) + Send + Sync + 'static,
{
    let config = Arc::new(config.unwrap_or_default());
    let initially_dark = dark.map(|d| d.get_untracked()).unwrap_or(config.dark_theme);
    let state = RwSignal::new(JogState::new(config.default_step, initially_dark));

    if let Some(dark) = dark {
        Effect::new(move |_| {
            let dark = dark.get();
            state.update(|s| {
                s.set_dark_theme(dark);
            });
        });
    }

    let on_command: CommandCallback = Arc::new(on_command);
    view! { <JogPad state=state config=config on_command=on_command height=height/> }
}
