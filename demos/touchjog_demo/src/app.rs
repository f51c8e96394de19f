//! Application root component.

use leptos::prelude::*;
use touchjog_client::{JogConfig, TouchJog};

/// Commands kept in the on-screen log.
const LOG_LIMIT: usize = 20;

#[component]
pub fn App() -> impl IntoView {
    let dark = RwSignal::new(false);
    let sent = RwSignal::new(Vec::<String>::new());

    // Mirror the widget theme on the page background.
    Effect::new(move |_| {
        let is_dark = dark.get();
        if let Some(body) = document().body() {
            let _ = if is_dark {
                body.class_list().add_1("dark")
            } else {
                body.class_list().remove_1("dark")
            };
        }
    });

    let config = JogConfig {
        no_select_class: Some("select-none".to_string()),
        ..JogConfig::default()
    };

    let on_command = move |gcode: String| {
        log::info!("would send {gcode:?}");
        sent.update(|log| {
            log.insert(0, gcode);
            log.truncate(LOG_LIMIT);
        });
    };

    view! {
        <h1>"TouchJog"</h1>
        <button on:click=move |_| dark.update(|d| *d = !*d)>
            {move || if dark.get() { "Light theme" } else { "Dark theme" }}
        </button>
        <div style="max-width: 640px">
            <TouchJog on_command=on_command dark=dark config=config height="360px"/>
        </div>
        <h2>"Sent commands"</h2>
        <div class="command-log">
            {move || sent.get().into_iter().map(|gcode| view! { <div>{gcode}</div> }).collect_view()}
        </div>
    }
}
