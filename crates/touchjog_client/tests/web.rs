//! Browser tests. Run with `wasm-pack test --headless --firefox crates/touchjog_client`.
#![cfg(target_arch = "wasm32")]

use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use touchjog_client::{JogConfig, JogControl, StepSize, TouchJog};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

type Sent = Arc<Mutex<Vec<String>>>;

fn mount_point() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    el.style().set_property("height", "300px").unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el
}

fn recording_control(mount: &HtmlElement, config: JogConfig) -> (JogControl, Sent) {
    let sent: Sent = Arc::default();
    let sink = Arc::clone(&sent);
    let control = JogControl::with_config(mount.clone(), config, move |gcode| {
        sink.lock().unwrap().push(gcode);
    });
    (control, sent)
}

fn fast_config() -> JogConfig {
    JogConfig {
        animation_delay_ms: 20,
        ..JogConfig::default()
    }
}

fn widget(mount: &HtmlElement, key: &str) -> Element {
    mount
        .query_selector(&format!("[data-jog='{key}']"))
        .unwrap()
        .unwrap_or_else(|| panic!("no widget {key}"))
}

fn click(mount: &HtmlElement, key: &str) {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("click", &init).unwrap();
    widget(mount, key).dispatch_event(&event).unwrap();
}

fn attr(mount: &HtmlElement, selector: &str, name: &str) -> Vec<Option<String>> {
    let nodes = mount.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|el| el.get_attribute(name))
        .collect()
}

fn all_colors(mount: &HtmlElement) -> Vec<Option<String>> {
    let mut colors = attr(mount, "[fill]", "fill");
    colors.extend(attr(mount, "[stroke]", "stroke"));
    colors
}

fn node_count(mount: &HtmlElement) -> u32 {
    mount.query_selector_all("*").unwrap().length()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn render_builds_the_svg_into_the_mount() {
    let mount = mount_point();
    let (mut control, _) = recording_control(&mount, JogConfig::default());
    assert!(!control.is_rendered());

    control.render();
    assert!(control.is_rendered());

    let svg = mount.query_selector("svg.jogger").unwrap().unwrap();
    assert_eq!(svg.get_attribute("viewBox").as_deref(), Some("0 0 80 60"));
    assert_eq!(svg.get_attribute("height").as_deref(), Some("300px"));
    assert_eq!(attr(&mount, ".svg-direction-arrow", "fill").len(), 20);
    assert_eq!(attr(&mount, ".circle-button", "fill").len(), 7);
    assert_eq!(attr(&mount, ".step-button", "fill").len(), 6);
    assert_eq!(attr(&mount, ".home-text", "fill").len(), 4);
}

#[wasm_bindgen_test]
fn render_twice_does_not_duplicate() {
    let mount = mount_point();
    let (mut control, _) = recording_control(&mount, JogConfig::default());

    control.render();
    let once = node_count(&mount);
    control.render();
    assert_eq!(node_count(&mount), once);
    assert_eq!(mount.query_selector_all("svg").unwrap().length(), 1);
}

#[wasm_bindgen_test]
fn plus_y_sends_one_framed_move() {
    let mount = mount_point();
    let (mut control, sent) = recording_control(&mount, fast_config());
    control.render();

    click(&mount, "y+");
    assert_eq!(*sent.lock().unwrap(), ["M120\nG91\nG1 Y1\nG90\nM121"]);
}

#[wasm_bindgen_test]
async fn step_selection_changes_the_move_and_the_selector() {
    let mount = mount_point();
    let (mut control, sent) = recording_control(&mount, fast_config());
    control.render();

    click(&mount, "step-50");
    assert_eq!(control.current_step(), StepSize::Fifty);
    assert!(sent.lock().unwrap().is_empty());

    click(&mount, "x-");
    assert_eq!(sent.lock().unwrap().len(), 1);
    assert!(sent.lock().unwrap()[0].contains("G1 X-50"));

    sleep(5).await;
    let fills = attr(&mount, ".step-button", "fill");
    let selected = fills.iter().filter(|f| f.as_deref() == Some("black")).count();
    assert_eq!(selected, 1);
    assert_eq!(fills[1].as_deref(), Some("black"));
}

#[wasm_bindgen_test]
fn macros_and_homing_pass_through() {
    let mount = mount_point();
    let (mut control, sent) = recording_control(&mount, fast_config());
    control.render();

    click(&mount, "back-right");
    click(&mount, "home-all");
    click(&mount, "home-x");
    assert_eq!(
        *sent.lock().unwrap(),
        [r#"M98 P"0:/macros/jog/backright.g""#, "G28", "G28 X"]
    );
}

#[wasm_bindgen_test]
async fn theme_round_trip_restores_every_color() {
    let mount = mount_point();
    let (mut control, _) = recording_control(&mount, JogConfig::default());
    control.render();
    sleep(5).await;
    let light = all_colors(&mount);

    control.update_theme(true);
    sleep(5).await;
    let dark = all_colors(&mount);
    assert_ne!(dark, light);

    control.update_theme(false);
    sleep(5).await;
    assert_eq!(all_colors(&mount), light);
}

#[wasm_bindgen_test]
async fn theme_before_render_is_applied_on_render() {
    let mount = mount_point();
    let (mut control, _) = recording_control(&mount, JogConfig::default());
    control.update_theme(true);
    assert!(!control.is_rendered());

    control.render();
    sleep(5).await;
    let arrows = attr(&mount, ".svg-direction-arrow", "fill");
    assert!(arrows.iter().all(|f| f.as_deref() == Some("white")));
}

#[wasm_bindgen_test]
async fn click_flashes_then_settles() {
    let mount = mount_point();
    let (mut control, _) = recording_control(&mount, fast_config());
    control.render();

    click(&mount, "center");
    sleep(5).await;
    let center = widget(&mount, "center").first_element_child().unwrap();
    assert_eq!(center.get_attribute("fill").as_deref(), Some("#ff6600"));

    sleep(60).await;
    assert_eq!(center.get_attribute("fill").as_deref(), Some("transparent"));
    assert_eq!(center.get_attribute("stroke").as_deref(), Some("black"));
}

fn has_transition(el: &Element) -> bool {
    el.get_attribute("style").is_some_and(|s| s.contains("transition"))
}

#[wasm_bindgen_test]
async fn theme_switch_recolors_without_transition() {
    let mount = mount_point();
    let (mut control, _) = recording_control(&mount, fast_config());
    control.render();
    let arrow = mount.query_selector(".svg-direction-arrow").unwrap().unwrap();
    assert!(!has_transition(&arrow));

    control.update_theme(true);
    sleep(5).await;
    assert!(!has_transition(&arrow));
    assert_eq!(arrow.get_attribute("fill").as_deref(), Some("white"));
}

#[wasm_bindgen_test]
async fn transition_is_set_only_during_a_flash() {
    let mount = mount_point();
    let (mut control, _) = recording_control(&mount, fast_config());
    control.render();

    click(&mount, "x+");
    sleep(5).await;
    let arrow = widget(&mount, "x+").query_selector(".svg-direction-arrow").unwrap().unwrap();
    assert!(has_transition(&arrow));

    sleep(80).await;
    assert!(!has_transition(&arrow));
}

#[wasm_bindgen_test]
fn declarative_widget_starts_in_the_host_theme() {
    let mount = mount_point();
    let _handle = leptos::mount::mount_to(mount.clone(), || {
        let (dark, _) = signal(true);
        view! { <TouchJog on_command=|_: String| {} dark=dark/> }
    });

    let arrows = attr(&mount, ".svg-direction-arrow", "fill");
    assert!(!arrows.is_empty());
    assert!(arrows.iter().all(|f| f.as_deref() == Some("white")));
}

#[wasm_bindgen_test]
fn attach_reports_missing_mount() {
    let result = JogControl::attach("#does-not-exist", |_| {});
    assert!(matches!(result, Err(touchjog_client::JogError::MountNotFound(_))));
}
