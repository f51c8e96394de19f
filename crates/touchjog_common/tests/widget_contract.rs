use touchjog_common::markup::render_svg;
use touchjog_common::{
    JogConfig, JogLayout, JogState, Paint, PartState, StepSize, Widget, WidgetAction, WidgetKind, color_for,
};

// Simulates one click: the command a host would receive, if any.
fn click(state: &mut JogState, widget: &Widget, config: &JogConfig) -> Vec<String> {
    if let WidgetAction::SelectStep(step) = widget.action {
        state.select_step(step);
    }
    state.command_for(widget, &config.motion).into_iter().collect()
}

fn setup() -> (JogConfig, JogLayout, JogState) {
    let config = JogConfig::default();
    let layout = JogLayout::build(&config);
    let mut state = JogState::from_config(&config);
    state.mark_rendered();
    (config, layout, state)
}

#[test]
fn test_plus_y_with_default_step() {
    let (config, layout, mut state) = setup();
    let sent = click(&mut state, layout.widget("y+").unwrap(), &config);
    assert_eq!(sent, ["M120\nG91\nG1 Y1\nG90\nM121"]);
}

#[test]
fn test_select_fifty_then_minus_x() {
    let (config, layout, mut state) = setup();
    assert!(click(&mut state, layout.widget("step-50").unwrap(), &config).is_empty());

    let sent = click(&mut state, layout.widget("x-").unwrap(), &config);
    assert_eq!(sent.len(), 1);
    assert!(sent[0].lines().any(|line| line == "G1 X-50"));
}

#[test]
fn test_corner_macro_is_sent_unmodified() {
    let (config, layout, mut state) = setup();
    state.select_step(StepSize::Hundred);
    let sent = click(&mut state, layout.widget("front-left").unwrap(), &config);
    assert_eq!(sent, [r#"M98 P"0:/macros/jog/frontleft.g""#]);
}

#[test]
fn test_home_all() {
    let (config, layout, mut state) = setup();
    assert_eq!(click(&mut state, layout.widget("home-all").unwrap(), &config), ["G28"]);
    assert_eq!(click(&mut state, layout.widget("home-z").unwrap(), &config), ["G28 Z"]);
}

#[test]
fn test_every_command_widget_sends_exactly_once() {
    let (config, layout, mut state) = setup();
    for widget in layout.widgets() {
        let expected = usize::from(widget.kind != WidgetKind::StepBox);
        assert_eq!(click(&mut state, widget, &config).len(), expected, "{}", widget.key);
    }
}

#[test]
fn test_theme_round_trip_restores_every_part() {
    let (config, layout, mut state) = setup();

    let snapshot = |state: &JogState| -> Vec<Option<String>> {
        let theme = config.theme(state.is_dark());
        layout
            .widgets()
            .flat_map(|w| w.parts.iter().map(move |p| (w, p)))
            .flat_map(|(w, p)| {
                let part_state: PartState = state.part_state(w, p.category, false);
                [Paint::Fill, Paint::Stroke]
                    .map(|paint| color_for(p.category, paint, part_state, theme).map(|c| c.to_string()))
            })
            .collect()
    };

    let before = snapshot(&state);
    state.set_dark_theme(true);
    assert_ne!(snapshot(&state), before);
    state.set_dark_theme(false);
    assert_eq!(snapshot(&state), before);
}

#[test]
fn test_pre_render_is_deterministic() {
    let (config, layout, state) = setup();
    let first = render_svg(&layout, &state, &config, "300px");
    let rebuilt = render_svg(&JogLayout::build(&config), &state, &config, "300px");
    assert_eq!(first, rebuilt);
}
