//! Static SVG markup for a jog layout.
//!
//! Produces the same node tree the interactive renderer mounts, colored
//! for the given state. Useful for server-side pre-rendering and for
//! checking what a state looks like without a DOM.

use std::fmt::Write;

use crate::config::JogConfig;
use crate::layout::{ASPECT_RATIO, JogLayout, Part, SVG_CLASS, Shape, VIEW_BOX};
use crate::state::JogState;
use crate::theme::{Paint, PartState, Theme, color_for};

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn write_part(out: &mut String, part: &Part, state: PartState, theme: &Theme, text_class: &str) {
    let category = part.category;
    let mut class = category.class_name().to_string();
    if matches!(part.shape, Shape::Text { .. }) && !text_class.is_empty() {
        class.push(' ');
        class.push_str(text_class);
    }

    let mut attrs = format!(r#" class="{}""#, escape(&class));
    if let Some(transform) = &part.transform {
        let _ = write!(attrs, r#" transform="{transform}""#);
    }
    if let Some(width) = part.stroke_width {
        let _ = write!(attrs, r#" stroke-width="{width}""#);
    }
    if let Some(fill) = color_for(category, Paint::Fill, state, theme) {
        let _ = write!(attrs, r#" fill="{}""#, escape(fill.as_str()));
    }
    if let Some(stroke) = color_for(category, Paint::Stroke, state, theme) {
        let _ = write!(attrs, r#" stroke="{}""#, escape(stroke.as_str()));
    }

    let _ = match &part.shape {
        Shape::Rect { x, y, width, height, radius } => {
            let rounded = radius.map(|r| format!(r#" rx="{r}" ry="{r}""#)).unwrap_or_default();
            write!(out, r#"<rect x="{x}" y="{y}" width="{width}" height="{height}"{rounded}{attrs}/>"#)
        }
        Shape::Path { d } => write!(out, r#"<path d="{d}"{attrs}/>"#),
        Shape::Circle { cx, cy, r } => write!(out, r#"<circle cx="{cx}" cy="{cy}" r="{r}"{attrs}/>"#),
        Shape::Text { x, y, font_size, content } => write!(
            out,
            r#"<text x="{x}" y="{y}" font-size="{font_size}" text-anchor="middle" alignment-baseline="middle" style="cursor: default"{attrs}>{}</text>"#,
            escape(content)
        ),
    };
}

/// Renders `layout` as a standalone `<svg>` element.
///
/// `height` is copied verbatim onto the root element when non-empty.
pub fn render_svg(layout: &JogLayout, state: &JogState, config: &JogConfig, height: &str) -> String {
    let theme = config.theme(state.is_dark());
    let text_class = config.no_select_class.as_deref().unwrap_or_default();

    let mut out = String::new();
    let height_attr = if height.is_empty() {
        String::new()
    } else {
        format!(r#" height="{}""#, escape(height))
    };
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="{SVG_CLASS}" width="100%"{height_attr} viewBox="{VIEW_BOX}" preserveAspectRatio="{ASPECT_RATIO}">"#
    );

    for cluster in &layout.clusters {
        match &cluster.transform {
            Some(transform) => {
                let _ = write!(out, r#"<g data-cluster="{}" transform="{transform}">"#, cluster.name);
            }
            None => {
                let _ = write!(out, r#"<g data-cluster="{}">"#, cluster.name);
            }
        }
        for widget in &cluster.widgets {
            let _ = write!(out, r#"<g data-jog="{}""#, escape(&widget.key));
            if let Some(transform) = &widget.transform {
                let _ = write!(out, r#" transform="{transform}""#);
            }
            out.push('>');
            for part in &widget.parts {
                write_part(&mut out, part, state.part_state(widget, part.category, false), theme, text_class);
            }
            out.push_str("</g>");
        }
        out.push_str("</g>");
    }
    out.push_str("</svg>");
    out
}
