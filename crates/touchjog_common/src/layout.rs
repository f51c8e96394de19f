//! Fixed geometry of the jog widget.
//!
//! Everything is expressed in the `0 0 80 60` view box. [`JogLayout::build`]
//! is the single description of what gets drawn; the DOM renderer and the
//! static markup renderer both walk the same tree.

use crate::command::{Axis, Direction, JogCommand, MoveTemplate};
use crate::config::JogConfig;
use crate::step::StepSize;
use crate::theme::PartCategory;

pub const VIEW_BOX: &str = "0 0 80 60";
pub const ASPECT_RATIO: &str = "xMidYMid meet";
pub const SVG_CLASS: &str = "jogger";

const CARDINAL_DISTANCE: f64 = 17.0;
const DIAGONAL_DISTANCE: f64 = 11.0;
const CIRCLE_DISTANCE: f64 = 18.5;
const CIRCLE_RADIUS: f64 = 3.5;
const Z_ARROW_DISTANCE: f64 = 9.0;
const HOME_ROW_Y: f64 = 53.0;

const STEP_BOX_WIDTH: f64 = 15.0;
const STEP_BOX_HEIGHT: f64 = 6.5;

/// Area of the triangle symbol, matching the usual default symbol size.
const TRIANGLE_AREA: f64 = 64.0;

/// Path of an upward equilateral triangle of the given area, centered on
/// its centroid.
pub fn triangle_path(area: f64) -> String {
    let sqrt3 = 3f64.sqrt();
    let y = -(area / (sqrt3 * 3.0)).sqrt();
    format!(
        "M0,{:.4}L{:.4},{:.4}L{:.4},{:.4}Z",
        y * 2.0,
        -sqrt3 * y,
        -y,
        sqrt3 * y,
        -y
    )
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: Option<f64>,
    },
    Path {
        d: String,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Text {
        x: f64,
        y: f64,
        font_size: &'static str,
        content: String,
    },
}

/// A single drawn node and the category its colors come from.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub shape: Shape,
    pub category: PartCategory,
    pub transform: Option<String>,
    pub stroke_width: Option<&'static str>,
}

impl Part {
    fn new(shape: Shape, category: PartCategory) -> Self {
        Part {
            shape,
            category,
            transform: None,
            stroke_width: None,
        }
    }

    fn transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = Some(transform.into());
        self
    }

    fn stroke_width(mut self, width: &'static str) -> Self {
        self.stroke_width = Some(width);
        self
    }
}

/// What clicking a widget does.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetAction {
    Command(JogCommand),
    SelectStep(StepSize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Arrow,
    Circle,
    StepBox,
    HomeButton,
}

/// One clickable unit: a group of parts bound to exactly one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    /// Stable name such as `y+`, `back-left`, `step-50` or `home-all`.
    pub key: String,
    pub kind: WidgetKind,
    pub transform: Option<String>,
    pub parts: Vec<Part>,
    pub action: WidgetAction,
}

impl Widget {
    /// The step this widget selects, for step boxes.
    pub fn step(&self) -> Option<StepSize> {
        match self.action {
            WidgetAction::SelectStep(step) => Some(step),
            WidgetAction::Command(_) => None,
        }
    }
}

/// A translated group of widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub name: &'static str,
    pub transform: Option<String>,
    pub widgets: Vec<Widget>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JogLayout {
    pub clusters: Vec<Cluster>,
}

fn translate(x: f64, y: f64) -> String {
    format!("translate({x},{y})")
}

fn arrow(key: &str, template: MoveTemplate, x: f64, y: f64, rotate: f64) -> Widget {
    Widget {
        key: key.to_string(),
        kind: WidgetKind::Arrow,
        transform: Some(format!("translate({x},{y}) rotate({rotate})")),
        parts: vec![
            Part::new(
                Shape::Rect { x: 0.0, y: 0.0, width: 8.0, height: 12.0, radius: None },
                PartCategory::ArrowBuffer,
            )
            .transform("translate(-4 -5)"),
            Part::new(Shape::Path { d: triangle_path(TRIANGLE_AREA) }, PartCategory::DirectionArrow)
                .transform("scale(0.7,0.7)")
                .stroke_width("1px"),
            Part::new(
                Shape::Rect { x: 0.0, y: 0.0, width: 3.0, height: 8.0, radius: None },
                PartCategory::DirectionArrow,
            )
            .transform("translate(-1.5,0)"),
        ],
        action: WidgetAction::Command(JogCommand::Move(template)),
    }
}

fn circle(key: &str, command: JogCommand, cx: f64, cy: f64) -> Widget {
    Widget {
        key: key.to_string(),
        kind: WidgetKind::Circle,
        transform: None,
        parts: vec![
            Part::new(Shape::Circle { cx, cy, r: CIRCLE_RADIUS }, PartCategory::CircleButton).stroke_width("0.25px"),
        ],
        action: WidgetAction::Command(command),
    }
}

fn step_box(index: usize, step: StepSize) -> Widget {
    let row = index as f64;
    Widget {
        key: format!("step-{step}"),
        kind: WidgetKind::StepBox,
        transform: None,
        parts: vec![
            Part::new(
                Shape::Rect {
                    x: 0.0,
                    y: row * STEP_BOX_HEIGHT + row,
                    width: STEP_BOX_WIDTH,
                    height: STEP_BOX_HEIGHT,
                    radius: Some(1.0),
                },
                PartCategory::StepButton,
            )
            .stroke_width("0.25px"),
            Part::new(
                Shape::Text {
                    x: STEP_BOX_WIDTH / 2.0,
                    y: row * STEP_BOX_HEIGHT + STEP_BOX_HEIGHT / 2.0 + row + 0.25,
                    font_size: "3px",
                    content: step.to_string(),
                },
                PartCategory::StepText,
            ),
        ],
        action: WidgetAction::SelectStep(step),
    }
}

fn home_button(key: &str, label: &str, command: &str, x: f64) -> Widget {
    Widget {
        key: key.to_string(),
        kind: WidgetKind::HomeButton,
        transform: Some(translate(x, HOME_ROW_Y)),
        parts: vec![
            // wall
            Part::new(
                Shape::Rect { x: -4.0, y: 0.0, width: 8.0, height: 8.0, radius: None },
                PartCategory::HomeIcon,
            )
            .stroke_width("0.1px"),
            // chimney
            Part::new(
                Shape::Rect { x: 2.5, y: -3.5, width: 1.5, height: 4.0, radius: None },
                PartCategory::HomeIcon,
            )
            .stroke_width("0.1px"),
            // roof
            Part::new(Shape::Path { d: triangle_path(TRIANGLE_AREA) }, PartCategory::HomeIcon)
                .transform("scale(1,0.6)")
                .stroke_width("0.1px"),
            Part::new(
                Shape::Text { x: 0.0, y: 5.1, font_size: "5px", content: label.to_string() },
                PartCategory::HomeText,
            ),
        ],
        action: WidgetAction::Command(JogCommand::Home(command.to_string())),
    }
}

impl JogLayout {
    pub fn build(config: &JogConfig) -> Self {
        use Axis::{X, Y, Z};
        use Direction::{Negative as Neg, Positive as Pos};

        let macros = &config.macros;
        let (d, g, c) = (CARDINAL_DISTANCE, DIAGONAL_DISTANCE, CIRCLE_DISTANCE);

        let xy = Cluster {
            name: "xy",
            transform: Some(translate(25.0, 25.0)),
            widgets: vec![
                arrow("y+", MoveTemplate::axes(&[(Y, Pos)]), 0.0, -d, 0.0),
                arrow("x+", MoveTemplate::axes(&[(X, Pos)]), d, 0.0, 90.0),
                arrow("y-", MoveTemplate::axes(&[(Y, Neg)]), 0.0, d, 180.0),
                arrow("x-", MoveTemplate::axes(&[(X, Neg)]), -d, 0.0, -90.0),
                arrow("x+y+", MoveTemplate::axes(&[(X, Pos), (Y, Pos)]), g, -g, 45.0),
                arrow("x+y-", MoveTemplate::axes(&[(X, Pos), (Y, Neg)]), g, g, 135.0),
                arrow("x-y-", MoveTemplate::axes(&[(X, Neg), (Y, Neg)]), -g, g, 225.0),
                arrow("x-y+", MoveTemplate::axes(&[(X, Neg), (Y, Pos)]), -g, -g, 315.0),
                circle("center", macros.call(&macros.center), 0.0, 0.0),
                circle("back-left", macros.call(&macros.back_left), -c, -c),
                circle("back-right", macros.call(&macros.back_right), c, -c),
                circle("front-right", macros.call(&macros.front_right), c, c),
                circle("front-left", macros.call(&macros.front_left), -c, c),
            ],
        };

        let steps = Cluster {
            name: "steps",
            transform: Some(translate(50.0, 3.0)),
            widgets: StepSize::ALL.iter().enumerate().map(|(i, step)| step_box(i, *step)).collect(),
        };

        let z = Cluster {
            name: "z",
            transform: Some(translate(72.0, 25.0)),
            widgets: vec![
                arrow("z+", MoveTemplate::axes(&[(Z, Pos)]), 0.0, -Z_ARROW_DISTANCE, 0.0),
                arrow("z-", MoveTemplate::axes(&[(Z, Neg)]), 0.0, Z_ARROW_DISTANCE, 180.0),
                circle("z-max", macros.call(&macros.z_max), 0.0, -c),
                circle("z-min", macros.call(&macros.z_min), 0.0, c),
            ],
        };

        let homing = &config.homing;
        let homes = Cluster {
            name: "home",
            transform: None,
            widgets: vec![
                home_button("home-x", "X", &homing.x, 10.0),
                home_button("home-y", "Y", &homing.y, 25.0),
                home_button("home-z", "Z", &homing.z, 40.0),
                home_button("home-all", "All", &homing.all, 57.5),
            ],
        };

        JogLayout {
            clusters: vec![xy, steps, z, homes],
        }
    }

    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.clusters.iter().flat_map(|c| c.widgets.iter())
    }

    pub fn widget(&self, key: &str) -> Option<&Widget> {
        self.widgets().find(|w| w.key == key)
    }

    /// Number of drawn nodes: clusters, widget groups and their parts.
    pub fn node_count(&self) -> usize {
        self.clusters.len() + self.widgets().map(|w| 1 + w.parts.len()).sum::<usize>()
    }
}
