use crate::foundation::core::{Point, Rect, Rgba8};

#[derive(Clone, Debug, PartialEq)]
/// A single recorded drawing operation.
///
/// Ops are backend-agnostic: the CPU backend rasterizes them, tests inspect them directly.
pub enum DrawOp {
    /// Reset the whole surface to transparent.
    Clear,
    FillRect {
        rect: Rect,
        paint: Paint,
    },
    StrokeRect {
        rect: Rect,
        width: f64,
        color: Rgba8,
    },
    FillCircle {
        center: Point,
        radius: f64,
        paint: Paint,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        width: f64,
        color: Rgba8,
    },
    FillPolygon {
        points: Vec<Point>,
        color: Rgba8,
    },
    Line {
        from: Point,
        to: Point,
        width: f64,
        color: Rgba8,
        dash: Option<Dash>,
    },
    Text {
        origin: Point,
        content: String,
        size_px: f32,
        bold: bool,
        color: Rgba8,
        align: TextAlign,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba8),
    Linear(LinearGradient),
}

impl From<Rgba8> for Paint {
    fn from(c: Rgba8) -> Self {
        Self::Solid(c)
    }
}

impl From<LinearGradient> for Paint {
    fn from(g: LinearGradient) -> Self {
        Self::Linear(g)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Two-stop linear gradient from `start` (color `from`) to `end` (color `to`).
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub from: Rgba8,
    pub to: Rgba8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Dash pattern. `offset` is the scrolling phase: increasing it moves dashes forward.
pub struct Dash {
    pub on: f64,
    pub off: f64,
    pub offset: f64,
}

impl Dash {
    pub fn period(self) -> f64 {
        self.on + self.off
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// `origin` is the left end of the baseline.
    #[default]
    Start,
    /// `origin` is the middle of the baseline.
    Center,
    /// `origin` is the center of the text box.
    CenterMiddle,
}

impl DrawOp {
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Clear)
    }
}
