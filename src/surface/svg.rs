//! SVG surface backend.
//!
//! Operations are flattened as they arrive: transforms are applied to path
//! coordinates at construction time and never emitted as SVG `transform`
//! attributes. The transform stack only ever carries translations and axis
//! scalings, so circles map onto axis-aligned ellipses exactly.

use std::mem;

use svg::node::element::path::Data;
use svg::node::element::{Path, Text};
use svg::Document;

use super::{DrawSurface, FillRule, LineCap, TextAnchor};
use crate::color::Color;

const FONT_FAMILY: &str = "sans-serif";

/// A translation combined with an axis-aligned scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transform {
    sx: f64,
    sy: f64,
    tx: f64,
    ty: f64,
}

impl Transform {
    const IDENTITY: Transform = Transform {
        sx: 1.0,
        sy: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.tx + self.sx * x, self.ty + self.sy * y)
    }

    /// Compose a translation given in the current user space.
    fn translate(&mut self, dx: f64, dy: f64) {
        self.tx += self.sx * dx;
        self.ty += self.sy * dy;
    }

    fn scale(&mut self, fx: f64, fy: f64) {
        self.sx *= fx;
        self.sy *= fy;
    }

    /// Factor applied to pen width and dash lengths. Exact under uniform
    /// scaling, which is the only regime the chart strokes under.
    fn pen_scale(&self) -> f64 {
        (self.sx * self.sy).abs().sqrt()
    }
}

#[derive(Debug, Clone)]
struct GraphicsState {
    transform: Transform,
    color: Color,
    line_width: f64,
    dash: Vec<f64>,
    cap: LineCap,
    fill_rule: FillRule,
    font_size: f64,
}

impl Default for GraphicsState {
    fn default() -> Self {
        GraphicsState {
            transform: Transform::IDENTITY,
            color: Color::new(0.0, 0.0, 0.0),
            line_width: 2.0,
            dash: Vec::new(),
            cap: LineCap::Butt,
            fill_rule: FillRule::Winding,
            font_size: 10.0,
        }
    }
}

/// Surface backend that builds an SVG document.
pub struct SvgSurface {
    state: GraphicsState,
    saved: Vec<GraphicsState>,
    path: Data,
    path_started: bool,
    document: Document,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        let document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height));
        SvgSurface {
            state: GraphicsState::default(),
            saved: Vec::new(),
            path: Data::new(),
            path_started: false,
            document,
        }
    }

    /// Finish the surface and hand back the assembled document.
    pub fn into_document(self) -> Document {
        self.document
    }

    fn take_path(&mut self) -> Data {
        self.path_started = false;
        mem::replace(&mut self.path, Data::new())
    }

    fn append_segment(&mut self, build: impl FnOnce(Data) -> Data) {
        let data = mem::replace(&mut self.path, Data::new());
        self.path = build(data);
        self.path_started = true;
    }

    fn push_element(&mut self, element: impl svg::Node) {
        let document = mem::replace(&mut self.document, Document::new());
        self.document = document.add(element);
    }

    fn dash_attribute(&self) -> String {
        let pen = self.state.transform.pen_scale();
        self.state
            .dash
            .iter()
            .map(|length| (length * pen).to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl DrawSurface for SvgSurface {
    fn set_color(&mut self, color: Color) {
        self.state.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_dash(&mut self, dashes: &[f64]) {
        self.state.dash = dashes.to_vec();
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.state.cap = cap;
    }

    fn set_fill_rule(&mut self, rule: FillRule) {
        self.state.fill_rule = rule;
    }

    fn set_font_size(&mut self, size: f64) {
        self.state.font_size = size;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let (dx, dy) = self.state.transform.apply(x, y);
        self.append_segment(|data| data.move_to((dx, dy)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let (dx, dy) = self.state.transform.apply(x, y);
        self.append_segment(|data| data.line_to((dx, dy)));
    }

    fn close_path(&mut self) {
        self.append_segment(|data| data.close());
    }

    fn circle(&mut self, cx: f64, cy: f64, radius: f64) {
        let transform = self.state.transform;
        let (dx, dy) = transform.apply(cx, cy);
        let rx = radius * transform.sx.abs();
        let ry = radius * transform.sy.abs();
        self.append_segment(|data| {
            data.move_to((dx + rx, dy))
                .elliptical_arc_to((rx, ry, 0, 1, 0, dx - rx, dy))
                .elliptical_arc_to((rx, ry, 0, 1, 0, dx + rx, dy))
                .close()
        });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let transform = self.state.transform;
        let (x0, y0) = transform.apply(x, y);
        let (x1, y1) = transform.apply(x + width, y + height);
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        self.append_segment(|data| {
            data.move_to((left, top))
                .line_to((right, top))
                .line_to((right, bottom))
                .line_to((left, bottom))
                .close()
        });
    }

    fn fill(&mut self) {
        if !self.path_started {
            return;
        }
        let data = self.take_path();
        let mut element = Path::new()
            .set("d", data)
            .set("fill", self.state.color.to_hex_rgb())
            .set("stroke", "none");
        if self.state.fill_rule == FillRule::EvenOdd {
            element = element.set("fill-rule", "evenodd");
        }
        self.push_element(element);
    }

    fn stroke(&mut self) {
        if !self.path_started {
            return;
        }
        let data = self.take_path();
        let pen_width = self.state.line_width * self.state.transform.pen_scale();
        let mut element = Path::new()
            .set("d", data)
            .set("fill", "none")
            .set("stroke", self.state.color.to_hex_rgb())
            .set("stroke-width", pen_width);
        if !self.state.dash.is_empty() {
            element = element.set("stroke-dasharray", self.dash_attribute());
        }
        if self.state.cap == LineCap::Round {
            element = element.set("stroke-linecap", "round");
        }
        self.push_element(element);
    }

    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(state) => self.state = state,
            None => log::debug!("restore without a matching save, ignoring"),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform.translate(dx, dy);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.transform.scale(sx, sy);
    }

    fn show_text(&mut self, x: f64, y: f64, anchor: TextAnchor, text: &str) {
        let (dx, dy) = self.state.transform.apply(x, y);
        let anchor = match anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let element = Text::new(text)
            .set("x", dx)
            .set("y", dy)
            .set("font-size", self.state.font_size * self.state.transform.pen_scale())
            .set("font-family", FONT_FAMILY)
            .set("text-anchor", anchor)
            .set("fill", self.state.color.to_hex_rgb());
        self.push_element(element);
    }
}
