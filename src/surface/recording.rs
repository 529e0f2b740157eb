//! A surface that records the raw operation stream.
//!
//! The recorded log is the ground truth of what a render produced. Two
//! renders of the same chart must produce identical logs, which tests check
//! by direct comparison.

use super::{DrawSurface, FillRule, LineCap, TextAnchor};
use crate::color::Color;

/// One recorded drawing operation, mirroring [`DrawSurface`] verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SetColor(Color),
    SetLineWidth(f64),
    SetDash(Vec<f64>),
    SetLineCap(LineCap),
    SetFillRule(FillRule),
    SetFontSize(f64),
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Circle { cx: f64, cy: f64, radius: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Fill,
    Stroke,
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    Scale { sx: f64, sy: f64 },
    ShowText { x: f64, y: f64, anchor: TextAnchor, text: String },
}

/// Surface backend that stores every operation without interpreting it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface::default()
    }

    /// The recorded operations, in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }
}

impl DrawSurface for RecordingSurface {
    fn set_color(&mut self, color: Color) {
        self.ops.push(DrawOp::SetColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::SetLineWidth(width));
    }

    fn set_dash(&mut self, dashes: &[f64]) {
        self.ops.push(DrawOp::SetDash(dashes.to_vec()));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ops.push(DrawOp::SetLineCap(cap));
    }

    fn set_fill_rule(&mut self, rule: FillRule) {
        self.ops.push(DrawOp::SetFillRule(rule));
    }

    fn set_font_size(&mut self, size: f64) {
        self.ops.push(DrawOp::SetFontSize(size));
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }

    fn circle(&mut self, cx: f64, cy: f64, radius: f64) {
        self.ops.push(DrawOp::Circle { cx, cy, radius });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::Rect { x, y, width, height });
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.ops.push(DrawOp::Translate { dx, dy });
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(DrawOp::Scale { sx, sy });
    }

    fn show_text(&mut self, x: f64, y: f64, anchor: TextAnchor, text: &str) {
        self.ops.push(DrawOp::ShowText {
            x,
            y,
            anchor,
            text: text.to_string(),
        });
    }
}
