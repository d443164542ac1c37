//! Path-command model.
//!
//! The minimal vocabulary the cut tools emit: the absolute `M L H V A Z`
//! subset of SVG path data. [`PathData`] is the sink the compilers drive;
//! consumers either walk the command list directly or serialize it with
//! [`PathData::to_svg_data`]. Arc flags and coordinate ordering follow the
//! SVG path mini-language exactly.

use boxkit_core::Point;
use serde::{Deserialize, Serialize};

/// One absolute path command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    HorizontalTo { x: f64 },
    VerticalTo { y: f64 },
    ArcTo {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

/// An append-only command list with a tracked cursor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    commands: Vec<PathCommand>,
    cursor: Option<Point>,
    subpath_start: Option<Point>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Position after the last appended command, if any.
    pub fn current_point(&self) -> Option<Point> {
        self.cursor
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo { x: p.x, y: p.y });
        self.cursor = Some(p);
        self.subpath_start = Some(p);
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo { x: p.x, y: p.y });
        self.cursor = Some(p);
        self
    }

    pub fn horizontal_to(&mut self, x: f64) -> &mut Self {
        self.commands.push(PathCommand::HorizontalTo { x });
        if let Some(c) = self.cursor {
            self.cursor = Some(Point::new(x, c.y));
        }
        self
    }

    pub fn vertical_to(&mut self, y: f64) -> &mut Self {
        self.commands.push(PathCommand::VerticalTo { y });
        if let Some(c) = self.cursor {
            self.cursor = Some(Point::new(c.x, y));
        }
        self
    }

    /// Circular or elliptical arc to `end`. `rotation` is always emitted as
    /// zero by the cut tools (their arcs are circular), but the field is
    /// carried so the serialization stays bit-compatible with `A`.
    pub fn arc_to(&mut self, rx: f64, ry: f64, large_arc: bool, sweep: bool, end: Point) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            rx,
            ry,
            rotation: 0.0,
            large_arc,
            sweep,
            x: end.x,
            y: end.y,
        });
        self.cursor = Some(end);
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self.cursor = self.subpath_start;
        self
    }

    /// Serializes to absolute SVG path data (`d` attribute).
    pub fn to_svg_data(&self) -> String {
        let mut d = String::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo { x, y } => d.push_str(&format!("M {} {} ", x, y)),
                PathCommand::LineTo { x, y } => d.push_str(&format!("L {} {} ", x, y)),
                PathCommand::HorizontalTo { x } => d.push_str(&format!("H {} ", x)),
                PathCommand::VerticalTo { y } => d.push_str(&format!("V {} ", y)),
                PathCommand::ArcTo {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                } => d.push_str(&format!(
                    "A {} {} {} {} {} {} {} ",
                    rx,
                    ry,
                    rotation,
                    large_arc as u8,
                    sweep as u8,
                    x,
                    y
                )),
                PathCommand::Close => d.push_str("Z "),
            }
        }
        d.trim_end().to_string()
    }
}

/// A diagnostic circle a caller may render as an overlay.
///
/// Replaces the ambient debug flag of earlier designs: the tools hand
/// markers back on request and never emit them into cut paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideMarker {
    pub center: Point,
    pub radius: f64,
}
