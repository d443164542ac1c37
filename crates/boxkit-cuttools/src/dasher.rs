//! Dash/zigzag compiler.
//!
//! Subdivides a segment into perforation dashes, uniformly rescaling the
//! model dash length and period so the realized dashes tile the segment
//! end-to-end with no residual gap and no overrun. The same dash sequence
//! drives the finger-joint zigzag: each inter-dash gap becomes a
//! rectangular tooth jutting out by the material thickness.

use boxkit_core::{Point, Segment, Validate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CutToolError, CutToolResult};
use crate::path::{GuideMarker, PathData};

/// Radius of the endpoint guide markers, in drawing units.
const ENDPOINT_MARKER_RADIUS: f64 = 5.0;

/// Dash pattern and material parameters.
///
/// The model lengths describe the *ideal* dash pattern; the compiler scales
/// them per segment so a whole number of periods fits exactly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DasherConfig {
    /// Ideal length of one perforation dash.
    pub model_dash_length: f64,
    /// Ideal distance from one dash start to the next.
    pub model_dash_period: f64,
    /// Material thickness; tooth depth of the zigzag. Zero collapses the
    /// zigzag to a straight perforation.
    pub stock_thickness: f64,
}

impl Default for DasherConfig {
    fn default() -> Self {
        Self {
            model_dash_length: 1.0,
            model_dash_period: 4.0,
            stock_thickness: 0.5,
        }
    }
}

impl Validate for DasherConfig {
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.model_dash_length <= 0.0 {
            violations.push("model_dash_length must be greater than zero".to_string());
        }
        if self.model_dash_period <= 0.0 {
            violations.push("model_dash_period must be greater than zero".to_string());
        }
        if self.stock_thickness < 0.0 {
            violations.push("stock_thickness must not be negative".to_string());
        }
        violations
    }
}

/// Compiles segments into dash spans and finger-joint zigzags.
#[derive(Debug)]
pub struct Dasher {
    config: DasherConfig,
}

impl Dasher {
    /// Validates the configuration up front; geometry methods never fail on
    /// configuration afterwards.
    pub fn new(config: DasherConfig) -> CutToolResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DasherConfig {
        &self.config
    }

    /// The realized dash sub-segments covering `segment`, in start-to-end
    /// order.
    ///
    /// The period count is `ceil((L - d + 0.001) / p)`; the 0.001 nudge
    /// keeps the count stable when `L - d` lands on an exact multiple of
    /// `p`. Dash length and period are then rescaled by
    /// `L / (d + count * p)` so `count + 1` dashes tile the segment
    /// exactly, beginning at `segment.start` and ending at `segment.end`.
    ///
    /// A model dash longer than the segment (negative period count) is
    /// rejected as a geometry error rather than clamped.
    pub fn span_sequence(&self, segment: &Segment) -> CutToolResult<Vec<Segment>> {
        let length = segment.length();
        let d = self.config.model_dash_length;
        let p = self.config.model_dash_period;

        let period_count = ((length - d + 0.001) / p).ceil();
        if period_count < 0.0 {
            return Err(CutToolError::Geometry(format!(
                "model dash length {} does not fit segment of length {}",
                d, length
            )));
        }
        let period_count = period_count as usize;

        let model_length = d + period_count as f64 * p;
        let scale_factor = length / model_length;
        debug!(period_count, scale_factor, length, "compiled dash span");

        let dash_vector = Point::polar(d * scale_factor, segment.angle());
        let period_vector = Point::polar(p * scale_factor, segment.angle());

        let mut dashes = Vec::with_capacity(period_count + 1);
        for n in 0..=period_count {
            let start = segment.start + period_vector * n as f64;
            dashes.push(Segment::new(start, start + dash_vector));
        }
        Ok(dashes)
    }

    /// Appends the zigzag polyline for `segment` to `path` as line-to
    /// commands.
    ///
    /// Between consecutive dashes the straight connector is replaced by a
    /// rectangular tooth offset orthogonally by the stock thickness;
    /// `invert` selects the other side. The caller owns the leading
    /// move-to (see [`zigzag`](Self::zigzag) for the self-contained form),
    /// which lets several segments share one continuous outline path.
    pub fn drive_zigzag(
        &self,
        path: &mut PathData,
        segment: &Segment,
        invert: bool,
    ) -> CutToolResult<()> {
        let mut ortho_delta = Point::polar(self.config.stock_thickness, segment.angle_ortho());
        if invert {
            ortho_delta = ortho_delta * -1.0;
        }

        path.line_to(segment.start);
        let mut last_endpoint: Option<Point> = None;
        for dash in self.span_sequence(segment)? {
            if let Some(prev) = last_endpoint {
                path.line_to(prev + ortho_delta);
                path.line_to(dash.start + ortho_delta);
                path.line_to(dash.start);
            }
            path.line_to(dash.end);
            last_endpoint = Some(dash.end);
        }
        Ok(())
    }

    /// The zigzag for one segment as a standalone path, starting with a
    /// move-to at `segment.start`.
    pub fn zigzag(&self, segment: &Segment, invert: bool) -> CutToolResult<PathData> {
        let mut path = PathData::new();
        path.move_to(segment.start);
        self.drive_zigzag(&mut path, segment, invert)?;
        Ok(path)
    }

    /// Endpoint overlay circles for diagnosing mis-joined spans.
    pub fn guide_markers(&self, segment: &Segment) -> Vec<GuideMarker> {
        vec![
            GuideMarker {
                center: segment.start,
                radius: ENDPOINT_MARKER_RADIUS,
            },
            GuideMarker {
                center: segment.end,
                radius: ENDPOINT_MARKER_RADIUS,
            },
        ]
    }
}
