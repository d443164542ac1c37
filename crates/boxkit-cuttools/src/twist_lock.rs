//! Twist-lock closure geometry.
//!
//! A circular tab-and-slot mechanism: the **slot** is an arc-shaped cutout
//! through which the **tab**, a wedge bounded by two concentric arcs and two
//! radial gap cuts, rotates and seats after a partial turn. Both share the
//! same radius. The tab may additionally carry a perforated fold line whose
//! endpoint is constrained either by the gap-cut circle around the slot
//! corner or by the inner fold radius, depending on how far the fold
//! extends.

use boxkit_core::{deg2rad, Point, Segment, Validate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dasher::Dasher;
use crate::error::{CutToolError, CutToolResult};
use crate::path::{GuideMarker, PathData};

/// Radius of point guide markers, in drawing units.
const POINT_MARKER_RADIUS: f64 = 10.0;

/// Twist-lock parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TwistLockConfig {
    /// Radius of the slot arc; the tab seats against it.
    pub radius: f64,
    /// Signed half-opening of the tab wedge, in degrees. The sign selects
    /// which way the arcs sweep around the circle.
    pub tab_angle_deg: f64,
    /// Width of the radial gap cuts either side of the tab.
    pub gap_cut: f64,
    /// Height of the fold line above the slot corners; `None` means no
    /// fold line is requested.
    pub fold_height: Option<f64>,
    /// Inset keeping the fold perforation away from the gap cuts.
    pub corner_saver: f64,
}

impl Default for TwistLockConfig {
    fn default() -> Self {
        Self {
            radius: 25.0,
            tab_angle_deg: 30.0,
            gap_cut: 5.0,
            fold_height: None,
            corner_saver: 0.0,
        }
    }
}

impl Validate for TwistLockConfig {
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.radius <= 0.0 {
            violations.push("radius must be greater than zero".to_string());
        }
        if self.gap_cut <= 0.0 {
            violations.push("gap_cut must be greater than zero".to_string());
        }
        if self.corner_saver < 0.0 {
            violations.push("corner_saver must not be negative".to_string());
        }
        if let Some(fold_height) = self.fold_height {
            if fold_height < 0.0 && -fold_height > self.gap_cut {
                violations.push(
                    "negative fold_height must not exceed gap_cut or the fold point \
                     has no real solution"
                        .to_string(),
                );
            }
        }
        violations
    }
}

/// Computes slot and tab cut paths for one twist lock.
///
/// All geometry is derived in a local frame centered on the lock's circle
/// with the tab opening symmetric about the x axis, then rigidly placed by
/// the `origin` / `angle_deg` arguments of the path methods. Sweep flags
/// are invariant under that placement.
#[derive(Debug)]
pub struct TwistLock {
    config: TwistLockConfig,
}

impl TwistLock {
    pub fn new(config: TwistLockConfig) -> CutToolResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TwistLockConfig {
        &self.config
    }

    fn tab_angle(&self) -> f64 {
        deg2rad(self.config.tab_angle_deg)
    }

    fn unit_corner_point(&self) -> Point {
        let (sin, cos) = self.tab_angle().sin_cos();
        Point::new(cos, sin)
    }

    /// Upper corner of the slot, on the lock circle.
    pub fn left_slot_corner(&self) -> Point {
        self.unit_corner_point() * self.config.radius
    }

    /// Tab corner on the inner arc, at the gap cut.
    pub fn inner_gap_corner(&self) -> Point {
        self.unit_corner_point() * (self.config.radius - self.config.gap_cut)
    }

    /// Tab corner on the outer arc, at the gap cut.
    pub fn outer_gap_corner(&self) -> Point {
        self.unit_corner_point() * (self.config.radius + self.config.gap_cut)
    }

    /// Radius inside which the fold line must stay clear of the gap cuts.
    pub fn inner_fold_radius(&self) -> f64 {
        self.config.radius - self.config.gap_cut - self.config.corner_saver
    }

    /// Point on the inner fold radius at the tab angle; the y boundary
    /// between the two fold-point constructions.
    pub fn divider(&self) -> Point {
        self.unit_corner_point() * self.inner_fold_radius()
    }

    /// Endpoint of the fold line, in the local frame.
    ///
    /// Two-branch construction: when the candidate point (at
    /// `left_slot_corner.y - fold_height`) lies above the divider, its x
    /// comes from intersecting the `gap_cut + corner_saver` circle around
    /// the slot corner; otherwise from intersecting the inner-fold-radius
    /// circle around the origin.
    ///
    /// Errors with [`CutToolError::InvalidState`] when no fold height is
    /// configured.
    pub fn fold_left(&self) -> CutToolResult<Point> {
        let fold_height = self.config.fold_height.ok_or_else(|| {
            CutToolError::InvalidState("no fold height configured".to_string())
        })?;

        let position_y = self.left_slot_corner().y - fold_height;
        let constrained_by_corner = position_y > self.divider().y;
        debug!(position_y, constrained_by_corner, "fold point branch");

        let position_x = if constrained_by_corner {
            let reach = self.config.gap_cut + self.config.corner_saver;
            self.left_slot_corner().x - (reach.powi(2) - fold_height.powi(2)).sqrt()
        } else {
            (self.inner_fold_radius().powi(2) - position_y.powi(2)).sqrt()
        };

        Ok(Point::new(position_x, position_y))
    }

    /// The fold line across the tab, right-to-left mirror pair of
    /// [`fold_left`](Self::fold_left), in the local frame.
    pub fn fold_line(&self) -> CutToolResult<Segment> {
        let fold_left = self.fold_left()?;
        Ok(Segment::new(fold_left.mirror_x(), fold_left))
    }

    fn place(&self, p: Point, origin: Point, angle_deg: f64) -> Point {
        p.rotated(deg2rad(angle_deg)) + origin
    }

    /// Cut path for the slot: one radius-`r` arc between the slot corners,
    /// closed by a chord.
    ///
    /// The large-arc flag tracks the sign of the tab angle: a positive
    /// angle puts the corners in the upper half-plane and the slot takes
    /// the short way around; at or below zero it must take the long way,
    /// or the path self-intersects.
    pub fn slot_path(&self, origin: Point, angle_deg: f64) -> PathData {
        let left = self.place(self.left_slot_corner(), origin, angle_deg);
        let right = self.place(self.left_slot_corner().mirror_x(), origin, angle_deg);
        let r = self.config.radius;

        let mut path = PathData::new();
        path.move_to(left)
            .arc_to(r, r, !(self.tab_angle() > 0.0), true, right)
            .line_to(left)
            .close();
        path
    }

    /// Cut path for the tab: four arcs through the wedge corners
    /// inner/inner-mirror/outer-mirror/outer.
    ///
    /// The two concentric arcs (radii `r - g` and `r + g`) take the
    /// large-arc flag from the sign of the tab angle; the two gap-cut
    /// connector arcs (radius `g`) always sweep the same way.
    pub fn tab_path(&self, origin: Point, angle_deg: f64) -> PathData {
        let g = self.config.gap_cut;
        let inner = self.config.radius - g;
        let outer = self.config.radius + g;
        let large = self.tab_angle() > 0.0;

        let a = self.place(self.inner_gap_corner(), origin, angle_deg);
        let b = self.place(self.inner_gap_corner().mirror_x(), origin, angle_deg);
        let c = self.place(self.outer_gap_corner().mirror_x(), origin, angle_deg);
        let d = self.place(self.outer_gap_corner(), origin, angle_deg);

        let mut path = PathData::new();
        path.move_to(a)
            .arc_to(inner, inner, large, false, b)
            .arc_to(g, g, false, true, c)
            .arc_to(outer, outer, large, true, d)
            .arc_to(g, g, false, true, a);
        path
    }

    /// The perforated fold line on the tab, placed like the tab path and
    /// dashed by `dasher`.
    pub fn fold_perforation(
        &self,
        origin: Point,
        angle_deg: f64,
        dasher: &Dasher,
    ) -> CutToolResult<Vec<Segment>> {
        let local = self.fold_line()?;
        let placed = Segment::new(
            self.place(local.start, origin, angle_deg),
            self.place(local.end, origin, angle_deg),
        );
        dasher.span_sequence(&placed)
    }

    /// Diagnostic overlays: the wedge corners, the divider, the fold
    /// endpoints when a fold is configured, and the two circles
    /// constraining the fold point.
    pub fn guide_markers(&self, origin: Point, angle_deg: f64) -> Vec<GuideMarker> {
        let mut markers = Vec::new();
        for p in [
            self.inner_gap_corner(),
            self.inner_gap_corner().mirror_x(),
            self.outer_gap_corner().mirror_x(),
            self.outer_gap_corner(),
            self.divider(),
        ] {
            markers.push(GuideMarker {
                center: self.place(p, origin, angle_deg),
                radius: POINT_MARKER_RADIUS,
            });
        }
        if let Ok(fold_left) = self.fold_left() {
            for p in [fold_left, fold_left.mirror_x()] {
                markers.push(GuideMarker {
                    center: self.place(p, origin, angle_deg),
                    radius: POINT_MARKER_RADIUS,
                });
            }
        }
        markers.push(GuideMarker {
            center: self.place(self.left_slot_corner(), origin, angle_deg),
            radius: self.config.gap_cut + self.config.corner_saver,
        });
        markers.push(GuideMarker {
            center: origin,
            radius: self.inner_fold_radius(),
        });
        markers
    }
}
