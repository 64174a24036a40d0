use std::f64::consts::{FRAC_PI_2, PI};

use crate::foundation::core::Point;

/// Axis-aligned rounded rectangle, traversed clockwise from the left end of the top edge.
///
/// `radius` must not exceed `min(width, height) / 2`; [`crate::BorderGeometry::fit`] clamps it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundedRect {
    /// Left edge, in pixels.
    pub left: f64,
    /// Top edge, in pixels.
    pub top: f64,
    /// Outer width, in pixels.
    pub width: f64,
    /// Outer height, in pixels.
    pub height: f64,
    /// Corner radius, in pixels.
    pub radius: f64,
}

#[derive(Clone, Copy, Debug)]
enum Segment {
    Line { from: Point, to: Point },
    // Quarter-turn arc from `start_angle`, clockwise in y-down space.
    Arc { center: Point, start_angle: f64 },
}

impl Segment {
    fn point(self, radius: f64, progress: f64) -> Point {
        match self {
            Self::Line { from, to } => from.lerp(to, progress),
            Self::Arc {
                center,
                start_angle,
            } => {
                let angle = start_angle + progress * FRAC_PI_2;
                Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            }
        }
    }
}

impl RoundedRect {
    /// Build a rounded rectangle.
    pub fn new(left: f64, top: f64, width: f64, height: f64, radius: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            radius,
        }
    }

    /// Length of the top and bottom straight edges.
    pub fn straight_width(&self) -> f64 {
        self.width - 2.0 * self.radius
    }

    /// Length of the left and right straight edges.
    pub fn straight_height(&self) -> f64 {
        self.height - 2.0 * self.radius
    }

    /// Arc length of one quarter-circle corner.
    pub fn corner_arc(&self) -> f64 {
        FRAC_PI_2 * self.radius
    }

    /// Exact perimeter length.
    pub fn perimeter(&self) -> f64 {
        2.0 * self.straight_width() + 2.0 * self.straight_height() + 4.0 * self.corner_arc()
    }

    fn segments(&self) -> [(f64, Segment); 8] {
        let Self {
            left,
            top,
            width,
            height,
            radius: r,
        } = *self;
        let (right, bottom) = (left + width, top + height);
        let sw = self.straight_width();
        let sh = self.straight_height();
        let arc = self.corner_arc();

        [
            (
                sw,
                Segment::Line {
                    from: Point::new(left + r, top),
                    to: Point::new(right - r, top),
                },
            ),
            (
                arc,
                Segment::Arc {
                    center: Point::new(right - r, top + r),
                    start_angle: -FRAC_PI_2,
                },
            ),
            (
                sh,
                Segment::Line {
                    from: Point::new(right, top + r),
                    to: Point::new(right, bottom - r),
                },
            ),
            (
                arc,
                Segment::Arc {
                    center: Point::new(right - r, bottom - r),
                    start_angle: 0.0,
                },
            ),
            (
                sw,
                Segment::Line {
                    from: Point::new(right - r, bottom),
                    to: Point::new(left + r, bottom),
                },
            ),
            (
                arc,
                Segment::Arc {
                    center: Point::new(left + r, bottom - r),
                    start_angle: FRAC_PI_2,
                },
            ),
            (
                sh,
                Segment::Line {
                    from: Point::new(left, bottom - r),
                    to: Point::new(left, top + r),
                },
            ),
            (
                arc,
                Segment::Arc {
                    center: Point::new(left + r, top + r),
                    start_angle: PI,
                },
            ),
        ]
    }

    /// Point at normalized arc length `t` in `[0, 1]`.
    ///
    /// Equal steps in `t` cover equal distances along the outline, corners included.
    pub fn point_at(&self, t: f64) -> Point {
        let distance = t * self.perimeter();
        let [leading @ .., last] = self.segments();

        let mut accumulated = 0.0;
        for (len, segment) in leading {
            if distance <= accumulated + len {
                return segment.point(self.radius, progress(distance - accumulated, len));
            }
            accumulated += len;
        }

        // Unconditional tail: absorbs rounding when `t == 1`.
        let (len, segment) = last;
        segment.point(self.radius, progress(distance - accumulated, len))
    }
}

fn progress(offset: f64, len: f64) -> f64 {
    if len > 0.0 { offset / len } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rounded_rect.rs"]
mod tests;
