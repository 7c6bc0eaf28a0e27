use crate::rendering::primitives::Point;
use crate::rendering::WheelConfig;

/// Normalize any degree value into [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Map an absolute zodiac degree onto a circle of `radius` around `center`.
///
/// The drawing surface grows downward on y, so the angle is negated before the
/// polar transform. 0° lands at 3 o'clock and increasing angles run
/// counter-clockwise on screen.
pub fn to_point(angle_degrees: f64, radius: f64, center: Point) -> Point {
    let theta = -normalize_degrees(angle_degrees).to_radians();
    Point {
        x: center.x + radius * theta.cos(),
        y: center.y + radius * theta.sin(),
    }
}

/// Radii of the three reference circles of the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingRadii {
    /// Outer zodiac boundary.
    pub outer: f64,
    /// Inner zodiac boundary.
    pub middle: f64,
    /// Ring the bodies sit on.
    pub entity: f64,
}

impl RingRadii {
    pub fn from_config(config: &WheelConfig) -> Self {
        let outer = config.size / 2.0 - config.margin;
        let middle = outer - config.sign_band;
        let entity = middle - config.entity_band;
        Self {
            outer,
            middle,
            entity,
        }
    }

    /// Radius halfway through the sign band, where sign glyphs sit.
    pub fn glyph_band(&self) -> f64 {
        (self.outer + self.middle) / 2.0
    }
}
