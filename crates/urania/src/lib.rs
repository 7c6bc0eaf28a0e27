//! Natal wheel rendering for Starwhisper.
//!
//! Takes the celestial positions returned by the chart analysis and turns them
//! into a declarative [`rendering::ChartSpec`]: a fixed zodiac ring, the bodies
//! placed on an inner ring, and a click-to-inspect detail overlay.

pub mod geometry;
pub mod library;
pub mod placement;
pub mod rendering;
pub mod selection;
pub mod svg;
pub mod wheel;
pub mod zodiac;

use serde::{Deserialize, Serialize};

pub use geometry::{to_point, RingRadii};
pub use library::{find_item, LibraryCategory, LibraryItem};
pub use placement::{place_entities, resolve_glyph, Placement, PlacementLayout};
pub use rendering::{ChartSpec, ChartSpecGenerator, WheelConfig};
pub use selection::{DetailCard, Selection};
pub use wheel::{NatalWheel, Propagation};
pub use zodiac::{ZodiacSegment, ZODIAC};

/// A named body (or chart point such as the ascendant) at an absolute zodiac
/// degree, where 0 is 0° Aries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialPosition {
    pub name: String,
    pub sign: String,
    pub angle: f64,
}

impl CelestialPosition {
    pub fn new(name: impl Into<String>, sign: impl Into<String>, angle: f64) -> Self {
        Self {
            name: name.into(),
            sign: sign.into(),
            angle,
        }
    }
}
