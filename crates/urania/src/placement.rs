//! Placement of bodies on the inner ring.
//!
//! Bodies are resolved to a glyph and color, nudged by a small index-based
//! jitter so near-identical angles do not stack, and joined pairwise by a
//! purely decorative mesh.

use crate::geometry::to_point;
use crate::rendering::primitives::{Color, Point};
use crate::CelestialPosition;

/// Degrees added per step of the jitter cycle.
pub const JITTER_STEP: f64 = 3.0;
/// Number of distinct jitter offsets.
pub const JITTER_CYCLE: usize = 3;
/// Color for names missing from the body table.
pub const NEUTRAL_COLOR: Color = Color::WHITE;

struct BodyEntry {
    aliases: &'static [&'static str],
    glyph: &'static str,
    color: Option<&'static str>,
}

const BODIES: &[BodyEntry] = &[
    BodyEntry { aliases: &["Sun", "太阳"], glyph: "☉", color: Some("#ffd700") },
    BodyEntry { aliases: &["Moon", "月亮"], glyph: "☽", color: Some("#e0e0e0") },
    BodyEntry { aliases: &["Mercury", "水星"], glyph: "☿", color: None },
    BodyEntry { aliases: &["Venus", "金星"], glyph: "♀", color: Some("#ffb3e6") },
    BodyEntry { aliases: &["Mars", "火星"], glyph: "♂", color: Some("#ff4d4d") },
    BodyEntry { aliases: &["Jupiter", "木星"], glyph: "♃", color: Some("#b366ff") },
    BodyEntry { aliases: &["Saturn", "土星"], glyph: "♄", color: Some("#d9d9d9") },
    BodyEntry { aliases: &["Uranus", "天王星"], glyph: "♅", color: None },
    BodyEntry { aliases: &["Neptune", "海王星"], glyph: "♆", color: None },
    BodyEntry { aliases: &["Pluto", "冥王星"], glyph: "♇", color: None },
    BodyEntry {
        aliases: &["ASC", "Ascendant", "上升", "上升点"],
        glyph: "Asc",
        color: Some("#ffffff"),
    },
];

fn lookup(name: &str) -> Option<&'static BodyEntry> {
    BODIES.iter().find(|b| b.aliases.contains(&name))
}

/// Reduce a qualified label such as `"太阳 (Sun)"` to the text inside the
/// parentheses. Everything up to the last `(` and everything from the next
/// `)` onward is dropped; names without parentheses come back unchanged.
pub fn strip_qualifier(name: &str) -> &str {
    let inner = match name.rfind('(') {
        Some(open) => &name[open + 1..],
        None => name,
    };
    match inner.find(')') {
        Some(close) => &inner[..close],
        None => inner,
    }
}

/// Glyph and color for one body.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGlyph {
    pub glyph: String,
    pub color: Color,
    /// False when the name fell through to the text fallback.
    pub known: bool,
}

/// Resolve a body name against the symbol table.
///
/// Tries the name as given, then its parenthetical core, then falls back to
/// the first two characters of the name in the neutral color.
pub fn resolve_glyph(name: &str) -> ResolvedGlyph {
    let entry = lookup(name).or_else(|| lookup(strip_qualifier(name)));
    match entry {
        Some(entry) => ResolvedGlyph {
            glyph: entry.glyph.to_string(),
            color: entry
                .color
                .and_then(Color::from_hex)
                .unwrap_or(NEUTRAL_COLOR),
            known: true,
        },
        None => ResolvedGlyph {
            glyph: name.chars().take(2).collect(),
            color: NEUTRAL_COLOR,
            known: false,
        },
    }
}

/// Placement-only angular offset for the body at `index`.
pub fn jitter_for(index: usize) -> f64 {
    (index % JITTER_CYCLE) as f64 * JITTER_STEP
}

/// One body positioned on the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub position: CelestialPosition,
    pub glyph: ResolvedGlyph,
    /// Where the glyph is drawn (true angle plus jitter).
    pub point: Point,
    /// Where the body really is (true angle, no jitter).
    pub anchor: Point,
}

/// A decorative line between two bodies' true positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshLine {
    pub from: usize,
    pub to: usize,
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementLayout {
    pub placements: Vec<Placement>,
    pub mesh: Vec<MeshLine>,
}

impl PlacementLayout {
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Place every position on the ring of `radius` around `center`.
pub fn place_entities(positions: &[CelestialPosition], radius: f64, center: Point) -> PlacementLayout {
    let placements: Vec<Placement> = positions
        .iter()
        .enumerate()
        .map(|(index, position)| Placement {
            index,
            glyph: resolve_glyph(&position.name),
            point: to_point(position.angle + jitter_for(index), radius, center),
            anchor: to_point(position.angle, radius, center),
            position: position.clone(),
        })
        .collect();
    let mesh = mesh_lines(&placements);
    PlacementLayout { placements, mesh }
}

/// Every unordered pair of distinct bodies, joined at their true positions.
///
/// Quadratic in the number of bodies; a natal chart has at most eleven.
pub fn mesh_lines(placements: &[Placement]) -> Vec<MeshLine> {
    let mut lines = Vec::new();
    for (i, a) in placements.iter().enumerate() {
        for b in &placements[i + 1..] {
            lines.push(MeshLine {
                from: a.index,
                to: b.index,
                start: a.anchor,
                end: b.anchor,
            });
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_qualifier_extracts_inner_label() {
        assert_eq!(strip_qualifier("太阳 (Sun)"), "Sun");
        assert_eq!(strip_qualifier("Sun"), "Sun");
        assert_eq!(strip_qualifier("上升 (ASC) 点"), "ASC");
    }

    #[test]
    fn resolves_both_naming_conventions() {
        assert_eq!(resolve_glyph("Moon").glyph, "☽");
        assert_eq!(resolve_glyph("月亮").glyph, "☽");
        assert_eq!(resolve_glyph("月亮 (Moon)").glyph, "☽");
        assert_eq!(resolve_glyph("Ascendant").glyph, "Asc");
    }

    #[test]
    fn bodies_without_color_use_neutral() {
        let mercury = resolve_glyph("Mercury");
        assert!(mercury.known);
        assert_eq!(mercury.color, NEUTRAL_COLOR);
    }

    #[test]
    fn unknown_names_fall_back_to_two_chars() {
        let chiron = resolve_glyph("Chiron");
        assert_eq!(chiron.glyph, "Ch");
        assert_eq!(chiron.color, NEUTRAL_COLOR);
        assert!(!chiron.known);

        assert_eq!(resolve_glyph("凯龙星").glyph, "凯龙");
        assert_eq!(resolve_glyph("X").glyph, "X");
    }

    #[test]
    fn jitter_cycles_every_three() {
        let offsets: Vec<f64> = (0..6).map(jitter_for).collect();
        assert_eq!(offsets, vec![0.0, 3.0, 6.0, 0.0, 3.0, 6.0]);
    }
}
