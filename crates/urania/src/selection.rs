use crate::placement::resolve_glyph;
use crate::CelestialPosition;

/// Which body, if any, is being inspected.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    Unselected,
    Selected {
        index: usize,
        position: CelestialPosition,
    },
}

impl Selection {
    /// Select a body. Replaces any current selection directly.
    pub fn select(&mut self, index: usize, position: CelestialPosition) {
        *self = Selection::Selected { index, position };
    }

    pub fn close(&mut self) {
        *self = Selection::Unselected;
    }

    pub fn is_selected(&self, index: usize) -> bool {
        matches!(self, Selection::Selected { index: i, .. } if *i == index)
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Selection::Selected { index, .. } => Some(*index),
            Selection::Unselected => None,
        }
    }

    pub fn detail(&self) -> Option<DetailCard> {
        match self {
            Selection::Selected { position, .. } => Some(DetailCard::from_position(position)),
            Selection::Unselected => None,
        }
    }

    /// Hint shown under the wheel.
    pub fn hint(&self) -> &'static str {
        match self {
            Selection::Unselected => "点击行星符号查看详情",
            Selection::Selected { .. } => "点击 X 关闭详情",
        }
    }
}

/// Degrees within the sign and arc-minutes for an absolute angle.
///
/// Minutes come from the fractional part of the raw angle, not of the
/// within-sign remainder. Signs start on whole degrees so the two agree up to
/// float rounding; keep the raw form, it is what the chart has always shown.
pub fn sign_degree_minutes(angle: f64) -> (i32, i32) {
    let degrees = (angle % 30.0).floor() as i32;
    let minutes = ((angle % 1.0) * 60.0).floor() as i32;
    (degrees, minutes)
}

/// Contents of the detail surface for the selected body.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailCard {
    pub name: String,
    pub glyph: String,
    pub sign: String,
    pub degrees: i32,
    pub minutes: i32,
}

impl DetailCard {
    pub fn from_position(position: &CelestialPosition) -> Self {
        let (degrees, minutes) = sign_degree_minutes(position.angle);
        Self {
            name: position.name.clone(),
            glyph: resolve_glyph(&position.name).glyph,
            sign: position.sign.clone(),
            degrees,
            minutes,
        }
    }

    /// e.g. `12° 30'`
    pub fn position_label(&self) -> String {
        format!("{}° {}'", self.degrees, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sun() -> CelestialPosition {
        CelestialPosition::new("Sun", "Leo", 135.25)
    }

    fn moon() -> CelestialPosition {
        CelestialPosition::new("Moon", "Pisces", 340.5)
    }

    #[test]
    fn select_then_select_other_goes_straight_across() {
        let mut selection = Selection::default();
        selection.select(0, sun());
        assert!(selection.is_selected(0));

        selection.select(1, moon());
        assert!(selection.is_selected(1));
        assert!(!selection.is_selected(0));
        assert_eq!(selection.detail().map(|d| d.name), Some("Moon".to_string()));

        selection.close();
        assert_eq!(selection, Selection::Unselected);
        assert!(selection.detail().is_none());
    }

    #[test]
    fn degree_minutes_for_reference_angles() {
        assert_eq!(sign_degree_minutes(0.0), (0, 0));
        assert_eq!(sign_degree_minutes(29.5), (29, 30));
        assert_eq!(sign_degree_minutes(30.0), (0, 0));
        assert_eq!(sign_degree_minutes(359.99), (29, 59));
    }

    #[test]
    fn minutes_use_fraction_of_raw_angle() {
        // 45.75 sits 15.75° into Taurus; minutes read 45 from the raw .75
        assert_eq!(sign_degree_minutes(45.75), (15, 45));
    }

    #[test]
    fn detail_card_labels() {
        let card = DetailCard::from_position(&sun());
        assert_eq!(card.glyph, "☉");
        assert_eq!(card.sign, "Leo");
        assert_eq!(card.position_label(), "15° 15'");
    }

    #[test]
    fn hint_tracks_state() {
        let mut selection = Selection::default();
        assert_eq!(selection.hint(), "点击行星符号查看详情");
        selection.select(0, sun());
        assert_eq!(selection.hint(), "点击 X 关闭详情");
    }
}
