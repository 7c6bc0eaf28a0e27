use crate::geometry::normalize_degrees;

/// Angular width of one sign.
pub const SIGN_SPAN: f64 = 30.0;

/// One of the twelve fixed 30° segments of the zodiac ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZodiacSegment {
    pub index: u8,
    pub name: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
    pub color: &'static str,
}

impl ZodiacSegment {
    /// Inclusive start of the span.
    pub fn start_angle(&self) -> f64 {
        self.index as f64 * SIGN_SPAN
    }

    /// Exclusive end of the span.
    pub fn end_angle(&self) -> f64 {
        (self.index as f64 + 1.0) * SIGN_SPAN
    }

    pub fn mid_angle(&self) -> f64 {
        self.start_angle() + SIGN_SPAN / 2.0
    }

    pub fn contains(&self, angle: f64) -> bool {
        let angle = normalize_degrees(angle);
        angle >= self.start_angle() && angle < self.end_angle()
    }
}

const fn segment(
    index: u8,
    name: &'static str,
    label: &'static str,
    glyph: &'static str,
    color: &'static str,
) -> ZodiacSegment {
    ZodiacSegment {
        index,
        name,
        label,
        glyph,
        color,
    }
}

/// The zodiac, starting at 0° Aries.
pub const ZODIAC: [ZodiacSegment; 12] = [
    segment(0, "Aries", "白羊座", "♈", "#ff4d4d"),
    segment(1, "Taurus", "金牛座", "♉", "#4da6ff"),
    segment(2, "Gemini", "双子座", "♊", "#ffd11a"),
    segment(3, "Cancer", "巨蟹座", "♋", "#ff99cc"),
    segment(4, "Leo", "狮子座", "♌", "#ffaa00"),
    segment(5, "Virgo", "处女座", "♍", "#99cc00"),
    segment(6, "Libra", "天秤座", "♎", "#ffb3e6"),
    segment(7, "Scorpio", "天蝎座", "♏", "#cc0000"),
    segment(8, "Sagittarius", "射手座", "♐", "#9933ff"),
    segment(9, "Capricorn", "摩羯座", "♑", "#808080"),
    segment(10, "Aquarius", "水瓶座", "♒", "#33ccff"),
    segment(11, "Pisces", "双鱼座", "♓", "#00cc99"),
];

/// Sign index (0-11) for an absolute degree.
pub fn sign_index(angle: f64) -> u8 {
    ((normalize_degrees(angle) / SIGN_SPAN).floor() as u8).min(11)
}

/// Segment containing an absolute degree.
pub fn segment_for(angle: f64) -> &'static ZodiacSegment {
    &ZODIAC[sign_index(angle) as usize]
}

/// Look up a sign by English name (case-insensitive) or Chinese label.
pub fn find_sign(label: &str) -> Option<&'static ZodiacSegment> {
    let label = label.trim();
    ZODIAC
        .iter()
        .find(|s| s.label == label || s.name.eq_ignore_ascii_case(label))
}
