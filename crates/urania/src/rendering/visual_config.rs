use crate::rendering::primitives::Color;

/// Sizes and styling for the natal wheel.
///
/// Every radius is derived from `size`: the outer zodiac boundary sits
/// `margin` inside the canvas edge, the inner zodiac boundary `sign_band`
/// further in, and the body ring another `entity_band` in.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfig {
    pub size: f64,
    pub margin: f64,
    pub sign_band: f64,
    pub entity_band: f64,

    pub ring_color: Color,
    pub entity_ring_color: Color,
    pub divider_color: Color,
    pub mesh_color: Color,
    pub disc_fill: Color,

    pub sign_glyph_size: f64,
    pub entity_disc_radius: f64,
    pub selected_disc_radius: f64,
    pub entity_font_size: f64,
    pub selected_font_size: f64,
    pub tick_opacity: f32,
    pub selected_tick_opacity: f32,
    pub center_dot_radius: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            size: 320.0,
            margin: 10.0,
            sign_band: 40.0,
            entity_band: 30.0,

            ring_color: Color::WHITE.with_opacity(0.1),
            entity_ring_color: Color::GOLD.with_opacity(0.1),
            divider_color: Color::WHITE.with_opacity(0.2),
            mesh_color: Color::GOLD.with_opacity(0.05),
            disc_fill: Color::COSMIC_DARK,

            sign_glyph_size: 14.0,
            entity_disc_radius: 8.0,
            selected_disc_radius: 10.0,
            entity_font_size: 10.0,
            selected_font_size: 12.0,
            tick_opacity: 0.2,
            selected_tick_opacity: 0.8,
            center_dot_radius: 4.0,
        }
    }
}

impl WheelConfig {
    /// Default styling at a different canvas size.
    pub fn with_size(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}
