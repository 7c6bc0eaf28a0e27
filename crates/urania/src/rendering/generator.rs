use crate::geometry::{to_point, RingRadii};
use crate::placement::PlacementLayout;
use crate::rendering::primitives::{Color, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::{ChartMetadata, ChartSpec};
use crate::rendering::visual_config::WheelConfig;
use crate::selection::Selection;
use crate::zodiac::ZODIAC;

/// ChartSpec generator - converts placed bodies into a ChartSpec
pub struct ChartSpecGenerator {
    config: WheelConfig,
}

impl ChartSpecGenerator {
    /// Create a new generator with the default config
    pub fn new() -> Self {
        Self {
            config: WheelConfig::default(),
        }
    }

    pub fn with_config(config: WheelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.config.size / 2.0,
            y: self.config.size / 2.0,
        }
    }

    pub fn radii(&self) -> RingRadii {
        RingRadii::from_config(&self.config)
    }

    /// Generate the full wheel: static ring, mesh, then bodies on top.
    pub fn generate(&self, layout: &PlacementLayout, selection: &Selection) -> ChartSpec {
        let mut spec = ChartSpec::new(self.config.size, self.config.size);
        spec.shapes.extend(self.zodiac_ring_shapes());
        spec.shapes.extend(self.mesh_shapes(layout));
        spec.shapes.extend(self.entity_shapes(layout, selection));
        spec.shapes.push(Shape::Circle {
            center: self.center(),
            radius: self.config.center_dot_radius,
            fill: Some(Color::GOLD.with_opacity(0.5)),
            stroke: None,
        });

        spec.metadata = ChartMetadata {
            entity_count: layout.placements.len(),
            mesh_line_count: layout.mesh.len(),
            selected: selection.selected_index(),
            hint: selection.hint().to_string(),
        };
        spec
    }

    /// Reference circles, sign dividers and sign glyphs. Same for every chart.
    pub fn zodiac_ring_shapes(&self) -> Vec<Shape> {
        let center = self.center();
        let radii = self.radii();
        let mut shapes = Vec::with_capacity(3 + ZODIAC.len() * 2);

        for (radius, color) in [
            (radii.outer, self.config.ring_color),
            (radii.middle, self.config.ring_color),
            (radii.entity, self.config.entity_ring_color),
        ] {
            shapes.push(Shape::Circle {
                center,
                radius,
                fill: None,
                stroke: Some(Stroke::solid(color, 1.0)),
            });
        }

        for sign in ZODIAC.iter() {
            shapes.push(Shape::Line {
                from: to_point(sign.start_angle(), radii.outer, center),
                to: to_point(sign.start_angle(), radii.middle, center),
                stroke: Stroke::solid(self.config.divider_color, 1.0),
            });
            shapes.push(Shape::Text {
                position: to_point(sign.mid_angle(), radii.glyph_band(), center),
                content: sign.glyph.to_string(),
                size: self.config.sign_glyph_size,
                color: Color::from_hex(sign.color).unwrap_or(Color::WHITE),
                anchor: TextAnchor::Middle,
                bold: true,
            });
        }

        shapes
    }

    fn mesh_shapes(&self, layout: &PlacementLayout) -> Vec<Shape> {
        layout
            .mesh
            .iter()
            .map(|line| Shape::Line {
                from: line.start,
                to: line.end,
                stroke: Stroke::solid(self.config.mesh_color, 1.0),
            })
            .collect()
    }

    fn entity_shapes(&self, layout: &PlacementLayout, selection: &Selection) -> Vec<Shape> {
        let center = self.center();
        let mut shapes = Vec::with_capacity(layout.placements.len() * 2);

        for placement in &layout.placements {
            let selected = selection.is_selected(placement.index);
            let color = placement.glyph.color;
            let tick_opacity = if selected {
                self.config.selected_tick_opacity
            } else {
                self.config.tick_opacity
            };

            shapes.push(Shape::Line {
                from: center,
                to: placement.point,
                stroke: Stroke {
                    color: color.with_opacity(tick_opacity),
                    width: 1.0,
                    dash_array: Some(vec![2.0, 4.0]),
                },
            });
            shapes.push(Shape::EntityGlyph {
                index: placement.index,
                center: placement.point,
                glyph: placement.glyph.glyph.clone(),
                color,
                disc_fill: self.config.disc_fill,
                disc_radius: self.disc_radius(selected),
                font_size: if selected {
                    self.config.selected_font_size
                } else {
                    self.config.entity_font_size
                },
                selected,
            });
        }

        shapes
    }

    /// Clickable radius of a body disc.
    pub fn disc_radius(&self, selected: bool) -> f64 {
        if selected {
            self.config.selected_disc_radius
        } else {
            self.config.entity_disc_radius
        }
    }
}

impl Default for ChartSpecGenerator {
    fn default() -> Self {
        Self::new()
    }
}
