use crate::placement::{place_entities, PlacementLayout};
use crate::rendering::primitives::Point;
use crate::rendering::{ChartSpec, ChartSpecGenerator, WheelConfig};
use crate::selection::{DetailCard, Selection};
use crate::{svg, CelestialPosition};

/// Whether a click should continue to the handler underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// A body consumed the click.
    Stop,
    /// Nothing on the wheel was hit; the background handler may run.
    Continue,
}

/// The interactive natal wheel: current bodies, their layout and the
/// selection.
pub struct NatalWheel {
    generator: ChartSpecGenerator,
    positions: Vec<CelestialPosition>,
    layout: PlacementLayout,
    selection: Selection,
}

impl NatalWheel {
    pub fn new(config: WheelConfig) -> Self {
        Self {
            generator: ChartSpecGenerator::with_config(config),
            positions: Vec::new(),
            layout: PlacementLayout::default(),
            selection: Selection::Unselected,
        }
    }

    /// Replace the body list. Always clears the selection.
    pub fn set_positions(&mut self, positions: Vec<CelestialPosition>) {
        let radius = self.generator.radii().entity;
        self.layout = place_entities(&positions, radius, self.generator.center());
        self.positions = positions;
        self.selection.close();
        log::debug!(
            "Wheel laid out {} bodies with {} mesh lines",
            self.layout.placements.len(),
            self.layout.mesh.len()
        );
    }

    /// Drop the chart, e.g. when the user asks for a new one.
    pub fn reset(&mut self) {
        self.set_positions(Vec::new());
    }

    pub fn positions(&self) -> &[CelestialPosition] {
        &self.positions
    }

    pub fn layout(&self) -> &PlacementLayout {
        &self.layout
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Select the body at `index`. Returns false if there is no such body.
    pub fn select(&mut self, index: usize) -> bool {
        match self.positions.get(index) {
            Some(position) => {
                self.selection.select(index, position.clone());
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.selection.close();
    }

    /// Index of the body disc under `point`, if any.
    ///
    /// Later bodies are drawn on top, so they win ties. Mesh lines are never
    /// hit.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.layout
            .placements
            .iter()
            .rev()
            .find(|p| {
                let radius = self
                    .generator
                    .disc_radius(self.selection.is_selected(p.index));
                p.point.distance_to(point) <= radius
            })
            .map(|p| p.index)
    }

    /// Handle a click on the wheel surface.
    pub fn click(&mut self, point: Point) -> Propagation {
        match self.hit_test(point) {
            Some(index) => {
                self.select(index);
                Propagation::Stop
            }
            None => Propagation::Continue,
        }
    }

    pub fn detail(&self) -> Option<DetailCard> {
        self.selection.detail()
    }

    pub fn spec(&self) -> ChartSpec {
        self.generator.generate(&self.layout, &self.selection)
    }

    pub fn to_svg(&self) -> String {
        svg::render(&self.spec())
    }
}

impl Default for NatalWheel {
    fn default() -> Self {
        Self::new(WheelConfig::default())
    }
}
