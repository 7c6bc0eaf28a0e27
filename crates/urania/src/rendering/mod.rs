pub mod generator;
pub mod primitives;
pub mod spec;
pub mod visual_config;

pub use generator::ChartSpecGenerator;
pub use spec::{ChartMetadata, ChartSpec};
pub use visual_config::WheelConfig;
