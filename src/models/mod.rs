pub mod config;
pub mod document;

pub use config::{
    parse_size, AppConfig, GridConfig, GridOverrides, LabelConfig, OriginConfig, OutputConfig,
};
pub use document::{Shape, ShapeId, TextLabel};
