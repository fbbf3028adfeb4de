mod chart_model;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod pointer;

pub use engine::ChartEngine;
pub use engine_config::{
    ChartEngineConfig, DEFAULT_CHART_HEIGHT_PX, HOST_HORIZONTAL_MARGIN_PX,
};
pub use pointer::PredictionPointer;
