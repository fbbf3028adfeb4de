pub mod markers;
pub mod scales;
pub mod types;
pub mod value_scale;
pub mod week_scale;

pub use scales::ChartScales;
pub use types::{ActualPoint, Dataset, Interval, PredictionFrame, Viewport};
pub use value_scale::ValueScale;
pub use week_scale::WeekScale;
