use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("prediction frame issued at week {week} has no matching observed point")]
    MissingAnchor { week: u32 },

    #[error("no dataset loaded; call `load_data` first")]
    NoDataLoaded,
}
