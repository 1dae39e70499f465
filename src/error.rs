use thiserror::Error;

pub type GreenResult<T> = Result<T, GreenError>;

#[derive(Debug, Error)]
pub enum GreenError {
    #[error("invalid numeric input for `{field}`: {input:?} is not a real number")]
    InvalidNumericInput { field: &'static str, input: String },

    #[error("truncation order {order} is outside [{min}, {max}]")]
    InvalidOrder { order: u32, min: u32, max: u32 },

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
