use crate::constants::MAX_VERTICAL_TOLERANCE;
use crate::data::Point;

#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("Invalid element geometry: zero or non-finite length between {p1} and {p2}")]
    InvalidElementGeometry { p1: Point, p2: Point },

    #[error("Invalid roll angle: {0}")]
    InvalidRollAngle(f64),

    #[error("Invalid vertical tolerance: {0} (must be in [0, {max}])", max = MAX_VERTICAL_TOLERANCE)]
    InvalidTolerance(f64),

    #[error("Invalid point '{0}', expected three comma-separated numbers")]
    InvalidPoint(String),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
