use thiserror::Error;

/// An input coordinate whose magnitude exceeds
/// [`MAX_COORDINATE`](crate::model::point::MAX_COORDINATE).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Coordinate {0} is out of range")]
pub struct CoordinateOutOfRange(pub i64);

/// Rejections from the street store. The store is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("You already have \"{0}\" in the graph")]
    DuplicateStreet(String),
    #[error("Street \"{0}\" does not exist")]
    UnknownStreet(String),
    #[error("No vertices specified")]
    EmptyPointList,
    #[error(transparent)]
    CoordinateOutOfRange(#[from] CoordinateOutOfRange),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
