pub type Result<T> = std::result::Result<T, RasterIterError>;

#[derive(thiserror::Error, Debug)]
pub enum RasterIterError {
    #[cfg(feature = "gdal")]
    #[error(transparent)]
    GdalError(#[from] gdal::errors::GdalError),
    #[error(transparent)]
    NdarrayError(#[from] ndarray::ShapeError),
    #[error("{axis} stride must be at least 1")]
    InvalidStride { axis: &'static str },
    #[error("Band {index} is out of range for a raster with {num_bands} bands")]
    BandOutOfRange { index: usize, num_bands: usize },
    #[error("There is no band named {0:?}")]
    UnknownBand(String),
    #[error("Got {names} band names for {num_bands} bands")]
    BandNameCount { names: usize, num_bands: usize },
    #[error("There is no intersection between pixel bounds")]
    NoIntersection,
}
