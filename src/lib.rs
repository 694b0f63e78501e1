//! Subsampled, band selecting views over raster pixel iterators.
//!
//! A [RectIter] walks a rectangle of multi-band pixels along three
//! independent axes. [SubsampledRectIter] wraps one to read every n-th
//! line and pixel of a selection of its bands, without copying samples.

mod components;
mod errors;
mod intersection;
mod selection;

pub use components::{
    iter::{band_sequence, to_array, ReadIter},
    DataType, MemRaster, MemRectIter, Metadata, PixelBounds, ReadParams, RectIter,
    SubsampledRectIter,
};
#[cfg(feature = "gdal")]
pub use components::gdal_source;
pub use errors::{RasterIterError, Result};
pub use intersection::Intersection;
pub use selection::BandSelection;
