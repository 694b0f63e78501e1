pub mod bounds;
#[cfg(feature = "gdal")]
pub mod gdal_source;
pub mod iter;
pub mod params;
pub mod raster;

pub use bounds::PixelBounds;
pub use iter::{RectIter, SubsampledRectIter};
pub use params::ReadParams;
pub use raster::{MemRaster, MemRectIter};

use num::{traits::AsPrimitive, Num};
use std::{collections::HashMap, fmt::Debug};

pub type Metadata = HashMap<String, String>;

/// Sample types a [MemRaster] can hold.
pub trait DataType:
    Num + Copy + Send + Sync + Debug + 'static + AsPrimitive<i32> + AsPrimitive<f32> + AsPrimitive<f64>
{
}

impl<T> DataType for T where
    T: Num
        + Copy
        + Send
        + Sync
        + Debug
        + 'static
        + AsPrimitive<i32>
        + AsPrimitive<f32>
        + AsPrimitive<f64>
{
}
