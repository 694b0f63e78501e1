mod iter;

pub use iter::MemRectIter;

use log::info;
use ndarray::{s, Array3};
use std::fmt::Debug;

use crate::{
    components::{
        bounds::PixelBounds,
        iter::{to_array, ReadIter, SubsampledRectIter},
        params::ReadParams,
        DataType, Metadata,
    },
    errors::{RasterIterError, Result},
    intersection::Intersection,
};

/// Decoded raster held in memory.
///
/// Samples are stored as (C, H, W), i.e. band, line, pixel.
/// Every band carries a name so it can be selected by it.
pub struct MemRaster<T: DataType> {
    data: Array3<T>,
    band_names: Box<[String]>,
    metadata: Metadata,
}

impl<T: DataType> Debug for MemRaster<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let f = &mut f.debug_struct("MemRaster");
        f.field("shape", &self.data.shape())
            .field("bands", &self.band_names)
            .field("metadata", &self.metadata)
            .finish()
    }
}

impl<T: DataType> MemRaster<T> {
    fn init(data: Array3<T>, band_names: Box<[String]>, metadata: Metadata) -> Self {
        let raster = Self {
            data,
            band_names,
            metadata,
        };
        info!("new {raster:?}");
        raster
    }

    /// Bands are named `band_{index}` until renamed.
    pub fn new(data: Array3<T>) -> Self {
        let band_names = (0..data.dim().0)
            .map(|index| format!("band_{index}"))
            .collect();
        Self::init(data, band_names, Metadata::new())
    }

    pub fn with_band_names<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let band_names: Box<[String]> = names.into_iter().map(Into::into).collect();
        if band_names.len() != self.num_bands() {
            return Err(RasterIterError::BandNameCount {
                names: band_names.len(),
                num_bands: self.num_bands(),
            });
        }
        self.band_names = band_names;
        Ok(self)
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn data(&self) -> &Array3<T> {
        &self.data
    }

    pub fn num_bands(&self) -> usize {
        self.data.dim().0
    }

    /// Bounds of the full raster.
    pub fn bounds(&self) -> PixelBounds {
        let (_, height, width) = self.data.dim();
        PixelBounds::new((0, 0), (width, height))
    }

    pub fn band_names(&self) -> &[String] {
        &self.band_names
    }

    pub fn band_index(&self, name: &str) -> Result<usize> {
        self.band_names
            .iter()
            .position(|band_name| band_name == name)
            .ok_or_else(|| RasterIterError::UnknownBand(name.into()))
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn rect_iter(&self) -> MemRectIter<'_, T> {
        MemRectIter::new(self.data.view())
    }

    /// Iterator over `bounds` clipped to the raster.
    pub fn rect_iter_in(&self, bounds: PixelBounds) -> Result<MemRectIter<'_, T>> {
        let bounds = self.bounds().intersection(&bounds)?;
        let (offset, end) = (bounds.offset(), bounds.end());
        let window = self.data.slice(s![.., offset.y..end.y, offset.x..end.x]);
        Ok(MemRectIter::new(window))
    }

    /// Iterator over the view described by `params`.
    pub fn read(&self, params: &ReadParams) -> Result<ReadIter<MemRectIter<'_, T>>> {
        params.validate()?;
        let window = match params.source_region {
            Some(region) => self.rect_iter_in(region)?,
            None => self.rect_iter(),
        };
        let source_bands = params
            .bands
            .indexes_from(self.num_bands(), &self.band_names)?;
        info!("reading {params:?} as bands {source_bands:?}");

        let unit_strides = (params.line_stride, params.pixel_stride) == (1, 1);
        if unit_strides && source_bands.iter().copied().eq(0..self.num_bands()) {
            return Ok(ReadIter::Direct(window));
        }
        Ok(ReadIter::Subsampled(SubsampledRectIter::new(
            window,
            params.line_stride,
            params.pixel_stride,
            source_bands,
        )?))
    }

    /// Array (C, H, W) of the view described by `params`.
    pub fn read_array(&self, params: &ReadParams) -> Result<Array3<f64>> {
        to_array(&mut self.read(params)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::RectIter;
    use rstest::{fixture, rstest};

    #[fixture]
    fn raster() -> MemRaster<u16> {
        MemRaster::new(Array3::from_shape_fn((3, 6, 8), |(band, line, pixel)| {
            (band * 100 + line * 10 + pixel) as u16
        }))
        .with_band_names(["red", "green", "blue"])
        .unwrap()
    }

    #[rstest]
    fn band_lookup(raster: MemRaster<u16>) {
        assert_eq!(raster.band_index("blue").unwrap(), 2);
        assert!(matches!(
            raster.band_index("nir"),
            Err(RasterIterError::UnknownBand(name)) if name == "nir"
        ));
    }

    #[test]
    fn default_band_names() {
        let raster = MemRaster::new(Array3::<f32>::zeros((2, 1, 1)));
        assert_eq!(raster.band_names(), ["band_0", "band_1"]);
    }

    #[rstest]
    fn wrong_band_name_count(raster: MemRaster<u16>) {
        assert!(matches!(
            raster.with_band_names(["red"]),
            Err(RasterIterError::BandNameCount {
                names: 1,
                num_bands: 3
            })
        ));
    }

    #[rstest]
    fn clipped_window(raster: MemRaster<u16>) {
        let mut iter = raster
            .rect_iter_in(PixelBounds::new((6, 4), (10, 10)))
            .unwrap();
        iter.start_lines();
        iter.start_pixels();
        assert_eq!(iter.sample_i32_at(0), 46);
        iter.jump_pixels(1);
        iter.jump_lines(1);
        assert_eq!(iter.sample_i32_at(1), 157);
        assert!(iter.next_pixel_done());
        assert!(iter.next_line_done());
    }

    #[rstest]
    fn disjoint_window(raster: MemRaster<u16>) {
        assert!(matches!(
            raster.rect_iter_in(PixelBounds::new((8, 0), (2, 2))),
            Err(RasterIterError::NoIntersection)
        ));
    }

    #[rstest]
    fn identity_read_is_direct(raster: MemRaster<u16>) {
        assert!(!raster.read(&ReadParams::default()).unwrap().is_subsampled());
        let strided = ReadParams::default().with_strides(2, 1);
        assert!(raster.read(&strided).unwrap().is_subsampled());
        let reordered = ReadParams::default().with_bands(["blue", "green", "red"]);
        assert!(raster.read(&reordered).unwrap().is_subsampled());
    }

    #[rstest]
    fn read_array_of_view(raster: MemRaster<u16>) {
        let params = ReadParams::default()
            .with_region(PixelBounds::new((1, 1), (5, 4)))
            .with_strides(2, 2)
            .with_bands(["blue", "red"]);
        let array = raster.read_array(&params).unwrap();
        assert_eq!(array.shape(), &[2, 2, 3]);
        assert_eq!(array[[0, 0, 0]], 211.);
        assert_eq!(array[[0, 1, 2]], 235.);
        assert_eq!(array[[1, 1, 1]], 33.);
    }

    #[rstest]
    fn read_rejects_unknown_band(raster: MemRaster<u16>) {
        let params = ReadParams::default().with_bands([0usize, 3]);
        assert!(matches!(
            raster.read(&params),
            Err(RasterIterError::BandOutOfRange {
                index: 3,
                num_bands: 3
            })
        ));
    }
}
