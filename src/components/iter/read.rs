use ndarray::Array3;

use crate::{
    components::iter::{ambassador_impl_RectIter, RectIter, SubsampledRectIter},
    errors::Result,
};

/// Iterator handed out for a read request.
///
/// Requests that neither subsample nor select bands read the window directly.
#[derive(ambassador::Delegate, Debug)]
#[delegate(RectIter)]
pub enum ReadIter<B: RectIter> {
    Direct(B),
    Subsampled(SubsampledRectIter<B>),
}

impl<B: RectIter> ReadIter<B> {
    pub fn is_subsampled(&self) -> bool {
        matches!(self, ReadIter::Subsampled(_))
    }
}

/// Collect every pixel of `iter` into an array of shape (C, H, W).
pub fn to_array<I: RectIter>(iter: &mut I) -> Result<Array3<f64>> {
    let num_bands = iter.num_bands();
    let mut samples = Vec::new();
    let mut pixel = Vec::with_capacity(num_bands);
    let (mut lines, mut pixels) = (0, 0);

    iter.start_lines();
    while !iter.finished_lines() {
        iter.start_pixels();
        pixels = 0;
        while !iter.finished_pixels() {
            pixel = iter.pixel_f64(Some(pixel));
            samples.extend_from_slice(&pixel);
            pixels += 1;
            iter.next_pixel();
        }
        lines += 1;
        iter.next_line();
    }

    let array = Array3::from_shape_vec((lines, pixels, num_bands), samples)?;
    Ok(array.permuted_axes([2, 0, 1]).as_standard_layout().into_owned())
}

/// Samples in visiting order, walking bands with the band cursor.
pub fn band_sequence<I: RectIter>(iter: &mut I) -> Vec<f64> {
    let mut samples = Vec::new();
    iter.start_lines();
    while !iter.finished_lines() {
        iter.start_pixels();
        while !iter.finished_pixels() {
            iter.start_bands();
            if iter.num_bands() > 0 {
                loop {
                    samples.push(iter.sample_f64());
                    if iter.next_band_done() {
                        break;
                    }
                }
            }
            iter.next_pixel();
        }
        iter.next_line();
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::MemRaster;
    use ndarray::{s, Array3};

    fn raster() -> MemRaster<u16> {
        MemRaster::new(Array3::from_shape_fn((3, 4, 5), |(band, line, pixel)| {
            (band * 100 + line * 10 + pixel) as u16
        }))
    }

    #[test]
    fn direct_and_subsampled_agree_on_identity() {
        let raster = raster();
        let mut direct = ReadIter::Direct(raster.rect_iter());
        let mut subsampled =
            ReadIter::Subsampled(SubsampledRectIter::new(raster.rect_iter(), 1, 1, [0, 1, 2]).unwrap());
        assert!(!direct.is_subsampled());
        assert!(subsampled.is_subsampled());
        assert_eq!(band_sequence(&mut direct), band_sequence(&mut subsampled));
        assert_eq!(direct.num_bands(), subsampled.num_bands());
    }

    #[test]
    fn array_of_full_raster() {
        let raster = raster();
        let array = to_array(&mut raster.rect_iter()).unwrap();
        assert_eq!(array.shape(), &[3, 4, 5]);
        assert_eq!(array, raster.data().mapv(f64::from));
    }

    #[test]
    fn array_of_subsampled_view() {
        let raster = raster();
        let mut iter = SubsampledRectIter::new(raster.rect_iter(), 2, 2, [2, 0]).unwrap();
        let array = to_array(&mut iter).unwrap();
        assert_eq!(array.shape(), &[2, 2, 3]);
        let expected = raster.data().slice(s![..;2, ..;2, ..;2]).mapv(f64::from);
        assert_eq!(array.slice(s![0, .., ..]), expected.slice(s![1, .., ..]));
        assert_eq!(array.slice(s![1, .., ..]), expected.slice(s![0, .., ..]));
    }

    #[test]
    fn band_sequence_order() {
        let raster = MemRaster::new(Array3::from_shape_fn((2, 1, 2), |(band, _, pixel)| {
            (band * 10 + pixel) as u8
        }));
        let mut iter = SubsampledRectIter::new(raster.rect_iter(), 1, 1, [1, 0]).unwrap();
        assert_eq!(band_sequence(&mut iter), vec![10., 0., 11., 1.]);
    }
}
