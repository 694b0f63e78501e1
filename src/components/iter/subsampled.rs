use log::{debug, trace};
use std::rc::Rc;

use crate::{
    components::iter::RectIter,
    errors::{RasterIterError, Result},
};

/// Subsampled, band selecting view over a [RectIter].
///
/// One step along lines (pixels) moves the base iterator `line_stride`
/// (`pixel_stride`) lines (pixels). Band `b` of the view is band
/// `source_bands[b]` of the base, in selection order, so bands may be
/// skipped, reordered or repeated. Nothing is copied.
///
/// `finished_*` always reports the base iterator's own state.
#[derive(Debug)]
pub struct SubsampledRectIter<B: RectIter> {
    base: B,
    line_skip: usize,
    pixel_skip: usize,
    source_bands: Rc<[usize]>,
    /// Position in `source_bands`, equal to its length once exhausted.
    band_index: usize,
}

impl<B: RectIter> SubsampledRectIter<B> {
    /// Band indexes are not checked against the base iterator,
    /// reading a band it lacks panics in the base.
    pub fn new(
        base: B,
        line_stride: usize,
        pixel_stride: usize,
        source_bands: impl Into<Rc<[usize]>>,
    ) -> Result<Self> {
        if line_stride == 0 {
            return Err(RasterIterError::InvalidStride { axis: "line" });
        }
        if pixel_stride == 0 {
            return Err(RasterIterError::InvalidStride { axis: "pixel" });
        }
        let source_bands = source_bands.into();
        debug!(
            "subsampling every {line_stride} lines, {pixel_stride} pixels, bands {source_bands:?}"
        );
        Ok(Self {
            base,
            line_skip: line_stride - 1,
            pixel_skip: pixel_stride - 1,
            source_bands,
            band_index: 0,
        })
    }

    pub fn source_bands(&self) -> &[usize] {
        &self.source_bands
    }

    pub fn strides(&self) -> (usize, usize) {
        (self.line_skip + 1, self.pixel_skip + 1)
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    pub fn into_base(self) -> B {
        self.base
    }
}

impl<B: RectIter> RectIter for SubsampledRectIter<B> {
    fn num_bands(&self) -> usize {
        self.source_bands.len()
    }

    fn start_lines(&mut self) {
        self.base.start_lines()
    }

    fn next_line_done(&mut self) -> bool {
        // Skip only past a line that exists.
        if self.base.next_line_done() {
            return true;
        }
        self.base.jump_lines(self.line_skip);
        self.base.finished_lines()
    }

    fn jump_lines(&mut self, num: usize) {
        self.base.jump_lines(num.saturating_mul(self.line_skip + 1))
    }

    fn finished_lines(&self) -> bool {
        self.base.finished_lines()
    }

    fn start_pixels(&mut self) {
        self.base.start_pixels()
    }

    fn next_pixel_done(&mut self) -> bool {
        if self.base.next_pixel_done() {
            return true;
        }
        self.base.jump_pixels(self.pixel_skip);
        self.base.finished_pixels()
    }

    fn jump_pixels(&mut self, num: usize) {
        self.base.jump_pixels(num.saturating_mul(self.pixel_skip + 1))
    }

    fn finished_pixels(&self) -> bool {
        self.base.finished_pixels()
    }

    fn start_bands(&mut self) {
        self.band_index = 0;
        self.base.start_bands();
        if let Some(&first) = self.source_bands.first() {
            for _ in 0..first {
                self.base.next_band();
            }
        }
    }

    fn next_band_done(&mut self) -> bool {
        let Some(&previous) = self.source_bands.get(self.band_index) else {
            return true;
        };
        self.band_index += 1;
        let Some(&target) = self.source_bands.get(self.band_index) else {
            return true;
        };

        let steps = if target < previous {
            trace!("band {target} lies behind band {previous}, seeking from band 0");
            self.base.start_bands();
            target
        } else {
            target - previous
        };
        for _ in 0..steps {
            if self.base.next_band_done() {
                return true;
            }
        }
        false
    }

    fn finished_bands(&self) -> bool {
        self.base.finished_bands()
    }

    fn sample_i32(&self) -> i32 {
        self.base.sample_i32()
    }

    fn sample_f32(&self) -> f32 {
        self.base.sample_f32()
    }

    fn sample_f64(&self) -> f64 {
        self.base.sample_f64()
    }

    fn sample_i32_at(&self, band: usize) -> i32 {
        self.base.sample_i32_at(self.source_bands[band])
    }

    fn sample_f32_at(&self, band: usize) -> f32 {
        self.base.sample_f32_at(self.source_bands[band])
    }

    fn sample_f64_at(&self, band: usize) -> f64 {
        self.base.sample_f64_at(self.source_bands[band])
    }
}
