use ndarray::ArrayView3;
use num::traits::AsPrimitive;

use crate::components::{iter::RectIter, DataType};

/// [RectIter] over a (C, H, W) window of a [MemRaster](super::MemRaster).
///
/// Jumps past the last line or pixel stop at the end.
#[derive(Debug, Clone)]
pub struct MemRectIter<'a, T: DataType> {
    window: ArrayView3<'a, T>,
    line: usize,
    pixel: usize,
    band: usize,
}

impl<'a, T: DataType> MemRectIter<'a, T> {
    pub fn new(window: ArrayView3<'a, T>) -> Self {
        Self {
            window,
            line: 0,
            pixel: 0,
            band: 0,
        }
    }

    /// (band, line, pixel) relative to the window.
    pub fn position(&self) -> (usize, usize, usize) {
        (self.band, self.line, self.pixel)
    }

    fn at(&self, band: usize) -> T {
        self.window[[band, self.line, self.pixel]]
    }

    fn lines(&self) -> usize {
        self.window.dim().1
    }

    fn pixels(&self) -> usize {
        self.window.dim().2
    }
}

impl<T: DataType> RectIter for MemRectIter<'_, T> {
    fn num_bands(&self) -> usize {
        self.window.dim().0
    }

    fn start_lines(&mut self) {
        self.line = 0;
    }

    fn next_line_done(&mut self) -> bool {
        self.jump_lines(1);
        self.finished_lines()
    }

    fn jump_lines(&mut self, num: usize) {
        self.line = self.line.saturating_add(num).min(self.lines());
    }

    fn finished_lines(&self) -> bool {
        self.line >= self.lines()
    }

    fn start_pixels(&mut self) {
        self.pixel = 0;
    }

    fn next_pixel_done(&mut self) -> bool {
        self.jump_pixels(1);
        self.finished_pixels()
    }

    fn jump_pixels(&mut self, num: usize) {
        self.pixel = self.pixel.saturating_add(num).min(self.pixels());
    }

    fn finished_pixels(&self) -> bool {
        self.pixel >= self.pixels()
    }

    fn start_bands(&mut self) {
        self.band = 0;
    }

    fn next_band_done(&mut self) -> bool {
        self.band = (self.band + 1).min(self.num_bands());
        self.finished_bands()
    }

    fn finished_bands(&self) -> bool {
        self.band >= self.num_bands()
    }

    fn sample_i32(&self) -> i32 {
        self.sample_i32_at(self.band)
    }

    fn sample_f32(&self) -> f32 {
        self.sample_f32_at(self.band)
    }

    fn sample_f64(&self) -> f64 {
        self.sample_f64_at(self.band)
    }

    fn sample_i32_at(&self, band: usize) -> i32 {
        AsPrimitive::<i32>::as_(self.at(band))
    }

    fn sample_f32_at(&self, band: usize) -> f32 {
        AsPrimitive::<f32>::as_(self.at(band))
    }

    fn sample_f64_at(&self, band: usize) -> f64 {
        AsPrimitive::<f64>::as_(self.at(band))
    }
}
