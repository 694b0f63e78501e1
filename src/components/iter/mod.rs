mod read;
mod subsampled;

pub use read::{band_sequence, to_array, ReadIter};
pub use subsampled::SubsampledRectIter;

/// Cursor over a rectangle of multi-band pixels.
///
/// Lines, pixels and bands are three independent axes:
/// moving along one leaves the position on the other two untouched.
/// Each axis is walked with `start_*`, `next_*` and `finished_*`.
#[ambassador::delegatable_trait]
pub trait RectIter {
    /// Number of bands a single pixel exposes.
    fn num_bands(&self) -> usize;

    fn start_lines(&mut self);
    /// Advances one line, returns `true` once the last line has been passed.
    fn next_line_done(&mut self) -> bool;
    /// Advances `num` lines. A jump past the last line leaves the lines finished.
    fn jump_lines(&mut self, num: usize);
    fn finished_lines(&self) -> bool;
    fn next_line(&mut self) {
        self.next_line_done();
    }

    fn start_pixels(&mut self);
    /// Advances one pixel, returns `true` once the last pixel has been passed.
    fn next_pixel_done(&mut self) -> bool;
    /// Advances `num` pixels. A jump past the last pixel leaves the pixels finished.
    fn jump_pixels(&mut self, num: usize);
    fn finished_pixels(&self) -> bool;
    fn next_pixel(&mut self) {
        self.next_pixel_done();
    }

    fn start_bands(&mut self);
    /// Advances one band, returns `true` once the last band has been passed.
    fn next_band_done(&mut self) -> bool;
    fn finished_bands(&self) -> bool;
    fn next_band(&mut self) {
        self.next_band_done();
    }

    /// Sample at the current band.
    fn sample_i32(&self) -> i32;
    fn sample_f32(&self) -> f32;
    fn sample_f64(&self) -> f64;

    /// Sample at `band` of the current pixel, regardless of the band cursor.
    ///
    /// Panics if `band` is not a band of this iterator.
    fn sample_i32_at(&self, band: usize) -> i32;
    fn sample_f32_at(&self, band: usize) -> f32;
    fn sample_f64_at(&self, band: usize) -> f64;

    /// All bands of the current pixel, reusing `buf` when given.
    fn pixel_i32(&self, buf: Option<Vec<i32>>) -> Vec<i32> {
        let mut buf = buf.unwrap_or_default();
        buf.clear();
        buf.extend((0..self.num_bands()).map(|band| self.sample_i32_at(band)));
        buf
    }

    fn pixel_f32(&self, buf: Option<Vec<f32>>) -> Vec<f32> {
        let mut buf = buf.unwrap_or_default();
        buf.clear();
        buf.extend((0..self.num_bands()).map(|band| self.sample_f32_at(band)));
        buf
    }

    fn pixel_f64(&self, buf: Option<Vec<f64>>) -> Vec<f64> {
        let mut buf = buf.unwrap_or_default();
        buf.clear();
        buf.extend((0..self.num_bands()).map(|band| self.sample_f64_at(band)));
        buf
    }
}
