use geo::{Coord, Rect};
use shrinkwraprs::Shrinkwrap;

use crate::{errors::Result, intersection::Intersection};

/// Pixel bounds of a reading window.
///
/// Defined by:
///     - `offset`: (pixel, line) of the top left sample of the window,
///         with origin at the top left sample of the raster.
///     - `shape`: (W, H) a.k.a. pixels per line and lines.
///
/// In underlying impl `offset` is given by `.min`,
/// and the exclusive end by `.max`.
#[derive(Shrinkwrap, Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PixelBounds(Rect<usize>);

impl Intersection for PixelBounds {
    fn intersection(&self, rhs: &Self) -> Result<Self> {
        Ok(PixelBounds(self.0.intersection(&rhs.0)?))
    }
}

impl From<Rect<usize>> for PixelBounds {
    fn from(value: Rect<usize>) -> Self {
        Self(value)
    }
}

impl PixelBounds {
    pub fn new(offset: (usize, usize), shape: (usize, usize)) -> Self {
        let offset = Coord::from(offset);
        let max = offset + Coord::from(shape);
        Self(Rect::new(offset, max))
    }

    /// Coords of the top left sample of the window.
    pub fn offset(&self) -> Coord<usize> {
        self.0.min()
    }

    /// Exclusive bottom right corner.
    pub fn end(&self) -> Coord<usize> {
        self.0.max()
    }

    pub fn shape(&self) -> Coord<usize> {
        Coord {
            x: self.0.width(),
            y: self.0.height(),
        }
    }

    pub fn width(&self) -> usize {
        self.0.width()
    }

    pub fn height(&self) -> usize {
        self.0.height()
    }

    /// Sample count of a single band inside the window.
    pub fn size(&self) -> usize {
        self.width() * self.height()
    }
}
