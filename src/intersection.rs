use geo::{CoordNum, Rect};

use crate::errors::{RasterIterError, Result};

pub trait Intersection: Sized {
    fn intersection(&self, rhs: &Self) -> Result<Self>;
}

impl<T: CoordNum> Intersection for Rect<T> {
    /// Rects that only share an edge have no intersection.
    fn intersection(&self, rhs: &Self) -> Result<Rect<T>> {
        let (lhs_min, lhs_max) = (self.min(), self.max());
        let (rhs_min, rhs_max) = (rhs.min(), rhs.max());
        if (lhs_max.x <= rhs_min.x) | (lhs_max.y <= rhs_min.y) {
            return Err(RasterIterError::NoIntersection);
        }
        if (lhs_min.x >= rhs_max.x) | (lhs_min.y >= rhs_max.y) {
            return Err(RasterIterError::NoIntersection);
        }

        let pick = |x: T, y: T, larger: bool| if (x > y) == larger { x } else { y };
        let min = (pick(lhs_min.x, rhs_min.x, true), pick(lhs_min.y, rhs_min.y, true));
        let max = (pick(lhs_max.x, rhs_max.x, false), pick(lhs_max.y, rhs_max.y, false));

        Ok(Rect::new(min, max))
    }
}
