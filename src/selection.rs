use std::{collections::HashSet, hash::RandomState, rc::Rc};

use itertools::Itertools;

use crate::errors::{RasterIterError, Result};

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
enum Selection {
    Indexes(Rc<[usize]>),
    Names(Rc<[String]>),
}

/// Bands to read, by index or by name, in the order they are read.
///
/// With `drop` set the listed bands are left out instead and
/// the remaining ones are read in ascending order.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BandSelection {
    selection: Selection,
    #[serde(default)]
    drop: bool,
}

impl<const N: usize> From<([usize; N], bool)> for BandSelection {
    fn from(value: ([usize; N], bool)) -> Self {
        let selection = Selection::Indexes(Rc::from(value.0));
        let drop = value.1;
        BandSelection { selection, drop }
    }
}

impl From<(std::ops::Range<usize>, bool)> for BandSelection {
    fn from(value: (std::ops::Range<usize>, bool)) -> Self {
        let selection = Selection::Indexes(value.0.collect());
        let drop = value.1;
        BandSelection { selection, drop }
    }
}

impl<const N: usize> From<[usize; N]> for BandSelection {
    fn from(value: [usize; N]) -> Self {
        BandSelection::from((value, false))
    }
}

impl From<std::ops::Range<usize>> for BandSelection {
    fn from(value: std::ops::Range<usize>) -> Self {
        BandSelection::from((value, false))
    }
}

impl From<Vec<usize>> for BandSelection {
    fn from(value: Vec<usize>) -> Self {
        BandSelection {
            selection: Selection::Indexes(Rc::from(value)),
            drop: false,
        }
    }
}

impl<const N: usize> From<[&str; N]> for BandSelection {
    fn from(value: [&str; N]) -> Self {
        BandSelection::names(value)
    }
}

impl Default for BandSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl BandSelection {
    pub fn all() -> Self {
        Self {
            selection: Selection::Indexes(Rc::from([])),
            drop: true,
        }
    }

    pub fn names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            selection: Selection::Names(names.into_iter().map(Into::into).collect()),
            drop: false,
        }
    }

    /// Same bands, left out instead of read.
    pub fn dropped(self) -> Self {
        Self { drop: true, ..self }
    }

    /// Absolute band indexes for a raster with `num_bands` bands named `band_names`.
    pub fn indexes_from(&self, num_bands: usize, band_names: &[String]) -> Result<Rc<[usize]>> {
        let idxs: Rc<[usize]> = match &self.selection {
            Selection::Indexes(idxs) => {
                if let Some(&index) = idxs.iter().find(|idx| **idx >= num_bands) {
                    return Err(RasterIterError::BandOutOfRange { index, num_bands });
                }
                Rc::clone(idxs)
            }
            Selection::Names(names) => names
                .iter()
                .map(|name| {
                    band_names
                        .iter()
                        .position(|band_name| band_name == name)
                        .ok_or_else(|| RasterIterError::UnknownBand(name.clone()))
                })
                .collect::<Result<_>>()?,
        };
        if self.drop {
            let drop_idxs: HashSet<usize, RandomState> = idxs.iter().copied().collect();
            Ok(HashSet::<usize, RandomState>::from_iter(0..num_bands)
                .difference(&drop_idxs)
                .copied()
                .sorted()
                .collect())
        } else {
            Ok(idxs)
        }
    }
}
