//! Decode GDAL datasets into [MemRaster]s.

use gdal::{
    raster::GdalType, Dataset as GdalDataset, Metadata as GdalMetadata,
    MetadataEntry as GdalMetadataEntry,
};
use ndarray::Array3;
use std::path::Path;

use crate::{
    components::{raster::MemRaster, DataType, Metadata},
    errors::Result,
};

fn filter_metadata_gdal(metadata: &impl GdalMetadata) -> Metadata {
    GdalMetadata::metadata(metadata)
        .filter_map(|GdalMetadataEntry { domain, key, value }| {
            if domain.eq("") {
                Some((key, value))
            } else {
                None
            }
        })
        .collect()
}

pub fn open<T: DataType + GdalType, P: AsRef<Path>>(path: P) -> Result<MemRaster<T>> {
    from_dataset(&GdalDataset::open(path)?)
}

/// Reads every band, named after its description.
pub fn from_dataset<T: DataType + GdalType>(dataset: &GdalDataset) -> Result<MemRaster<T>> {
    let (width, height) = dataset.raster_size();
    let num_bands = dataset.raster_count();
    let mut samples = Vec::with_capacity(num_bands * width * height);
    let mut band_names = Vec::with_capacity(num_bands);
    for band_index in 1..=num_bands {
        let rasterband = dataset.rasterband(band_index)?;
        let buffer = rasterband.read_as::<T>((0, 0), (width, height), (width, height), None)?;
        samples.extend_from_slice(buffer.data());
        band_names.push(rasterband.description()?);
    }
    let data = Array3::from_shape_vec((num_bands, height, width), samples)?;
    MemRaster::new(data)
        .with_band_names(band_names)
        .map(|raster| raster.with_metadata(filter_metadata_gdal(dataset)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ReadParams, RectIter};
    use gdal::{raster::Buffer, DriverManager};

    #[test]
    fn reads_named_bands_from_memory_dataset() {
        let driver = DriverManager::get_driver_by_name("MEM").unwrap();
        let dataset = driver
            .create_with_band_type::<u8, _>("", 3, 2, 2)
            .unwrap();
        for (band_index, name) in [(1, "red"), (2, "nir")] {
            let mut rasterband = dataset.rasterband(band_index).unwrap();
            rasterband.set_description(name).unwrap();
            let data = (0..6).map(|sample| sample + 10 * band_index as u8).collect();
            let mut buffer = Buffer::new((3, 2), data);
            rasterband.write((0, 0), (3, 2), &mut buffer).unwrap();
        }

        let raster = from_dataset::<u8>(&dataset).unwrap();
        assert_eq!(raster.band_names(), ["red", "nir"]);

        let mut iter = raster
            .read(&ReadParams::default().with_bands(["nir"]))
            .unwrap();
        iter.start_lines();
        iter.next_line();
        iter.start_pixels();
        iter.next_pixel();
        assert_eq!(iter.sample_i32_at(0), 24);
    }
}
