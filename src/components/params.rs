use crate::{
    components::bounds::PixelBounds,
    errors::{RasterIterError, Result},
    selection::BandSelection,
};

fn unit_stride() -> usize {
    1
}

/// What part of a raster to read and how.
///
/// Defaults read every band of the full raster without subsampling.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ReadParams {
    /// Window to read, clipped to the raster.
    #[serde(default)]
    pub source_region: Option<PixelBounds>,
    /// Raster lines per line read.
    #[serde(default = "unit_stride")]
    pub line_stride: usize,
    /// Raster pixels per pixel read.
    #[serde(default = "unit_stride")]
    pub pixel_stride: usize,
    #[serde(default)]
    pub bands: BandSelection,
}

impl Default for ReadParams {
    fn default() -> Self {
        Self {
            source_region: None,
            line_stride: 1,
            pixel_stride: 1,
            bands: BandSelection::all(),
        }
    }
}

impl ReadParams {
    pub fn with_region(mut self, region: PixelBounds) -> Self {
        self.source_region = Some(region);
        self
    }

    pub fn with_strides(mut self, line_stride: usize, pixel_stride: usize) -> Self {
        self.line_stride = line_stride;
        self.pixel_stride = pixel_stride;
        self
    }

    pub fn with_bands(mut self, bands: impl Into<BandSelection>) -> Self {
        self.bands = bands.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.line_stride == 0 {
            return Err(RasterIterError::InvalidStride { axis: "line" });
        }
        if self.pixel_stride == 0 {
            return Err(RasterIterError::InvalidStride { axis: "pixel" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_object() {
        let params: ReadParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, ReadParams::default());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn deserialize_full() {
        let params: ReadParams = serde_json::from_str(
            r#"{
                "source_region": {"min": {"x": 1, "y": 2}, "max": {"x": 5, "y": 6}},
                "line_stride": 2,
                "pixel_stride": 3,
                "bands": {"selection": {"names": ["red", "nir"]}}
            }"#,
        )
        .unwrap();
        let expected = ReadParams::default()
            .with_region(PixelBounds::new((1, 2), (4, 4)))
            .with_strides(2, 3)
            .with_bands(["red", "nir"]);
        assert_eq!(params, expected);
    }

    #[test]
    fn zero_stride() {
        let params = ReadParams::default().with_strides(1, 0);
        assert!(matches!(
            params.validate(),
            Err(RasterIterError::InvalidStride { axis: "pixel" })
        ));
    }
}
