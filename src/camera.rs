use crate::{
    error::Error,
    sensor::{ASPECT_RATIO, SensorFormat},
};
use uom::si::area::square_millimeter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A camera body described by its stated resolution and sensor format.
///
/// The pixel dimensions and pixel density are derived once at construction
/// and never change afterwards. Both follow the flooring policy of the
/// comparison: fractional pixels are discarded, not rounded.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CameraProfile {
    name: String,
    format: SensorFormat,
    resolution: f64,
    pixel_width: u32,
    pixel_height: u32,
    pixel_density: u32,
}

impl CameraProfile {
    /// Creates a profile from a camera `name`, its sensor `format`, and its
    /// stated `resolution` in megapixels.
    ///
    /// The pixel height is the side of a 3:2 frame holding `resolution`
    /// megapixels, `sqrt(resolution / aspect)` in kilopixels, floored. The
    /// width is the aspect ratio times that side, floored. The density is
    /// the total pixel count over the physical sensor area, floored to whole
    /// pixels per square millimeter.
    ///
    /// Returns an error if `name` is empty or `resolution` is not a finite
    /// number greater than zero.
    pub fn new(
        name: impl Into<String>,
        format: SensorFormat,
        resolution: f64,
    ) -> Result<Self, Error> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(Error::NonPositiveResolution { resolution });
        }

        let side = (resolution / ASPECT_RATIO).sqrt();
        let pixel_height = (side * 1000.0).floor() as u32;
        let pixel_width = (ASPECT_RATIO * side * 1000.0).floor() as u32;

        let area = format.area().get::<square_millimeter>();
        let pixel_density = (resolution * 1_000_000.0 / area).floor() as u32;

        Ok(Self {
            name,
            format,
            resolution,
            pixel_width,
            pixel_height,
            pixel_density,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> SensorFormat {
        self.format
    }

    /// Stated resolution in megapixels.
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    /// Pixels per square millimeter of sensor area.
    pub fn pixel_density(&self) -> u32 {
        self.pixel_density
    }

    /// The derived frame as a `width x height` string.
    pub fn dimension_label(&self) -> String {
        format!("{} x {}", self.pixel_width, self.pixel_height)
    }
}
