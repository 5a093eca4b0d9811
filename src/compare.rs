use crate::{camera::CameraProfile, sensor::SensorFormat};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One display row of a camera comparison.
///
/// Rows are built transiently for a table renderer and hold display-ready
/// values only. The normalized column keeps its percentage formatting; the
/// numeric value is recovered with [`ComparisonRow::percent_value`] when
/// ordering matters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComparisonRow {
    pub name: String,

    /// Stated resolution in megapixels.
    pub resolution: f64,

    /// Sensor format label, e.g. `FullFrame`.
    pub format: String,

    /// Derived frame as a `width x height` string.
    pub dimensions: String,

    /// Pixels per square millimeter.
    pub pixel_density: u32,

    /// Pixel density as a percentage of the reference camera, e.g. `42.25%`.
    pub normalized: String,
}

impl ComparisonRow {
    /// The numeric value inside the normalized percentage string.
    ///
    /// Ordering rows must compare this value, not the string, so that
    /// `42.25%` sorts below `100.0%`.
    pub fn percent_value(&self) -> f64 {
        self.normalized
            .trim_end_matches('%')
            .parse()
            .expect("normalized column holds a number followed by a percent sign")
    }
}

/// The flat collection of camera profiles under comparison.
///
/// Owns the profiles for the session. Every query below is a pure function
/// of the collection; nothing is cached or mutated.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CameraSet {
    cameras: Vec<CameraProfile>,
}

impl CameraSet {
    pub fn new(cameras: Vec<CameraProfile>) -> Self {
        Self { cameras }
    }

    /// Profiles in insertion order.
    pub fn cameras(&self) -> &[CameraProfile] {
        &self.cameras
    }

    /// Looks a camera up by its unique name.
    pub fn get(&self, name: &str) -> Option<&CameraProfile> {
        self.cameras.iter().find(|camera| camera.name() == name)
    }

    /// Cameras ordered ascending by pixel density.
    ///
    /// The sort is stable, so cameras with equal density keep their
    /// insertion order.
    pub fn ranked(&self) -> Vec<&CameraProfile> {
        let mut ranked: Vec<_> = self.cameras.iter().collect();
        ranked.sort_by_key(|camera| camera.pixel_density());
        ranked
    }

    /// Cameras of the given sensor format, ranked ascending by pixel
    /// density.
    pub fn with_format(&self, format: SensorFormat) -> Vec<&CameraProfile> {
        self.ranked()
            .into_iter()
            .filter(|camera| camera.format() == format)
            .collect()
    }

    /// Pixel density of every camera as a percentage of the camera named
    /// `reference`, in insertion order.
    ///
    /// If no camera carries the reference name, each camera is normalized
    /// against itself and every entry reads `100.0%`. The fallback is
    /// silent; an absent reference is not an error.
    pub fn normalized(&self, reference: &str) -> Vec<String> {
        let reference = self.get(reference);
        self.cameras
            .iter()
            .map(|camera| {
                let basis = reference.unwrap_or(camera);
                let percent =
                    camera.pixel_density() as f64 / basis.pixel_density() as f64 * 100.0;
                format_percent(percent)
            })
            .collect()
    }

    /// Builds display rows normalized against the camera named `reference`,
    /// sorted ascending by the normalized percentage.
    ///
    /// The sort parses the percentage back out of its column and is stable,
    /// so equal percentages keep the insertion order of their cameras.
    pub fn comparison_rows(&self, reference: &str) -> Vec<ComparisonRow> {
        let normalized = self.normalized(reference);
        let mut rows: Vec<ComparisonRow> = self
            .cameras
            .iter()
            .zip(normalized)
            .map(|(camera, normalized)| ComparisonRow {
                name: camera.name().to_string(),
                resolution: camera.resolution(),
                format: camera.format().label().to_string(),
                dimensions: camera.dimension_label(),
                pixel_density: camera.pixel_density(),
                normalized,
            })
            .collect();

        rows.sort_by(|a, b| a.percent_value().total_cmp(&b.percent_value()));
        rows
    }
}

impl FromIterator<CameraProfile> for CameraSet {
    fn from_iter<I: IntoIterator<Item = CameraProfile>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Formats a percentage rounded to two decimal places.
///
/// Trailing zeros are trimmed but at least one decimal digit is kept, so
/// whole numbers read `100.0%` and not `100.00%` or `100%`.
fn format_percent(percent: f64) -> String {
    let rounded = (percent * 100.0).round() / 100.0;
    let mut digits = format!("{rounded:.2}");
    while digits.ends_with('0') {
        digits.pop();
    }
    if digits.ends_with('.') {
        digits.push('0');
    }
    format!("{digits}%")
}
