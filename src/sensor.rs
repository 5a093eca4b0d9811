use std::fmt;
use uom::si::{
    f64::{Area, Length},
    length::millimeter,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width over height of the active sensor area.
///
/// Every format handled here exposes the same 3:2 image, so the ratio is a
/// crate-wide constant rather than a per-format property.
pub const ASPECT_RATIO: f64 = 3.0 / 2.0;

/// A physical image sensor format.
///
/// Closed set of the formats the comparison understands. Each variant carries
/// its physical dimensions, so the sensor area is never a free-floating magic
/// number at the call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorFormat {
    /// Canon APS-C, 22.2 mm x 14.8 mm.
    Apsc,

    /// Full frame, 36 mm x 24 mm.
    FullFrame,
}

impl SensorFormat {
    /// Returns the physical width and height of the active sensor area.
    pub fn dimensions(&self) -> (Length, Length) {
        match self {
            SensorFormat::Apsc => (
                Length::new::<millimeter>(22.2),
                Length::new::<millimeter>(14.8),
            ),
            SensorFormat::FullFrame => (
                Length::new::<millimeter>(36.0),
                Length::new::<millimeter>(24.0),
            ),
        }
    }

    /// Returns the active sensor area.
    pub fn area(&self) -> Area {
        let (width, height) = self.dimensions();
        width * height
    }

    /// Short label used in comparison tables.
    pub fn label(&self) -> &'static str {
        match self {
            SensorFormat::Apsc => "APSC",
            SensorFormat::FullFrame => "FullFrame",
        }
    }
}

impl fmt::Display for SensorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
