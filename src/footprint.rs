use crate::{camera::CameraProfile, error::Error};
use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its center and extents.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    center: Vector2<f64>,
    width: f64,
    height: f64,
}

impl Rect {
    pub fn new(center: Vector2<f64>, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vector2<f64> {
        self.center
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Corner at center minus half the extent on each axis.
    pub fn top_left(&self) -> Vector2<f64> {
        self.center - Vector2::new(self.width, self.height) / 2.0
    }

    /// Corner at center plus half the extent on each axis.
    pub fn bottom_right(&self) -> Vector2<f64> {
        self.center + Vector2::new(self.width, self.height) / 2.0
    }
}

/// Scales camera frames into footprint rectangles sharing one center.
///
/// The footprints overlay each other concentrically inside the reference
/// rectangle, so their relative sizes can be compared at a glance.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FootprintScaler {
    reference: Rect,
}

impl FootprintScaler {
    pub fn new(reference: Rect) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &Rect {
        &self.reference
    }

    /// Computes one footprint per camera, in input order.
    ///
    /// The scale factor maps the pixel width of the highest *density* camera
    /// onto the reference width; the densest camera anchors the scale even
    /// when it is not the widest one. Every output shares the reference
    /// center exactly, and extents are floored to whole units.
    ///
    /// Returns an error if `cameras` is empty, since the scale factor is
    /// undefined without a densest camera.
    pub fn scale(&self, cameras: &[CameraProfile]) -> Result<Vec<Rect>, Error> {
        let densest = cameras
            .iter()
            .max_by_key(|camera| camera.pixel_density())
            .ok_or(Error::NoCameras)?;

        let factor = self.reference.width() / densest.pixel_width() as f64;

        Ok(cameras
            .iter()
            .map(|camera| {
                Rect::new(
                    self.reference.center(),
                    (camera.pixel_width() as f64 * factor).floor(),
                    (camera.pixel_height() as f64 * factor).floor(),
                )
            })
            .collect())
    }
}
