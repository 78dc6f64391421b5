//! Bounding box types for the centre, corner and pixel conventions.

use serde::Serialize;
use std::marker::PhantomData;

use super::{Normalized, Percent};

/// A box given by its centre point and extent (the YOLO layout).
///
/// The `TSpace` parameter should be [`Normalized`](super::Normalized) for
/// YOLO label rows.
///
/// Note: no range checks are performed. Values outside the image are kept
/// and carried through conversions as-is.
#[derive(Clone, Copy, PartialEq)]
pub struct CenterBox<TSpace> {
    pub cx: f64,
    pub cy: f64,
    pub width: f64,
    pub height: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> CenterBox<TSpace> {
    #[inline]
    pub fn new(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            cx,
            cy,
            width,
            height,
            _space: PhantomData,
        }
    }
}

/// A box given by its upper-left corner and extent (the Label Studio layout).
///
/// The `TSpace` parameter should be [`Percent`](super::Percent) for Label
/// Studio rectangle results.
#[derive(Clone, Copy, PartialEq)]
pub struct CornerBox<TSpace> {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> CornerBox<TSpace> {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            _space: PhantomData,
        }
    }
}

/// An integer pixel rectangle: upper-left corner plus extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl PixelRect {
    #[inline]
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `(x, y, width, height)`.
    #[inline]
    pub fn to_xywh(&self) -> (i64, i64, i64, i64) {
        (self.x, self.y, self.width, self.height)
    }

    /// Converts back to a normalized centre box.
    ///
    /// Inverse of [`CenterBox::to_pixel_rect`] up to its truncation: width
    /// and height come back at most `1 / image_size` short, the centre at
    /// most `1.5 / image_size` off.
    pub fn to_normalized_center(
        &self,
        image_width: f64,
        image_height: f64,
    ) -> CenterBox<Normalized> {
        let w = self.width as f64;
        let h = self.height as f64;
        CenterBox::new(
            (self.x as f64 + w / 2.0) / image_width,
            (self.y as f64 + h / 2.0) / image_height,
            w / image_width,
            h / image_height,
        )
    }
}

impl CenterBox<Normalized> {
    /// Converts to an integer pixel rectangle for an image of the given size.
    ///
    /// All four outputs are truncated toward zero, never rounded: a corner at
    /// 40.9 px becomes 40, one at -0.9 px becomes 0. NaN truncates to 0 and
    /// values beyond the `i64` range saturate.
    pub fn to_pixel_rect(&self, image_width: f64, image_height: f64) -> PixelRect {
        let abs_cx = self.cx * image_width;
        let abs_cy = self.cy * image_height;
        let abs_width = self.width * image_width;
        let abs_height = self.height * image_height;

        let upper_left_x = abs_cx - (abs_width / 2.0);
        let upper_left_y = abs_cy - (abs_height / 2.0);

        PixelRect::new(
            upper_left_x as i64,
            upper_left_y as i64,
            abs_width as i64,
            abs_height as i64,
        )
    }

    /// Converts to a percentage corner box (YOLO to Label Studio).
    pub fn to_percent_corner(&self) -> CornerBox<Percent> {
        CornerBox::new(
            (self.cx - self.width / 2.0) * 100.0,
            (self.cy - self.height / 2.0) * 100.0,
            self.width * 100.0,
            self.height * 100.0,
        )
    }
}

impl CornerBox<Percent> {
    /// Converts to a normalized centre box (Label Studio to YOLO).
    pub fn to_normalized_center(&self) -> CenterBox<Normalized> {
        CenterBox::new(
            (self.x + self.width / 2.0) / 100.0,
            (self.y + self.height / 2.0) / 100.0,
            self.width / 100.0,
            self.height / 100.0,
        )
    }
}

impl<TSpace> std::fmt::Debug for CenterBox<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CenterBox")
            .field("cx", &self.cx)
            .field("cy", &self.cy)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl<TSpace> std::fmt::Debug for CornerBox<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CornerBox")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

// Custom serde implementations to avoid TSpace: Serialize bounds
impl<TSpace> Serialize for CenterBox<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("CenterBox", 4)?;
        state.serialize_field("cx", &self.cx)?;
        state.serialize_field("cy", &self.cy)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.end()
    }
}

impl<TSpace> Serialize for CornerBox<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("CornerBox", 4)?;
        state.serialize_field("x", &self.x)?;
        state.serialize_field("y", &self.y)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.end()
    }
}
