//! Tuple-level conversion entry points.
//!
//! Thin wrappers over the typed boxes for callers that hold raw numbers,
//! such as a pipeline reading YOLO label rows or Label Studio CSV exports.

use super::{CenterBox, CornerBox, Normalized, Percent};

/// Converts a YOLO box to an integer pixel rectangle.
///
/// Returns `(upper_left_x, upper_left_y, width, height)`, each truncated
/// toward zero. See [`CenterBox::to_pixel_rect`].
pub fn relative_to_absolute(
    x_center: f64,
    y_center: f64,
    width: f64,
    height: f64,
    image_width: impl Into<f64>,
    image_height: impl Into<f64>,
) -> (i64, i64, i64, i64) {
    CenterBox::<Normalized>::new(x_center, y_center, width, height)
        .to_pixel_rect(image_width.into(), image_height.into())
        .to_xywh()
}

/// Converts a Label Studio percentage box to a YOLO box rendered as text.
///
/// Returns `(x_center, y_center, width, height)` formatted with
/// [`format_decimal`], ready to be written into a label row.
pub fn label_tool_to_relative(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> (String, String, String, String) {
    let yolo = CornerBox::<Percent>::new(x, y, width, height).to_normalized_center();
    (
        format_decimal(yolo.cx),
        format_decimal(yolo.cy),
        format_decimal(yolo.width),
        format_decimal(yolo.height),
    )
}

/// Formats a float as its shortest round-trip decimal text.
///
/// Integral values keep a fractional part (`1.0`, not `1`). Magnitudes below
/// `1e-4` or from `1e16` upward use exponent notation with a signed,
/// two-digit exponent (`1e-05`, `1.5e+16`). Non-finite values render as
/// `nan`, `inf` and `-inf`.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_form(value);
    }

    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

fn exponent_form(value: f64) -> String {
    // `{:e}` already yields the shortest mantissa, e.g. `1.5e-7`.
    let text = format!("{:e}", value);
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}
