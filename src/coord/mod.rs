//! Bounding-box coordinate conversions.
//!
//! Three box conventions meet in a detect-then-review workflow:
//!
//! - **YOLO**: normalized (0-1) centre point plus normalized extent
//!   ([`CenterBox<Normalized>`]).
//! - **Pixel**: integer upper-left corner plus integer extent
//!   ([`PixelRect`]).
//! - **Label Studio**: percentage (0-100) upper-left corner plus percentage
//!   extent ([`CornerBox<Percent>`]).
//!
//! Space marker types keep the conventions apart at compile time. None of
//! the conversions validate ranges; out-of-range inputs are extrapolated.
//!
//! # Example
//!
//! ```
//! use labelbridge::coord::{label_tool_to_relative, relative_to_absolute};
//!
//! assert_eq!(relative_to_absolute(0.5, 0.5, 0.2, 0.2, 101.0, 101.0), (40, 40, 20, 20));
//! assert_eq!(
//!     label_tool_to_relative(10.0, 20.0, 30.0, 40.0),
//!     ("0.25".to_string(), "0.4".to_string(), "0.3".to_string(), "0.4".to_string())
//! );
//! ```

mod bbox;
mod convert;
mod space;

pub use bbox::{CenterBox, CornerBox, PixelRect};
pub use convert::{format_decimal, label_tool_to_relative, relative_to_absolute};
pub use space::{Normalized, Percent};
