//! Class-label registry.
//!
//! A detector emits numeric class identifiers; the labeling tool works with
//! human-readable class names. The registry bridges the two with a flat
//! `identifier -> name` mapping loaded from a small text resource:
//!
//! ```text
//! '0': 'person',
//! '1': 'bicycle',
//! ```
//!
//! Lookups never fail: an identifier or name that is not in the mapping
//! resolves to [`UNKNOWN_CLASS`].
//!
//! # Example
//!
//! ```
//! use labelbridge::labels::{class_name, from_labels_str, UNKNOWN_CLASS};
//!
//! let labels = from_labels_str("'0': 'person',\n'1': 'bicycle',\n").unwrap();
//! assert_eq!(class_name(&labels, 1), "bicycle");
//! assert_eq!(class_name(&labels, 7), UNKNOWN_CLASS);
//! ```

pub mod io_labels_txt;
mod lookup;
mod map;

pub use io_labels_txt::{
    create_label_map, from_labels_str, read_label_map, to_labels_string, write_label_map,
};
pub use lookup::{class_code, class_code_exact, class_name, ClassKey, UNKNOWN_CLASS};
pub use map::LabelMap;
