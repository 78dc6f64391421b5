//! Coordinate space marker types.
//!
//! These are zero-sized types (ZSTs) used as type parameters to distinguish
//! between box conventions at compile time.

use std::fmt;

/// Marker type for normalized coordinates (0.0 to 1.0 of the image size).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalized {}

/// Marker type for percentage coordinates (0.0 to 100.0 of the image size),
/// as used by Label Studio.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Percent {}

impl fmt::Debug for Normalized {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Debug for Percent {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
