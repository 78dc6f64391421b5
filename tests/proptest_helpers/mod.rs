#![allow(dead_code)]

use labelbridge::coord::{CenterBox, CornerBox, Normalized, Percent};
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Slack for float noise on top of the analytic truncation bounds.
pub const EPS_FLOAT: f64 = 1e-9;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(256);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Image sizes from a thumbnail up to a large aerial tile.
pub fn arb_image_dims() -> BoxedStrategy<(u32, u32)> {
    (1u32..=8192, 1u32..=8192).boxed()
}

/// A YOLO box whose centre and extent stay inside the unit square.
pub fn arb_center_box() -> BoxedStrategy<CenterBox<Normalized>> {
    (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0)
        .prop_map(|(cx, cy, w, h)| CenterBox::new(cx, cy, w, h))
        .boxed()
}

/// A Label Studio box with corner and extent in percent.
pub fn arb_percent_box() -> BoxedStrategy<CornerBox<Percent>> {
    (0.0f64..=100.0, 0.0f64..=100.0, 0.0f64..=100.0, 0.0f64..=100.0)
        .prop_map(|(x, y, w, h)| CornerBox::new(x, y, w, h))
        .boxed()
}

pub fn assert_close(
    label: &str,
    actual: f64,
    expected: f64,
    tolerance: f64,
) -> Result<(), String> {
    let diff = (actual - expected).abs();
    if diff <= tolerance {
        Ok(())
    } else {
        Err(format!(
            "{}: expected {} within {}, got {} (off by {})",
            label, expected, tolerance, actual, diff
        ))
    }
}
