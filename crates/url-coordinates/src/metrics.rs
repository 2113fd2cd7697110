//! Prometheus counters for decode, apply and transform outcomes.
//!
//! Outcomes are `ok` or an error kind label.

use metrics::counter;

/// Record the outcome of decoding one `showCoord` value.
pub fn record_decode(outcome: &'static str) {
    counter!("showcoord_decode_total", "outcome" => outcome).increment(1);
}

/// Record the outcome of applying a center to the view.
pub fn record_apply(outcome: &'static str) {
    counter!("showcoord_apply_total", "outcome" => outcome).increment(1);
}

/// Record a reprojection attempt.
pub fn record_transform(outcome: &'static str) {
    counter!("showcoord_transform_total", "outcome" => outcome).increment(1);
}
