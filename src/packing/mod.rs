//! Packing engine and metrics.

mod metrics;
mod shelf;

pub use metrics::{area_lower_bound, compute_metrics, total_area, Metrics};
pub use shelf::{pack_pieces, pack_specs, safety_ceiling};
