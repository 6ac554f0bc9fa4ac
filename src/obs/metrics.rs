//! `metrics` counter for adapter operations.

// self
use crate::obs::{FlowKind, FlowOutcome};

/// Counter incremented once per attempt, success, and failure of an adapter operation.
pub const FLOW_COUNTER: &str = "authsch_flow_total";

/// Bumps [`FLOW_COUNTER`] with `flow` and `outcome` labels.
///
/// Without the `metrics` feature, or without an installed recorder, nothing is recorded.
pub fn record_flow_outcome(kind: FlowKind, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(FLOW_COUNTER, "flow" => kind.as_str(), "outcome" => outcome.as_str())
		.increment(1);
	#[cfg(not(feature = "metrics"))]
	let _ = (kind, outcome);
}
