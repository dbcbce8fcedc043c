// self
use crate::obs::{Operation, Outcome};

/// Bumps `oauth2_google_operation_total` for `operation` and `outcome`; no-op without the
/// `metrics` feature.
pub fn record_outcome(operation: Operation, outcome: Outcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_google_operation_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}
