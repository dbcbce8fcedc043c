//! Optional observability helpers for strategy operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth2_google.strategy` with the
//!   `operation` and `stage` (call site) fields, plus a `warn` event for each failure.
//! - Enable `metrics` to increment the `oauth2_google_operation_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use self::metrics::*;
pub use self::tracing::*;

// self
use crate::_prelude::*;

/// Strategy operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Authorization redirect parameter building.
	Authorize,
	/// Userinfo profile fetch.
	UserProfile,
	/// Application verify callback.
	Verify,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::Authorize => "authorize",
			Operation::UserProfile => "user_profile",
			Operation::Verify => "verify",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// Entry to a strategy operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl Outcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Outcome::Attempt => "attempt",
			Outcome::Success => "success",
			Outcome::Failure => "failure",
		}
	}
}
impl Display for Outcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records the outcome of `result` and logs failures.
pub(crate) fn record_result<T>(operation: Operation, result: &Result<T>) {
	match result {
		Ok(_) => record_outcome(operation, Outcome::Success),
		Err(e) => {
			record_outcome(operation, Outcome::Failure);
			log_failure(operation, e);
		},
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::TransportError;

	#[test]
	fn labels_match_metric_values() {
		assert_eq!(Operation::UserProfile.to_string(), "user_profile");
		assert_eq!(Operation::Verify.as_str(), "verify");
		assert_eq!(Outcome::Failure.to_string(), "failure");
	}

	#[test]
	fn record_result_handles_both_arms() {
		record_result(Operation::Verify, &Ok::<_, Error>(()));
		record_result(
			Operation::UserProfile,
			&Err::<(), _>(Error::from(TransportError::Other { message: "reset".into() })),
		);
	}
}
