// self
use crate::{_prelude::*, obs::Operation};

/// Future returned by [`OperationSpan::instrument`] with tracing on.
#[cfg(feature = "tracing")]
pub type InstrumentedOperation<F> = tracing::instrument::Instrumented<F>;
/// Future returned by [`OperationSpan::instrument`] with tracing off: the input itself.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedOperation<F> = F;

/// `oauth2_google.strategy` span for one strategy call; empty without the `tracing` feature.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Opens the span for `operation` at call site `stage`.
	pub fn new(operation: Operation, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"oauth2_google.strategy",
				operation = operation.as_str(),
				stage
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, stage);

			Self {}
		}
	}

	/// Enters the span until the guard drops, for `authorize_url`.
	pub fn entered(self) -> OperationSpanGuard {
		#[cfg(feature = "tracing")]
		{
			OperationSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			OperationSpanGuard {}
		}
	}

	/// Attaches the span to `fut`, re-entering it on every poll.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedOperation<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Guard returned by [`OperationSpan::entered`].
pub struct OperationSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for OperationSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("OperationSpanGuard(..)")
	}
}

/// Emits a `warn` event for a failed operation (when enabled).
pub(crate) fn log_failure(operation: Operation, error: &Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(operation = operation.as_str(), error = %error, "Strategy operation failed.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (operation, error);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::ProfileError;

	#[test]
	fn authorize_span_guard_spans_sync_section() {
		let guard = OperationSpan::new(Operation::Authorize, "authorize_url").entered();

		assert!(format!("{guard:?}").starts_with("OperationSpanGuard"));
	}

	#[test]
	fn failure_log_accepts_profile_errors() {
		let err = Error::from(ProfileError::UserInfoEndpoint {
			status: 401,
			message: "invalid_token".into(),
			retry_after: None,
		});

		log_failure(Operation::UserProfile, &err);
	}

	#[tokio::test]
	async fn instrumented_fetch_yields_inner_output() {
		let span = OperationSpan::new(Operation::UserProfile, "userinfo_fetch");
		let id = span.instrument(async { String::from("110169484474386276334") }).await;

		assert_eq!(id, "110169484474386276334");
	}
}
