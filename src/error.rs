//! Strategy-level error types shared across construction, transport, and profile parsing.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Boxed error used for transport and callback sources.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical strategy error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Userinfo endpoint failure or unusable payload.
	#[error(transparent)]
	Profile(#[from] ProfileError),

	/// Application verify callback rejected the sign-in.
	#[error("Verify callback failed.")]
	Verify {
		/// Error returned by the callback.
		#[source]
		source: BoxError,
	},
}
impl Error {
	/// Wraps a verify callback failure.
	pub fn verify(source: impl Into<BoxError>) -> Self {
		Self::Verify { source: source.into() }
	}
}

/// Configuration failures raised while wiring the strategy into the engine.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// An endpoint URL cannot be parsed.
	#[error("The {endpoint} endpoint is not a valid URL.")]
	InvalidEndpoint {
		/// Which endpoint failed to parse.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// An endpoint URL does not use HTTPS.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Redirect URI cannot be parsed.
	#[error("Redirect URI is invalid.")]
	InvalidRedirect {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the userinfo endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the userinfo endpoint.")]
	Io(#[from] std::io::Error),
	/// Transport failed without a structured error.
	#[error("Transport failed: {message}.")]
	Other {
		/// Transport-supplied description.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}

/// Failures reading the userinfo response.
#[derive(Debug, ThisError)]
pub enum ProfileError {
	/// Userinfo endpoint answered with a non-success status.
	#[error("Userinfo endpoint returned HTTP {status}: {message}.")]
	UserInfoEndpoint {
		/// HTTP status code.
		status: u16,
		/// Preview of the response body.
		message: String,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// Userinfo body is not JSON or does not match the profile schema.
	#[error("Userinfo endpoint returned an unusable profile at `{path}`.")]
	Parse {
		/// JSON path of the failing member (`.` for the document root).
		path: String,
		/// Structured parsing failure.
		#[source]
		source: serde_json::Error,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ProfileError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::Parse { path, source: e.into_inner() }
	}
}
