//! Adapter-level error types shared across options, descriptors, and the user-info flow.

// self
use crate::_prelude::*;

/// Adapter-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical adapter error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The token context cannot authenticate the user-info request.
	#[error(transparent)]
	Authentication(#[from] AuthenticationError),
	/// AuthSCH answered, but not with a usable profile.
	#[error(transparent)]
	Upstream(#[from] UpstreamError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
}

/// Configuration and validation failures raised by the adapter.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Provider descriptor contains an invalid URL.
	#[error("Descriptor contains an invalid URL.")]
	InvalidDescriptor {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Provider descriptor failed validation.
	#[error(transparent)]
	Descriptor(#[from] crate::provider::ProviderDescriptorError),
	/// Provider identifier failed validation.
	#[error(transparent)]
	Identifier(#[from] crate::auth::IdentifierError),
	/// Requested scope string cannot be used.
	#[error("Requested scope is invalid.")]
	InvalidScope(#[from] crate::auth::ScopeValidationError),

	/// Options did not include a client identifier.
	#[error("Client identifier is missing.")]
	MissingClientId,
	/// Options did not include a client secret.
	#[error("Client secret is missing.")]
	MissingClientSecret,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Credential problems detected before contacting AuthSCH.
#[derive(Debug, ThisError)]
pub enum AuthenticationError {
	/// The token context carries no access token.
	#[error("No access token found.")]
	MissingAccessToken,
}

/// Failures reported by (or read from) the user-info endpoint.
#[derive(Debug, ThisError)]
pub enum UpstreamError {
	/// User-info endpoint returned a non-success status.
	#[error("Failed to fetch user information: {status} {status_text} - {body}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Canonical reason phrase for the status, empty when unknown.
		status_text: String,
		/// Preview of the response body.
		body: String,
	},
	/// User-info endpoint responded with a body that is not a readable profile.
	#[error("User-info endpoint returned a malformed profile.")]
	MalformedProfile {
		/// Structured parsing failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}
impl UpstreamError {
	const BODY_PREVIEW_LIMIT: usize = 256;

	/// Builds a [`UpstreamError::Status`] value, truncating the body preview.
	pub fn status(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
		Self::Status { status, status_text: status_text.into(), body: truncate_preview(body.into()) }
	}

	/// HTTP status code associated with the failure.
	pub fn http_status(&self) -> u16 {
		match self {
			Self::Status { status, .. } | Self::MalformedProfile { status, .. } => *status,
		}
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the user-info endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the user-info endpoint.")]
	Io(#[from] std::io::Error),
	/// HTTP client failed without a typed cause.
	#[error("HTTP client error occurred while calling the user-info endpoint: {message}.")]
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
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

fn truncate_preview(body: String) -> String {
	if body.chars().count() <= UpstreamError::BODY_PREVIEW_LIMIT {
		return body;
	}

	let mut buf = String::new();

	for (idx, ch) in body.chars().enumerate() {
		if idx >= UpstreamError::BODY_PREVIEW_LIMIT {
			buf.push('…');

			break;
		}
		buf.push(ch);
	}

	buf
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn status_error_renders_diagnostics() {
		let err = UpstreamError::status(401, "Unauthorized", "{\"error\":\"invalid_token\"}");

		assert_eq!(
			err.to_string(),
			"Failed to fetch user information: 401 Unauthorized - {\"error\":\"invalid_token\"}"
		);
		assert_eq!(err.http_status(), 401);
	}

	#[test]
	fn status_error_truncates_long_bodies() {
		let err = UpstreamError::status(500, "Internal Server Error", "x".repeat(1_000));
		let UpstreamError::Status { body, .. } = err else {
			panic!("Status constructor should produce the Status variant.");
		};

		assert_eq!(body.chars().count(), UpstreamError::BODY_PREVIEW_LIMIT + 1);
		assert!(body.ends_with('…'));
	}

	#[test]
	fn missing_access_token_message_is_stable() {
		let err = Error::from(AuthenticationError::MissingAccessToken);

		assert_eq!(err.to_string(), "No access token found.");
	}
}
