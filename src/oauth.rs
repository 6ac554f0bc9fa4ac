//! Bridges to the `oauth2` crate: transport error mapping and a pre-configured client for hosts
//! that drive the authorization-code flow with `oauth2`.

pub use oauth2;

// crates.io
use oauth2::{
	AuthUrl, ClientId, ClientSecret, EndpointNotSet, EndpointSet, HttpClientError, TokenUrl,
	basic::BasicClient,
};
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
	options::ResolvedOptions,
	provider::ProviderDescriptor,
};

/// `oauth2` client with the authorization and token endpoints set.
pub type ConfiguredBasicClient =
	BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Maps HTTP transport failures into adapter [`Error`] values.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts an [`HttpClientError`] emitted by the transport into an adapter error.
	fn map_transport_error(&self, error: HttpClientError<E>) -> Error;
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
#[cfg(feature = "reqwest")]
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(&self, err: HttpClientError<ReqwestError>) -> Error {
		match err {
			HttpClientError::Reqwest(inner) => map_reqwest_error(*inner),
			other => map_http_client_error(other),
		}
	}
}

/// Maps the transport-agnostic [`HttpClientError`] variants; typed transport errors are kept
/// as the `source` of [`TransportError::Network`].
pub fn map_http_client_error<E>(err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => TransportError::network(*inner).into(),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) => TransportError::Other { message }.into(),
		_ => TransportError::Other { message: "unrecognized HTTP client failure".into() }.into(),
	}
}

/// Builds an `oauth2` client from the descriptor endpoints and resolved credentials.
pub fn basic_client(
	descriptor: &ProviderDescriptor,
	options: &ResolvedOptions,
) -> Result<ConfiguredBasicClient> {
	let auth_url = AuthUrl::new(descriptor.endpoints.authorization.to_string())
		.map_err(|source| ConfigError::InvalidDescriptor { source })?;
	let token_url = TokenUrl::new(descriptor.endpoints.token.to_string())
		.map_err(|source| ConfigError::InvalidDescriptor { source })?;
	let client = BasicClient::new(ClientId::new(options.client_id.clone()))
		.set_client_secret(ClientSecret::new(options.client_secret.expose().to_owned()))
		.set_auth_uri(auth_url)
		.set_token_uri(token_url);

	Ok(client)
}

#[cfg(feature = "reqwest")]
fn map_reqwest_error(err: ReqwestError) -> Error {
	if err.is_builder() {
		return ConfigError::from(err).into();
	}

	TransportError::from(err).into()
}
