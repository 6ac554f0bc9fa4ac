//! Token request construction and the `oauth2` client handed to host runtimes.

// self
use crate::{
	_prelude::*,
	flows::AuthSch,
	http::UserInfoHttpClient,
	oauth::{self, ConfiguredBasicClient, TransportErrorMapper},
	obs::{FlowKind, FlowSpan},
	provider::GrantType,
};

/// Token endpoint plus the parameters the adapter contributes.
///
/// AuthSCH integrations declare `grant_type=refresh_token` for the token endpoint, including
/// the first exchange after the authorization redirect. The value is kept as declared; hosts
/// that exchange an authorization code themselves send `authorization_code` regardless.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenRequest {
	/// Token endpoint.
	pub endpoint: Url,
	/// Grant type declared by the descriptor.
	pub grant_type: GrantType,
}
impl TokenRequest {
	/// Form parameters contributed by the adapter.
	pub fn params(&self) -> BTreeMap<String, String> {
		BTreeMap::from_iter([("grant_type".to_owned(), self.grant_type.as_str().to_owned())])
	}
}

impl<C, M> AuthSch<C, M>
where
	C: ?Sized + UserInfoHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Builds the token request from the descriptor.
	pub fn token_request(&self) -> TokenRequest {
		let _span = FlowSpan::new(FlowKind::TokenExchange, "token_request").entered();

		TokenRequest {
			endpoint: self.descriptor.endpoints.token.clone(),
			grant_type: self.descriptor.token_grant,
		}
	}

	/// `oauth2` client configured with AuthSCH's endpoints and the adapter's credentials.
	pub fn oauth2_client(&self) -> Result<ConfiguredBasicClient> {
		oauth::basic_client(&self.descriptor, &self.options)
	}
}
