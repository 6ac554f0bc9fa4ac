//! Authorization request construction.
//!
//! AuthSCH receives exactly three parameters from the adapter: `scope`, `response_type`, and
//! `client_id`. The host runtime owns `state` (CSRF) and `redirect_uri`;
//! [`AuthorizationRequest::authorize_url`] appends them when the host wants the full URL.

// self
use crate::{
	_prelude::*,
	auth::RequestedScope,
	flows::AuthSch,
	http::UserInfoHttpClient,
	oauth::TransportErrorMapper,
	obs::{FlowKind, FlowSpan},
	provider::ResponseType,
};

/// Authorization endpoint plus the parameters the adapter contributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationRequest {
	/// Authorization endpoint.
	pub endpoint: Url,
	/// Scope string, exactly as configured.
	pub scope: RequestedScope,
	/// Always [`ResponseType::Code`].
	pub response_type: ResponseType,
	/// OAuth client identifier.
	pub client_id: String,
}
impl AuthorizationRequest {
	/// Parameters in the order they are appended to the endpoint.
	pub fn params(&self) -> [(&'static str, &str); 3] {
		[
			("scope", self.scope.as_str()),
			("response_type", self.response_type.as_str()),
			("client_id", &self.client_id),
		]
	}

	/// Endpoint with the adapter's parameters appended.
	pub fn url(&self) -> Url {
		let mut url = self.endpoint.clone();

		url.query_pairs_mut().extend_pairs(self.params());

		url
	}

	/// Endpoint with the adapter's parameters plus the host's `state` and `redirect_uri`.
	pub fn authorize_url(&self, state: &str, redirect_uri: &Url) -> Url {
		let mut url = self.url();

		url.query_pairs_mut()
			.append_pair("redirect_uri", redirect_uri.as_str())
			.append_pair("state", state);

		url
	}
}

impl<C, M> AuthSch<C, M>
where
	C: ?Sized + UserInfoHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Builds the authorization request from the descriptor and resolved options.
	pub fn authorization_request(&self) -> AuthorizationRequest {
		let _span = FlowSpan::new(FlowKind::Authorization, "authorization_request").entered();

		AuthorizationRequest {
			endpoint: self.descriptor.endpoints.authorization.clone(),
			scope: self.options.scope.clone(),
			response_type: ResponseType::Code,
			client_id: self.options.client_id.clone(),
		}
	}
}
