//! Token context supplied by the host runtime once the code exchange has completed.

// std
use std::time::Duration;
// crates.io
use oauth2::TokenResponse;
// self
use crate::{_prelude::*, auth::Secret};

/// Tokens available to the adapter when the host runtime asks for the user's profile.
///
/// Only [`access_token`](Self::access_token) is consulted by the user-info flow; the other
/// fields are carried so hosts can hand over a complete token response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenContext {
	/// Bearer token used to authenticate the user-info request.
	pub access_token: Option<Secret>,
	/// Refresh token issued alongside the access token, if any.
	pub refresh_token: Option<Secret>,
	/// Lifetime of the access token reported by the token endpoint.
	pub expires_in: Option<Duration>,
}
impl TokenContext {
	/// Creates a context carrying only an access token.
	pub fn with_access_token(token: impl Into<Secret>) -> Self {
		Self { access_token: Some(token.into()), ..Default::default() }
	}

	/// Builds a context from any `oauth2` token response.
	pub fn from_token_response<R>(response: &R) -> Self
	where
		R: TokenResponse,
	{
		Self {
			access_token: Some(Secret::new(response.access_token().secret().as_str())),
			refresh_token: response
				.refresh_token()
				.map(|token| Secret::new(token.secret().as_str())),
			expires_in: response.expires_in(),
		}
	}

	/// Returns the access token when one is present and non-empty.
	pub fn bearer(&self) -> Option<&Secret> {
		self.access_token.as_ref().filter(|token| !token.is_empty())
	}
}
