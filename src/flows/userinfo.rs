//! User-info retrieval and profile normalization.
//!
//! [`AuthSch::fetch_user_info`] issues one `GET` to the user-info endpoint with the access
//! token in the `access_token` query parameter. Failures are logged and then returned
//! unchanged; nothing is retried.

// crates.io
use oauth2::AsyncHttpClient;
// self
use crate::{
	_prelude::*,
	auth::{Secret, TokenContext},
	error::{AuthenticationError, ConfigError, UpstreamError},
	flows::AuthSch,
	http::{self, UserInfoHttpClient},
	oauth::TransportErrorMapper,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	profile::{AuthSchProfile, NormalizedUser, UserInfo},
	provider::ProfileMapper,
};

const ACCESS_TOKEN_PARAM: &str = "access_token";

impl<C, M> AuthSch<C, M>
where
	C: ?Sized + UserInfoHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Fetches the AuthSCH profile for the access token in `ctx`.
	///
	/// Fails with [`AuthenticationError::MissingAccessToken`] before any request is made when
	/// the context has no (or an empty) access token.
	pub async fn fetch_user_info(&self, ctx: &TokenContext) -> Result<AuthSchProfile> {
		const KIND: FlowKind = FlowKind::UserInfo;

		let span = FlowSpan::new(KIND, "fetch_user_info");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span.instrument(self.request_profile(ctx)).await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(err) => {
				obs::log_flow_failure(KIND, err);
				obs::record_flow_outcome(KIND, FlowOutcome::Failure);
			},
		}

		result
	}

	/// Maps `profile` through the configured [`ProfileMapper`].
	pub fn normalize(&self, profile: &AuthSchProfile) -> NormalizedUser {
		self.profile_mapper.normalize(profile)
	}

	/// Fetches the profile and normalizes it.
	pub async fn user_info(&self, ctx: &TokenContext) -> Result<UserInfo> {
		let profile = self.fetch_user_info(ctx).await?;

		Ok(UserInfo { user: self.normalize(&profile), profile })
	}

	async fn request_profile(&self, ctx: &TokenContext) -> Result<AuthSchProfile> {
		let token = ctx.bearer().ok_or(AuthenticationError::MissingAccessToken)?;
		let url = userinfo_url(&self.descriptor.endpoints.userinfo, token);
		let request = http::get_json(&url).map_err(ConfigError::from)?;
		let handle = self.http_client.handle();
		let response = handle
			.call(request)
			.await
			.map_err(|err| self.transport_mapper.map_transport_error(err))?;
		let status = response.status();

		if !status.is_success() {
			return Err(UpstreamError::status(
				status.as_u16(),
				status.canonical_reason().unwrap_or_default(),
				String::from_utf8_lossy(response.body()),
			)
			.into());
		}

		AuthSchProfile::from_slice(response.body()).map_err(|source| {
			UpstreamError::MalformedProfile { source, status: status.as_u16() }.into()
		})
	}
}

/// User-info endpoint with `access_token` set to `token`, replacing any existing value.
pub fn userinfo_url(endpoint: &Url, token: &Secret) -> Url {
	let mut url = endpoint.clone();
	let retained: Vec<(String, String)> = endpoint
		.query_pairs()
		.into_owned()
		.filter(|(key, _)| key != ACCESS_TOKEN_PARAM)
		.collect();

	url.set_query(None);

	{
		let mut pairs = url.query_pairs_mut();

		pairs.extend_pairs(retained);
		pairs.append_pair(ACCESS_TOKEN_PARAM, token.expose());
	}

	url
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn userinfo_url_sets_access_token() {
		let endpoint = Url::parse("https://auth.sch.bme.hu/api/profile")
			.expect("User-info endpoint fixture should parse.");
		let url = userinfo_url(&endpoint, &Secret::new("T"));

		assert_eq!(url.as_str(), "https://auth.sch.bme.hu/api/profile?access_token=T");
	}

	#[test]
	fn userinfo_url_replaces_existing_token_and_keeps_other_params() {
		let endpoint = Url::parse("https://auth.sch.bme.hu/api/profile?lang=hu&access_token=old")
			.expect("User-info endpoint fixture should parse.");
		let url = userinfo_url(&endpoint, &Secret::new("a b&c"));
		let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

		assert_eq!(
			pairs,
			vec![("lang".into(), "hu".into()), ("access_token".into(), "a b&c".into())]
		);
	}
}
