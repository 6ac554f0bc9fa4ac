#![cfg(feature = "reqwest")]

// std
use std::collections::HashMap;
// self
use oauth2_authsch::{
	_preludet::*,
	auth::DEFAULT_SCOPE,
	flows::AuthSch,
	options::AuthSchOptions,
	provider::{GrantType, ResponseType, SecurityCheck},
};

fn adapter(scope: Option<&str>) -> ReqwestTestAdapter {
	AuthSch::new(test_options(scope)).expect("Adapter should build from valid options.")
}

fn params_of(url: &Url) -> HashMap<String, String> {
	url.query_pairs().into_owned().collect()
}

#[test]
fn default_scope_is_requested_without_override() {
	let request = adapter(None).authorization_request();

	assert_eq!(request.endpoint.as_str(), "https://auth.sch.bme.hu/site/login");
	assert_eq!(request.scope.as_str(), DEFAULT_SCOPE);
	assert_eq!(request.response_type, ResponseType::Code);
	assert_eq!(request.client_id, TEST_CLIENT_ID);

	let pairs = params_of(&request.url());

	assert_eq!(pairs.len(), 3);
	assert_eq!(pairs.get("scope").map(String::as_str), Some("basic mail sn givenName displayName"));
	assert_eq!(pairs.get("response_type").map(String::as_str), Some("code"));
	assert_eq!(pairs.get("client_id").map(String::as_str), Some(TEST_CLIENT_ID));
}

#[test]
fn scope_override_is_requested_verbatim() {
	let scope = "basic mail eduPersonEntitlement bmeunitscope";
	let request = adapter(Some(scope)).authorization_request();
	let params = request.params();

	assert_eq!(params[0], ("scope", scope));
	assert_eq!(params_of(&request.url()).get("scope").map(String::as_str), Some(scope));
}

#[test]
fn authorize_url_carries_host_state() {
	let redirect_uri = Url::parse("https://app.example.com/api/auth/callback/authsch")
		.expect("Redirect URI should parse successfully.");
	let url = adapter(None).authorization_request().authorize_url("state-123", &redirect_uri);
	let pairs = params_of(&url);

	assert_eq!(pairs.get("state").map(String::as_str), Some("state-123"));
	assert_eq!(pairs.get("redirect_uri").map(String::as_str), Some(redirect_uri.as_str()));
	assert_eq!(pairs.get("client_id").map(String::as_str), Some(TEST_CLIENT_ID));
}

#[test]
fn token_request_preserves_refresh_token_grant() {
	let adapter = adapter(None);
	let request = adapter.token_request();

	assert_eq!(request.endpoint.as_str(), "https://auth.sch.bme.hu/oauth2/token");
	assert_eq!(request.grant_type, GrantType::RefreshToken);
	assert_eq!(request.params().get("grant_type").map(String::as_str), Some("refresh_token"));
	assert!(adapter.descriptor.requires(SecurityCheck::State));

	let client = adapter.oauth2_client().expect("oauth2 client should build.");

	assert_eq!(client.client_id().as_str(), TEST_CLIENT_ID);
	assert_eq!(client.token_uri().as_str(), "https://auth.sch.bme.hu/oauth2/token");
}

#[test]
fn invalid_options_fail_construction() {
	let err = AuthSch::new(AuthSchOptions::new("", TEST_CLIENT_SECRET))
		.expect_err("Missing client identifiers must be rejected.");

	assert!(matches!(err, Error::Config(_)));
}
