//! Walks through building the AuthSCH authorization redirect and the token-endpoint parameters a
//! host runtime needs before the callback arrives.

// std
use std::collections::HashMap;
// crates.io
use color_eyre::Result;
use url::Url;
// self
use oauth2_authsch::{flows::AuthSch, options::AuthSchOptions, provider::SecurityCheck};

fn main() -> Result<()> {
	color_eyre::install()?;

	let options: AuthSchOptions = serde_json::from_str(
		r#"{ "client_id": "demo-client", "client_secret": "demo-secret", "scope": "basic mail displayName linkedAccounts" }"#,
	)?;
	let adapter = AuthSch::new(options)?;
	let request = adapter.authorization_request();
	// The host runtime owns CSRF state; a fixed value keeps the demo deterministic.
	let state = "demo-state";
	let redirect_uri = Url::parse("https://app.example.com/api/auth/callback/authsch")?;

	println!("Send your user to {}.", request.authorize_url(state, &redirect_uri));
	let token_request = adapter.token_request();

	println!("Token endpoint: {} {:?}.", token_request.endpoint, token_request.params());

	let mut sessions: HashMap<String, Url> = HashMap::new();

	sessions.insert(state.to_owned(), redirect_uri);

	// Simulate the redirect handler checking the returned `state`.
	if adapter.descriptor.requires(SecurityCheck::State) && sessions.remove(state).is_some() {
		println!("State verified; exchange the code with `adapter.oauth2_client()`.");
	} else {
		eprintln!("State `{state}` was not recognized.");
	}

	Ok(())
}
