//! Fetches the AuthSCH profile for an access token passed as the first argument and prints the
//! normalized user.

// crates.io
use color_eyre::{Result, eyre::eyre};
// self
use oauth2_authsch::{auth::TokenContext, flows::AuthSch, options::AuthSchOptions};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let token =
		std::env::args().nth(1).ok_or_else(|| eyre!("usage: fetch_profile <access-token>"))?;
	let adapter = AuthSch::new(AuthSchOptions::new("demo-client", "demo-secret"))?;
	let info = adapter.user_info(&TokenContext::with_access_token(token)).await?;

	println!("{}", serde_json::to_string_pretty(&info.user)?);

	if let Some(entitlements) = info.profile.entitlements {
		for entitlement in entitlements {
			println!("{} ({})", entitlement.name, entitlement.status);
		}
	}

	Ok(())
}
