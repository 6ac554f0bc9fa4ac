//! Integrator-facing configuration.
//!
//! [`AuthSchOptions`] is what applications load from their own config (it derives
//! [`Deserialize`]); [`AuthSchOptions::resolve`] applies defaults and validation without
//! touching the caller's value.

// self
use crate::{
	_prelude::*,
	auth::{RequestedScope, Secret},
	error::ConfigError,
};

/// Options supplied by the integrating application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSchOptions {
	/// OAuth client identifier issued by AuthSCH.
	pub client_id: String,
	/// OAuth client secret issued by AuthSCH.
	pub client_secret: Secret,
	/// Scope override; see <https://git.sch.bme.hu/kszk/authsch/-/wikis/api>.
	///
	/// Defaults to `basic mail sn givenName displayName` when absent or empty.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scope: Option<String>,
}
impl AuthSchOptions {
	/// Creates options for the provided client credentials and the default scope.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<Secret>) -> Self {
		Self { client_id: client_id.into(), client_secret: client_secret.into(), scope: None }
	}

	/// Overrides the requested scope string.
	pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Returns a validated copy with defaults applied.
	pub fn resolve(&self) -> Result<ResolvedOptions> {
		if self.client_id.trim().is_empty() {
			return Err(ConfigError::MissingClientId.into());
		}
		if self.client_secret.is_empty() {
			return Err(ConfigError::MissingClientSecret.into());
		}

		let scope = match self.scope.as_deref() {
			None | Some("") => RequestedScope::authsch_default(),
			Some(raw) => RequestedScope::new(raw).map_err(ConfigError::from)?,
		};

		Ok(ResolvedOptions {
			client_id: self.client_id.clone(),
			client_secret: self.client_secret.clone(),
			scope,
		})
	}
}

/// Options after defaults have been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedOptions {
	/// OAuth client identifier.
	pub client_id: String,
	/// OAuth client secret.
	pub client_secret: Secret,
	/// Scope string sent to the authorization endpoint.
	pub scope: RequestedScope,
}
