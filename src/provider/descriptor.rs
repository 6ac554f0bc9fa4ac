//! Provider descriptor data structures shared by every adapter operation.
//!
//! The module exposes validated metadata, the builder used to assemble it, and the
//! grant, check, and styling vocabulary the host runtime reads from it.

/// Builder API for assembling provider descriptors.
pub mod builder;
/// Grant and response-type identifiers wired into provider descriptors.
pub mod grant;
/// Security checks and presentation hints.
pub mod style;

pub use builder::*;
pub use grant::*;
pub use style::*;

// self
use crate::{_prelude::*, auth::ProviderId, error::ConfigError};

/// AuthSCH authorization endpoint.
pub const AUTHORIZATION_ENDPOINT: &str = "https://auth.sch.bme.hu/site/login";
/// AuthSCH token endpoint.
pub const TOKEN_ENDPOINT: &str = "https://auth.sch.bme.hu/oauth2/token";
/// AuthSCH user-info endpoint.
pub const USERINFO_ENDPOINT: &str = "https://auth.sch.bme.hu/api/profile";
/// Logo shown by host sign-in pages.
pub const LOGO_URL: &str = "https://git.sch.bme.hu/uploads/-/system/appearance/header_logo/1/sch.png";

/// Protocol family a descriptor speaks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
	#[default]
	/// Plain OAuth 2.0 (no OpenID Connect discovery or ID tokens).
	Oauth,
}
impl ProviderKind {
	/// Returns the label host runtimes use for the provider type.
	pub fn as_str(self) -> &'static str {
		match self {
			ProviderKind::Oauth => "oauth",
		}
	}
}

/// Endpoint set declared by a provider descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoints {
	/// Authorization endpoint the user is redirected to.
	pub authorization: Url,
	/// Token endpoint used by the host runtime.
	pub token: Url,
	/// Endpoint returning the user's profile for an access token.
	pub userinfo: Url,
}

/// Immutable provider descriptor consumed by the host runtime.
///
/// Deserialized descriptors pass the same validation as [`ProviderDescriptorBuilder::build`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedDescriptor")]
pub struct ProviderDescriptor {
	/// Descriptor identifier.
	pub id: ProviderId,
	/// Human-readable provider name.
	pub name: String,
	/// Protocol family.
	pub kind: ProviderKind,
	/// Protocol version tag.
	pub version: String,
	/// Endpoint definitions exposed by the provider.
	pub endpoints: ProviderEndpoints,
	/// Grant type sent to the token endpoint.
	pub token_grant: GrantType,
	/// Checks the host runtime must perform during the authorization-code flow.
	pub checks: Vec<SecurityCheck>,
	/// Optional presentation hints for sign-in pages.
	pub style: Option<ProviderStyle>,
}
impl ProviderDescriptor {
	/// Creates a new builder for the provided identifier.
	pub fn builder(id: ProviderId) -> ProviderDescriptorBuilder {
		ProviderDescriptorBuilder::new(id)
	}

	/// Descriptor for the production AuthSCH service.
	///
	/// The token grant is `refresh_token`, as AuthSCH integrations have historically been
	/// configured; hosts that exchange authorization codes should be aware of it.
	pub fn authsch() -> Result<Self> {
		let parse =
			|raw: &str| Url::parse(raw).map_err(|source| ConfigError::InvalidDescriptor { source });
		let descriptor = Self::builder(ProviderId::new("authsch").map_err(ConfigError::from)?)
			.name("AuthSch")
			.version("2.0")
			.authorization_endpoint(parse(AUTHORIZATION_ENDPOINT)?)
			.token_endpoint(parse(TOKEN_ENDPOINT)?)
			.userinfo_endpoint(parse(USERINFO_ENDPOINT)?)
			.token_grant(GrantType::RefreshToken)
			.check(SecurityCheck::State)
			.style(ProviderStyle {
				logo: parse(LOGO_URL)?,
				bg: "#173c65".into(),
				text: "#fff".into(),
			})
			.build()
			.map_err(ConfigError::from)?;

		Ok(descriptor)
	}

	/// Returns true when the host runtime must perform `check`.
	pub fn requires(&self, check: SecurityCheck) -> bool {
		self.checks.contains(&check)
	}
}

#[derive(Deserialize)]
struct UncheckedDescriptor {
	id: ProviderId,
	name: String,
	#[serde(default)]
	kind: ProviderKind,
	version: String,
	endpoints: ProviderEndpoints,
	#[serde(default)]
	token_grant: GrantType,
	#[serde(default)]
	checks: Vec<SecurityCheck>,
	#[serde(default)]
	style: Option<ProviderStyle>,
}
impl TryFrom<UncheckedDescriptor> for ProviderDescriptor {
	type Error = ProviderDescriptorError;

	fn try_from(raw: UncheckedDescriptor) -> Result<Self, Self::Error> {
		let descriptor = Self {
			id: raw.id,
			name: raw.name,
			kind: raw.kind,
			version: raw.version,
			endpoints: raw.endpoints,
			token_grant: raw.token_grant,
			checks: raw.checks,
			style: raw.style,
		};

		descriptor.validate()?;

		Ok(descriptor)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn authsch_descriptor_matches_service_metadata() {
		let descriptor =
			ProviderDescriptor::authsch().expect("AuthSCH descriptor should build successfully.");

		assert_eq!(descriptor.id.as_ref(), "authsch");
		assert_eq!(descriptor.name, "AuthSch");
		assert_eq!(descriptor.kind.as_str(), "oauth");
		assert_eq!(descriptor.version, "2.0");
		assert_eq!(descriptor.endpoints.authorization.as_str(), AUTHORIZATION_ENDPOINT);
		assert_eq!(descriptor.endpoints.token.as_str(), TOKEN_ENDPOINT);
		assert_eq!(descriptor.endpoints.userinfo.as_str(), USERINFO_ENDPOINT);
		assert_eq!(descriptor.token_grant, GrantType::RefreshToken);
		assert!(descriptor.requires(SecurityCheck::State));

		let style = descriptor.style.expect("AuthSCH descriptor should carry styling.");

		assert_eq!(style.logo.as_str(), LOGO_URL);
		assert_eq!(style.bg, "#173c65");
		assert_eq!(style.text, "#fff");
	}

	#[test]
	fn deserialized_descriptors_are_validated() {
		let descriptor =
			ProviderDescriptor::authsch().expect("AuthSCH descriptor should build successfully.");
		let mut value = serde_json::to_value(&descriptor).expect("Descriptor should serialize.");

		value["endpoints"]["token"] = "http://auth.sch.bme.hu/oauth2/token".into();

		let err = serde_json::from_value::<ProviderDescriptor>(value.clone())
			.expect_err("Plain HTTP endpoints must be rejected on load.");

		assert!(err.to_string().contains("token"));

		value["endpoints"]["token"] = TOKEN_ENDPOINT.into();
		value["name"] = " ".into();

		assert!(serde_json::from_value::<ProviderDescriptor>(value).is_err());
	}
}
