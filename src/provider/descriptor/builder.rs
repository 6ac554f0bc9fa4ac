// self
use crate::{
	_prelude::*,
	auth::ProviderId,
	provider::{
		GrantType, ProviderDescriptor, ProviderEndpoints, ProviderKind, ProviderStyle,
		SecurityCheck,
	},
};

/// Errors raised while constructing or validating descriptors.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ProviderDescriptorError {
	/// Authorization endpoint is required for the authorization-code flow.
	#[error("Missing authorization endpoint.")]
	MissingAuthorizationEndpoint,
	/// Token endpoint is mandatory.
	#[error("Missing token endpoint.")]
	MissingTokenEndpoint,
	/// User-info endpoint is mandatory.
	#[error("Missing user-info endpoint.")]
	MissingUserinfoEndpoint,
	/// Display name cannot be blank.
	#[error("Descriptor name cannot be empty.")]
	EmptyName,
	/// Endpoints must use HTTPS.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
}

/// Builder for [`ProviderDescriptor`] values.
#[derive(Debug)]
pub struct ProviderDescriptorBuilder {
	/// Identifier for the descriptor being constructed.
	pub id: ProviderId,
	/// Human-readable name; defaults to the identifier.
	pub name: Option<String>,
	/// Protocol family.
	pub kind: ProviderKind,
	/// Protocol version tag.
	pub version: String,
	/// Authorization endpoint.
	pub authorization_endpoint: Option<Url>,
	/// Token endpoint.
	pub token_endpoint: Option<Url>,
	/// User-info endpoint.
	pub userinfo_endpoint: Option<Url>,
	/// Grant type sent to the token endpoint.
	pub token_grant: GrantType,
	/// Checks the host runtime must perform.
	pub checks: Vec<SecurityCheck>,
	/// Optional presentation hints.
	pub style: Option<ProviderStyle>,
}
impl ProviderDescriptorBuilder {
	/// Creates a new builder seeded with the provided identifier.
	pub fn new(id: ProviderId) -> Self {
		Self {
			id,
			name: None,
			kind: ProviderKind::default(),
			version: "2.0".into(),
			authorization_endpoint: None,
			token_endpoint: None,
			userinfo_endpoint: None,
			token_grant: GrantType::default(),
			checks: Vec::new(),
			style: None,
		}
	}

	/// Sets the human-readable name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());

		self
	}

	/// Sets the protocol version tag.
	pub fn version(mut self, version: impl Into<String>) -> Self {
		self.version = version.into();

		self
	}

	/// Sets the authorization endpoint.
	pub fn authorization_endpoint(mut self, url: Url) -> Self {
		self.authorization_endpoint = Some(url);

		self
	}

	/// Sets the token endpoint.
	pub fn token_endpoint(mut self, url: Url) -> Self {
		self.token_endpoint = Some(url);

		self
	}

	/// Sets the user-info endpoint.
	pub fn userinfo_endpoint(mut self, url: Url) -> Self {
		self.userinfo_endpoint = Some(url);

		self
	}

	/// Overrides the grant type sent to the token endpoint.
	pub fn token_grant(mut self, grant: GrantType) -> Self {
		self.token_grant = grant;

		self
	}

	/// Requires a security check; duplicates are ignored.
	pub fn check(mut self, check: SecurityCheck) -> Self {
		if !self.checks.contains(&check) {
			self.checks.push(check);
		}

		self
	}

	/// Sets the presentation hints.
	pub fn style(mut self, style: ProviderStyle) -> Self {
		self.style = Some(style);

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<ProviderDescriptor, ProviderDescriptorError> {
		let authorization = self
			.authorization_endpoint
			.ok_or(ProviderDescriptorError::MissingAuthorizationEndpoint)?;
		let token = self.token_endpoint.ok_or(ProviderDescriptorError::MissingTokenEndpoint)?;
		let userinfo =
			self.userinfo_endpoint.ok_or(ProviderDescriptorError::MissingUserinfoEndpoint)?;
		let name = self.name.unwrap_or_else(|| self.id.to_string());
		let descriptor = ProviderDescriptor {
			id: self.id,
			name,
			kind: self.kind,
			version: self.version,
			endpoints: ProviderEndpoints { authorization, token, userinfo },
			token_grant: self.token_grant,
			checks: self.checks,
			style: self.style,
		};

		descriptor.validate()?;

		Ok(descriptor)
	}
}

impl ProviderDescriptor {
	/// Validates invariants for the descriptor.
	pub(crate) fn validate(&self) -> Result<(), ProviderDescriptorError> {
		if self.name.trim().is_empty() {
			return Err(ProviderDescriptorError::EmptyName);
		}

		validate_endpoint("authorization", &self.endpoints.authorization)?;
		validate_endpoint("token", &self.endpoints.token)?;
		validate_endpoint("userinfo", &self.endpoints.userinfo)?;

		Ok(())
	}
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), ProviderDescriptorError> {
	if url.scheme() != "https" {
		Err(ProviderDescriptorError::InsecureEndpoint { endpoint: name, url: url.to_string() })
	} else {
		Ok(())
	}
}
