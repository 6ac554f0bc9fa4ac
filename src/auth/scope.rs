//! Scope strings sent to the AuthSCH authorization endpoint.

// std
use std::str::SplitWhitespace;
// self
use crate::_prelude::*;

/// Scope requested when the integrator does not override it.
pub const DEFAULT_SCOPE: &str = "basic mail sn givenName displayName";

/// Errors emitted when validating scopes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ScopeValidationError {
	/// Scope strings must contain at least one scope.
	#[error("Scope cannot be empty.")]
	Empty,
	/// Individual scope entries cannot contain whitespace.
	#[error("Scope contains whitespace: {scope}.")]
	ContainsWhitespace {
		/// The offending scope entry.
		scope: String,
	},
	/// Control characters (other than the delimiting whitespace) are rejected.
	#[error("Scope contains a control character: {scope:?}.")]
	ContainsControl {
		/// The offending scope string.
		scope: String,
	},
}

/// Scopes understood by AuthSCH; each one unlocks the profile field of the same name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthSchScope {
	/// `internal_id`.
	Basic,
	/// `displayName`.
	DisplayName,
	/// `sn`.
	Surname,
	/// `givenName`.
	GivenName,
	/// `mail`.
	Mail,
	/// `niifPersonOrgID` (Neptun code).
	NeptunCode,
	/// `linkedAccounts`.
	LinkedAccounts,
	/// `eduPersonEntitlement`.
	Entitlements,
	/// `roomNumber`.
	RoomNumber,
	/// `mobile`.
	Mobile,
	/// `niifEduPersonAttendedCourse`.
	AttendedCourses,
	/// `entrants`.
	Entrants,
	/// `admembership`.
	AdMembership,
	/// `bmeunitscope`.
	UnitScope,
	/// `permanentaddress`.
	PermanentAddress,
}
impl AuthSchScope {
	/// Returns the wire identifier for the scope.
	pub const fn as_str(self) -> &'static str {
		match self {
			AuthSchScope::Basic => "basic",
			AuthSchScope::DisplayName => "displayName",
			AuthSchScope::Surname => "sn",
			AuthSchScope::GivenName => "givenName",
			AuthSchScope::Mail => "mail",
			AuthSchScope::NeptunCode => "niifPersonOrgID",
			AuthSchScope::LinkedAccounts => "linkedAccounts",
			AuthSchScope::Entitlements => "eduPersonEntitlement",
			AuthSchScope::RoomNumber => "roomNumber",
			AuthSchScope::Mobile => "mobile",
			AuthSchScope::AttendedCourses => "niifEduPersonAttendedCourse",
			AuthSchScope::Entrants => "entrants",
			AuthSchScope::AdMembership => "admembership",
			AuthSchScope::UnitScope => "bmeunitscope",
			AuthSchScope::PermanentAddress => "permanentaddress",
		}
	}
}
impl Display for AuthSchScope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl From<AuthSchScope> for String {
	fn from(value: AuthSchScope) -> Self {
		value.as_str().to_owned()
	}
}

/// Space-delimited scope string, kept exactly as supplied.
///
/// Unlike a normalized scope set, entries are neither sorted nor deduplicated: AuthSCH receives
/// the very string the integrator configured.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RequestedScope(String);
impl RequestedScope {
	/// Wraps a raw scope string after validation.
	pub fn new(value: impl Into<String>) -> Result<Self, ScopeValidationError> {
		let value = value.into();

		validate(&value)?;

		Ok(Self(value))
	}

	/// Joins individual scopes with a single space.
	pub fn from_scopes<I, S>(scopes: I) -> Result<Self, ScopeValidationError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut joined = String::new();

		for scope in scopes {
			let owned: String = scope.into();

			if owned.is_empty() {
				return Err(ScopeValidationError::Empty);
			}
			if owned.chars().any(char::is_whitespace) {
				return Err(ScopeValidationError::ContainsWhitespace { scope: owned });
			}
			if !joined.is_empty() {
				joined.push(' ');
			}

			joined.push_str(&owned);
		}

		Self::new(joined)
	}

	/// The scope used when no override is configured.
	pub fn authsch_default() -> Self {
		Self(DEFAULT_SCOPE.to_owned())
	}

	/// Returns true when this is the default AuthSCH scope string.
	pub fn is_default(&self) -> bool {
		self.0 == DEFAULT_SCOPE
	}

	/// The raw scope string.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Iterator over the individual scope entries, in request order.
	pub fn iter(&self) -> SplitWhitespace<'_> {
		self.0.split_whitespace()
	}

	/// Returns true if the scope string requests `scope`.
	pub fn contains(&self, scope: &str) -> bool {
		self.iter().any(|candidate| candidate == scope)
	}
}
impl Default for RequestedScope {
	fn default() -> Self {
		Self::authsch_default()
	}
}
impl AsRef<str> for RequestedScope {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<RequestedScope> for String {
	fn from(value: RequestedScope) -> Self {
		value.0
	}
}
impl TryFrom<String> for RequestedScope {
	type Error = ScopeValidationError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl FromStr for RequestedScope {
	type Err = ScopeValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl Debug for RequestedScope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("RequestedScope").field(&self.0).finish()
	}
}
impl Display for RequestedScope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

fn validate(value: &str) -> Result<(), ScopeValidationError> {
	if value.trim().is_empty() {
		return Err(ScopeValidationError::Empty);
	}
	if value.chars().any(|ch| ch.is_control() && !ch.is_whitespace()) {
		return Err(ScopeValidationError::ContainsControl { scope: value.to_owned() });
	}

	Ok(())
}
