// self
use crate::_prelude::*;

/// Checks the host runtime performs on behalf of the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityCheck {
	/// Round-trip and compare the `state` parameter (CSRF protection).
	State,
}
impl SecurityCheck {
	/// Returns the label host runtimes use for the check.
	pub fn as_str(self) -> &'static str {
		match self {
			SecurityCheck::State => "state",
		}
	}
}
impl Display for SecurityCheck {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Presentation hints consumed by sign-in pages; no behavioral effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStyle {
	/// Logo image URL.
	pub logo: Url,
	/// Button background colour (CSS).
	pub bg: String,
	/// Button text colour (CSS).
	pub text: String,
}
