//! Profile mapping hooks that turn AuthSCH profiles into normalized users.
//!
//! Host runtimes that need a different user shape (for example preferring the `@bme.hu`
//! address over `mail`) plug in their own [`ProfileMapper`].

// self
use crate::{
	_prelude::*,
	profile::{self, AuthSchProfile, NormalizedUser},
};

/// Strategy hook that maps a raw profile into the host runtime's user shape.
///
/// Implementors are required to be `Send + Sync` so adapters can be shared across request
/// handlers. Mappers must be pure: the same profile always yields the same user.
pub trait ProfileMapper: Send + Sync {
	/// Maps `profile` into a [`NormalizedUser`].
	fn normalize(&self, profile: &AuthSchProfile) -> NormalizedUser;
}

/// Default mapper selecting `internal_id`, `displayName`, and `mail`.
#[derive(Debug, Default)]
pub struct DefaultProfileMapper;
impl Display for DefaultProfileMapper {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("default-profile-mapper")
	}
}
impl ProfileMapper for DefaultProfileMapper {
	fn normalize(&self, profile: &AuthSchProfile) -> NormalizedUser {
		profile::normalize_profile(profile)
	}
}
impl<F> ProfileMapper for F
where
	F: Fn(&AuthSchProfile) -> NormalizedUser + Send + Sync,
{
	fn normalize(&self, profile: &AuthSchProfile) -> NormalizedUser {
		self(profile)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn closures_act_as_mappers() {
		let mapper = |profile: &AuthSchProfile| NormalizedUser {
			email: profile.linked_accounts.as_ref().and_then(|accounts| accounts.bme.clone()),
			..profile::normalize_profile(profile)
		};
		let profile: AuthSchProfile = serde_json::from_str(
			r#"{"internal_id":"abc","mail":"a@example.com","linkedAccounts":{"bme":"a@bme.hu"}}"#,
		)
		.expect("Profile fixture should deserialize.");
		let user = ProfileMapper::normalize(&mapper, &profile);

		assert_eq!(user.email.as_deref(), Some("a@bme.hu"));
		assert_eq!(user.id.as_deref(), Some("abc"));
		assert_eq!(DefaultProfileMapper.normalize(&profile).email.as_deref(), Some("a@example.com"));
	}
}
