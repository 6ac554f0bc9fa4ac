//! AuthSCH profile payload and the normalized user handed to the host runtime.
//!
//! [`AuthSchProfile`] models every field AuthSCH documents as optional and keeps anything else
//! in [`AuthSchProfile::extra`], so additions to the provider's schema never break parsing.
//! A documented field whose value does not fit its type is left unset and its raw value lands in
//! `extra` as well; only a body that is not a JSON object fails to parse.
//! [`normalize_profile`] selects the three fields host runtimes need.

// crates.io
use serde::{Deserializer, de::DeserializeOwned};
use serde_json::{Map, Value};
// self
use crate::_prelude::*;

/// Full user-info document returned by `GET /api/profile`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AuthSchProfile {
	/// AuthSCH identifier (at most 36 characters), issued on first login without consent.
	pub internal_id: Option<String>,
	/// Display name.
	#[serde(rename = "displayName")]
	pub display_name: Option<String>,
	/// Surname.
	pub sn: Option<String>,
	/// Given name.
	#[serde(rename = "givenName")]
	pub given_name: Option<String>,
	/// Email address.
	pub mail: Option<String>,
	/// Neptun code; only present when a BME directory account is linked.
	#[serde(rename = "niifPersonOrgID")]
	pub neptun_code: Option<String>,
	/// Identifiers of linked external accounts.
	#[serde(rename = "linkedAccounts")]
	pub linked_accounts: Option<LinkedAccounts>,
	/// Community memberships recorded in VIR.
	#[serde(rename = "eduPersonEntitlement")]
	pub entitlements: Option<Vec<Entitlement>>,
	/// Dormitory and room number for dorm residents.
	#[serde(rename = "roomNumber")]
	pub room_number: Option<String>,
	/// Mobile number from VIR.
	pub mobile: Option<String>,
	/// Course codes attended in the current semester.
	#[serde(rename = "niifEduPersonAttendedCourse")]
	pub attended_courses: Option<Vec<String>>,
	/// Community entrants from VIR, per semester term.
	pub entrants: Option<Entrants>,
	/// Group memberships in KSZK's Active Directory.
	#[serde(rename = "admembership")]
	pub ad_memberships: Option<Vec<String>>,
	/// University affiliation.
	#[serde(rename = "bmeunitscope")]
	pub unit_scope: Option<UnitScope>,
	/// Permanent address.
	#[serde(rename = "permanentaddress")]
	pub permanent_address: Option<String>,
	/// Fields AuthSCH returned that are not modeled above, or whose value did not fit the
	/// modeled type.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
impl AuthSchProfile {
	/// Parses a user-info response body, reporting the JSON path of any failure.
	///
	/// Fails only when the body is not a JSON object.
	pub fn from_slice(body: &[u8]) -> Result<Self, serde_path_to_error::Error<serde_json::Error>> {
		let mut de = serde_json::Deserializer::from_slice(body);

		serde_path_to_error::deserialize(&mut de)
	}

	/// Builds a profile from a decoded JSON object, taking each documented field that fits.
	pub fn from_map(mut fields: Map<String, Value>) -> Self {
		Self {
			internal_id: take_field(&mut fields, "internal_id"),
			display_name: take_field(&mut fields, "displayName"),
			sn: take_field(&mut fields, "sn"),
			given_name: take_field(&mut fields, "givenName"),
			mail: take_field(&mut fields, "mail"),
			neptun_code: take_field(&mut fields, "niifPersonOrgID"),
			linked_accounts: take_field(&mut fields, "linkedAccounts"),
			entitlements: take_field(&mut fields, "eduPersonEntitlement"),
			room_number: take_field(&mut fields, "roomNumber"),
			mobile: take_field(&mut fields, "mobile"),
			attended_courses: take_field(&mut fields, "niifEduPersonAttendedCourse"),
			entrants: take_field(&mut fields, "entrants"),
			ad_memberships: take_field(&mut fields, "admembership"),
			unit_scope: take_field(&mut fields, "bmeunitscope"),
			permanent_address: take_field(&mut fields, "permanentaddress"),
			extra: fields,
		}
	}
}
impl<'de> Deserialize<'de> for AuthSchProfile {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Map::deserialize(deserializer).map(Self::from_map)
	}
}

/// Linked external accounts.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LinkedAccounts {
	/// `@bme.hu` email address.
	pub bme: Option<String>,
	/// SCH account username.
	pub schacc: Option<String>,
	/// VIR numeric identifier.
	pub vir: Option<i64>,
	/// VIR username.
	#[serde(rename = "virUid")]
	pub vir_uid: Option<String>,
	/// Account kinds not modeled above, or whose value did not fit the modeled type.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
impl<'de> Deserialize<'de> for LinkedAccounts {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let mut fields = Map::deserialize(deserializer)?;

		Ok(Self {
			bme: take_field(&mut fields, "bme"),
			schacc: take_field(&mut fields, "schacc"),
			vir: take_field(&mut fields, "vir"),
			vir_uid: take_field(&mut fields, "virUid"),
			extra: fields,
		})
	}
}

/// A community membership record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entitlement {
	/// Group identifier.
	pub id: i64,
	/// Group name.
	pub name: String,
	/// Membership status.
	pub status: String,
	/// Membership start date, as sent by AuthSCH.
	pub start: String,
	/// Membership end date; absent while the membership is active.
	pub end: Option<String>,
}

/// Community entrants per semester term.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entrants {
	/// Fall semester entrants.
	pub fall: Vec<String>,
	/// Spring semester entrants.
	pub spring: Vec<String>,
}

/// University affiliation reported in `bmeunitscope`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitScope {
	/// BME member.
	Bme,
	/// BME first-year.
	BmeNewbie,
	/// Faculty of Electrical Engineering and Informatics.
	BmeVik,
	/// Active VIK student.
	BmeVikActive,
	/// VIK first-year.
	BmeVikNewbie,
	/// Faculty of Chemical Technology and Biotechnology.
	BmeVbk,
	/// Active VBK student.
	BmeVbkActive,
	/// VBK first-year.
	BmeVbkNewbie,
	/// Affiliation introduced after this enumeration was written.
	#[serde(other)]
	Unknown,
}

/// Minimal user shape required by host runtimes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedUser {
	/// AuthSCH `internal_id`.
	pub id: Option<String>,
	/// AuthSCH `displayName`.
	pub name: Option<String>,
	/// AuthSCH `mail`.
	pub email: Option<String>,
}

/// Profile fetched for a login together with its normalized form.
#[derive(Clone, Debug, PartialEq)]
pub struct UserInfo {
	/// Normalized user handed to the host runtime.
	pub user: NormalizedUser,
	/// Full AuthSCH profile.
	pub profile: AuthSchProfile,
}

/// Selects `internal_id`, `displayName`, and `mail`; absent fields stay absent.
pub fn normalize_profile(profile: &AuthSchProfile) -> NormalizedUser {
	NormalizedUser {
		id: profile.internal_id.clone(),
		name: profile.display_name.clone(),
		email: profile.mail.clone(),
	}
}

// Removes `key` when its value decodes as `T`. Mismatched values stay in `fields`; nulls are dropped.
fn take_field<T>(fields: &mut Map<String, Value>, key: &str) -> Option<T>
where
	T: DeserializeOwned,
{
	let value = fields.remove(key)?;

	if value.is_null() {
		return None;
	}

	match T::deserialize(&value) {
		Ok(field) => Some(field),
		Err(_) => {
			fields.insert(key.to_owned(), value);

			None
		},
	}
}
