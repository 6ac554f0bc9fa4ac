//! AuthSCH (BME) OAuth 2.0 provider adapter: declares endpoints, scopes, and token parameters,
//! fetches the user profile, and normalizes it for the host OAuth runtime.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod flows;
pub mod http;
pub mod oauth;
pub mod obs;
pub mod options;
pub mod profile;
pub mod provider;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		flows::AuthSch,
		http::ReqwestHttpClient,
		oauth::ReqwestTransportErrorMapper,
		options::AuthSchOptions,
		provider::{ProviderDescriptor, ProviderEndpoints},
	};

	/// Adapter type alias used by reqwest-backed integration tests.
	pub type ReqwestTestAdapter = AuthSch<ReqwestHttpClient, ReqwestTransportErrorMapper>;

	/// Client identifier shared by test fixtures.
	pub const TEST_CLIENT_ID: &str = "client-it";
	/// Client secret shared by test fixtures.
	pub const TEST_CLIENT_SECRET: &str = "secret-it";

	/// Options carrying the test client credentials and an optional scope override.
	pub fn test_options(scope: Option<&str>) -> AuthSchOptions {
		let options = AuthSchOptions::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET);

		match scope {
			Some(scope) => options.with_scope(scope),
			None => options,
		}
	}

	/// Rewrites the AuthSCH descriptor so every endpoint points at `base` (e.g. an `httpmock`
	/// server) while keeping the production paths.
	///
	/// The endpoints are swapped in place, bypassing the builder's HTTPS validation, because
	/// local mock servers speak plain HTTP.
	pub fn descriptor_for_base(base: &str) -> ProviderDescriptor {
		let mut descriptor =
			ProviderDescriptor::authsch().expect("AuthSCH descriptor should build successfully.");
		let base = Url::parse(base).expect("Mock server base URL should parse successfully.");
		let join = |path: &str| base.join(path).expect("Mock endpoint path should join cleanly.");

		descriptor.endpoints = ProviderEndpoints {
			authorization: join("/site/login"),
			token: join("/oauth2/token"),
			userinfo: join("/api/profile"),
		};

		descriptor
	}

	/// Constructs an [`AuthSch`] adapter backed by the default reqwest transport whose
	/// endpoints point at `base`.
	pub fn build_reqwest_test_adapter(base: &str, options: AuthSchOptions) -> ReqwestTestAdapter {
		AuthSch::with_http_client(
			options,
			ReqwestHttpClient::default(),
			Arc::new(ReqwestTransportErrorMapper),
		)
		.expect("Test adapter should build successfully.")
		.with_descriptor(descriptor_for_base(base))
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))]
use {color_eyre as _, httpmock as _, parking_lot as _, tokio as _, tracing_subscriber as _};
#[cfg(test)] use oauth2_authsch as _;
