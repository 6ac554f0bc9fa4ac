//! The AuthSCH adapter and the operations host runtimes call into.

pub mod authorization;
pub mod token;
pub mod userinfo;

pub use authorization::*;
pub use token::*;
pub use userinfo::*;

// self
use crate::{
	_prelude::*,
	http::UserInfoHttpClient,
	oauth::TransportErrorMapper,
	options::{AuthSchOptions, ResolvedOptions},
	provider::{DefaultProfileMapper, ProfileMapper, ProviderDescriptor},
};
#[cfg(feature = "reqwest")]
use crate::{http::ReqwestHttpClient, oauth::ReqwestTransportErrorMapper};

#[cfg(feature = "reqwest")]
/// Adapter specialized for the crate's default reqwest transport stack.
pub type ReqwestAuthSch = AuthSch<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// AuthSCH provider adapter.
///
/// The adapter owns the resolved options, the provider descriptor, the HTTP client used for the
/// user-info request, and the profile mapper. The host runtime calls it at three points:
/// [`authorization_request`](Self::authorization_request),
/// [`token_request`](Self::token_request), and
/// [`user_info`](Self::user_info) (or its halves, [`fetch_user_info`](Self::fetch_user_info) and
/// [`normalize`](Self::normalize)). Nothing is mutated after construction, so one adapter can
/// serve any number of concurrent logins.
pub struct AuthSch<C, M>
where
	C: ?Sized + UserInfoHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// HTTP client wrapper used for the user-info request.
	pub http_client: Arc<C>,
	/// Mapper applied to transport-layer errors before surfacing them to callers.
	pub transport_mapper: Arc<M>,
	/// Provider descriptor that defines endpoints, grant, checks, and styling.
	pub descriptor: ProviderDescriptor,
	/// Options after defaults have been applied.
	pub options: ResolvedOptions,
	/// Mapper producing the normalized user.
	pub profile_mapper: Arc<dyn ProfileMapper>,
}
impl<C, M> AuthSch<C, M>
where
	C: ?Sized + UserInfoHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates an adapter that reuses the caller-provided transport + mapper pair.
	pub fn with_http_client(
		options: AuthSchOptions,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Result<Self> {
		Ok(Self {
			http_client: http_client.into(),
			transport_mapper: mapper.into(),
			descriptor: ProviderDescriptor::authsch()?,
			options: options.resolve()?,
			profile_mapper: Arc::new(DefaultProfileMapper),
		})
	}

	/// Replaces the provider descriptor (e.g. to target a mirror or a mock server).
	pub fn with_descriptor(mut self, descriptor: ProviderDescriptor) -> Self {
		self.descriptor = descriptor;

		self
	}

	/// Replaces the profile mapper used by [`normalize`](Self::normalize).
	pub fn with_profile_mapper(mut self, mapper: impl 'static + ProfileMapper) -> Self {
		self.profile_mapper = Arc::new(mapper);

		self
	}
}
#[cfg(feature = "reqwest")]
impl AuthSch<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a new adapter for the provided options.
	///
	/// The adapter provisions its own reqwest-backed transport so callers do not need to pass
	/// HTTP handles explicitly.
	pub fn new(options: AuthSchOptions) -> Result<Self> {
		Self::with_http_client(
			options,
			ReqwestHttpClient::default(),
			Arc::new(ReqwestTransportErrorMapper),
		)
	}
}
impl<C, M> Clone for AuthSch<C, M>
where
	C: ?Sized + UserInfoHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			transport_mapper: self.transport_mapper.clone(),
			descriptor: self.descriptor.clone(),
			options: self.options.clone(),
			profile_mapper: self.profile_mapper.clone(),
		}
	}
}
impl<C, M> Debug for AuthSch<C, M>
where
	C: ?Sized + UserInfoHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthSch")
			.field("descriptor", &self.descriptor)
			.field("options", &self.options)
			.finish()
	}
}
