//! Transport primitives for the user-info request.
//!
//! The module exposes [`UserInfoHttpClient`], the adapter's only dependency on an HTTP stack.
//! Requests and responses use the `oauth2` crate's [`HttpRequest`]/[`HttpResponse`] types so
//! any client that already drives `oauth2` token exchanges can serve the user-info call too.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use oauth2::HttpClientError;
use oauth2::{AsyncHttpClient, HttpRequest};
#[cfg(feature = "reqwest")] use oauth2::HttpResponse;
// self
use crate::_prelude::*;

/// Abstraction over HTTP transports capable of executing the user-info request.
///
/// Implementations must be `Send + Sync + 'static` so adapters can be shared across request
/// handlers, and the handles they return must own whatever state is required so their request
/// futures remain `Send` for the lifetime of the in-flight operation.
pub trait UserInfoHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// [`AsyncHttpClient`] handle used for a single request.
	type Handle: for<'c> AsyncHttpClient<
			'c,
			Error = oauth2::HttpClientError<Self::TransportError>,
			Future: 'c + Send,
		>
		+ 'static
		+ Send
		+ Sync;

	/// Builds a handle for one outbound request.
	fn handle(&self) -> Self::Handle;
}

/// Builds the `GET` request for `url` with a JSON `Accept` header.
pub(crate) fn get_json(url: &Url) -> Result<HttpRequest, oauth2::http::Error> {
	oauth2::http::Request::builder()
		.method(oauth2::http::Method::GET)
		.uri(url.as_str())
		.header(oauth2::http::header::ACCEPT, "application/json")
		.body(Vec::new())
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The adapter sets no timeout of its own; configure one on a custom [`ReqwestClient`] and pass
/// it through [`ReqwestHttpClient::with_client`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl UserInfoHttpClient for ReqwestHttpClient {
	type Handle = ReqwestHandle;
	type TransportError = ReqwestError;

	fn handle(&self) -> Self::Handle {
		ReqwestHandle(self.0.clone())
	}
}

#[cfg(feature = "reqwest")]
/// Handle returned by [`ReqwestHttpClient`] that satisfies [`AsyncHttpClient`].
#[derive(Clone)]
pub struct ReqwestHandle(ReqwestClient);
#[cfg(feature = "reqwest")]
impl<'c> AsyncHttpClient<'c> for ReqwestHandle {
	type Error = HttpClientError<ReqwestError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send + Sync>>;

	fn call(&'c self, request: HttpRequest) -> Self::Future {
		let client = self.0.clone();

		Box::pin(async move {
			let response =
				client.execute(request.try_into().map_err(Box::new)?).await.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}
