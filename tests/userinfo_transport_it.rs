#![cfg(feature = "reqwest")]

// crates.io
use parking_lot::Mutex;
// self
use oauth2_authsch::{
	_preludet::*,
	auth::TokenContext,
	error::{AuthenticationError, TransportError},
	flows::AuthSch,
	http::UserInfoHttpClient,
	oauth::{
		TransportErrorMapper, map_http_client_error,
		oauth2::{AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse, http::StatusCode},
	},
	profile::{AuthSchProfile, NormalizedUser},
};

const PROFILE_BODY: &str = r#"{"internal_id":"abc-123","displayName":"Jane Doe","sn":"Doe","givenName":"Jane","mail":"jane@example.com"}"#;

#[derive(Debug)]
enum FakeTransportError {
	Refused,
}
impl Display for FakeTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Refused => write!(f, "Connection refused."),
		}
	}
}
impl StdError for FakeTransportError {}

#[derive(Clone, Default)]
struct RecordingHttpClient {
	requests: Arc<Mutex<Vec<HttpRequest>>>,
	refuse: bool,
	status: Option<StatusCode>,
}
impl RecordingHttpClient {
	fn refusing() -> Self {
		Self { refuse: true, ..Default::default() }
	}

	#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
	fn responding(status: StatusCode) -> Self {
		Self { status: Some(status), ..Default::default() }
	}

	fn recorded_uris(&self) -> Vec<String> {
		self.requests.lock().iter().map(|request| request.uri().to_string()).collect()
	}
}
impl UserInfoHttpClient for RecordingHttpClient {
	type Handle = RecordingHandle;
	type TransportError = FakeTransportError;

	fn handle(&self) -> Self::Handle {
		RecordingHandle {
			requests: self.requests.clone(),
			refuse: self.refuse,
			status: self.status,
		}
	}
}

struct RecordingHandle {
	requests: Arc<Mutex<Vec<HttpRequest>>>,
	refuse: bool,
	status: Option<StatusCode>,
}
impl<'a> AsyncHttpClient<'a> for RecordingHandle {
	type Error = HttpClientError<FakeTransportError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'a + Send + Sync>>;

	fn call(&'a self, request: HttpRequest) -> Self::Future {
		let requests = self.requests.clone();
		let refuse = self.refuse;
		let status = self.status;

		Box::pin(async move {
			requests.lock().push(request);

			if refuse {
				return Err(HttpClientError::Reqwest(Box::new(FakeTransportError::Refused)));
			}

			let mut response = HttpResponse::new(PROFILE_BODY.as_bytes().to_vec());

			if let Some(status) = status {
				*response.status_mut() = status;
			}

			Ok(response)
		})
	}
}

struct FakeTransportErrorMapper;
impl TransportErrorMapper<FakeTransportError> for FakeTransportErrorMapper {
	fn map_transport_error(&self, err: HttpClientError<FakeTransportError>) -> Error {
		map_http_client_error(err)
	}
}

type FakeAdapter = AuthSch<RecordingHttpClient, FakeTransportErrorMapper>;

fn adapter(client: &RecordingHttpClient) -> FakeAdapter {
	AuthSch::with_http_client(
		test_options(None),
		Arc::new(client.clone()),
		Arc::new(FakeTransportErrorMapper),
	)
	.expect("Adapter should build with a fake transport.")
}

#[tokio::test]
async fn missing_access_token_fails_before_any_request() {
	let client = RecordingHttpClient::default();
	let adapter = adapter(&client);

	for ctx in [TokenContext::default(), TokenContext::with_access_token("")] {
		let err = adapter
			.fetch_user_info(&ctx)
			.await
			.expect_err("Fetching without an access token must fail.");

		assert!(matches!(err, Error::Authentication(AuthenticationError::MissingAccessToken)));
	}

	assert!(client.recorded_uris().is_empty(), "No HTTP call may be issued without a token.");
}

#[tokio::test]
async fn access_token_is_sent_as_query_parameter() {
	let client = RecordingHttpClient::default();
	let adapter = adapter(&client);
	let info = adapter
		.user_info(&TokenContext::with_access_token("T"))
		.await
		.expect("User info should be fetched through the fake transport.");

	assert_eq!(client.recorded_uris(), vec!["https://auth.sch.bme.hu/api/profile?access_token=T"]);
	assert_eq!(
		info.user,
		NormalizedUser {
			id: Some("abc-123".into()),
			name: Some("Jane Doe".into()),
			email: Some("jane@example.com".into()),
		}
	);
	assert_eq!(info.profile.sn.as_deref(), Some("Doe"));
	assert_eq!(adapter.normalize(&info.profile), info.user, "Normalization must be idempotent.");
}

#[tokio::test]
async fn transport_failures_keep_their_cause() {
	let client = RecordingHttpClient::refusing();
	let err = adapter(&client)
		.fetch_user_info(&TokenContext::with_access_token("T"))
		.await
		.expect_err("Refused connections must surface as errors.");
	let Error::Transport(TransportError::Network { source }) = err else {
		panic!("Transport failures should map to TransportError::Network.");
	};

	assert_eq!(source.to_string(), "Connection refused.");
	assert_eq!(client.recorded_uris().len(), 1, "Failed requests must not be retried.");
}

#[tokio::test]
async fn custom_profile_mapper_is_applied() {
	let client = RecordingHttpClient::default();
	let adapter = adapter(&client).with_profile_mapper(|profile: &AuthSchProfile| NormalizedUser {
		name: profile.given_name.clone(),
		..Default::default()
	});
	let info = adapter
		.user_info(&TokenContext::with_access_token("T"))
		.await
		.expect("User info should be fetched through the fake transport.");

	assert_eq!(info.user, NormalizedUser { name: Some("Jane".into()), ..Default::default() });
}

#[cfg(feature = "tracing")]
mod logging {
	// crates.io
	use tracing::{
		Event, Level, Subscriber,
		field::{Field, Visit},
	};
	use tracing_subscriber::{
		layer::{Context, Layer, SubscriberExt},
		registry,
	};
	// self
	use super::*;
	use oauth2_authsch::error::UpstreamError;

	/// Collects the `error` field of every ERROR-level event.
	#[derive(Clone, Default)]
	struct ErrorEvents(Arc<Mutex<Vec<String>>>);
	impl ErrorEvents {
		fn take(&self) -> Vec<String> {
			std::mem::take(&mut *self.0.lock())
		}
	}
	impl<S> Layer<S> for ErrorEvents
	where
		S: Subscriber,
	{
		fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
			if *event.metadata().level() != Level::ERROR {
				return;
			}

			let mut visitor = ErrorField::default();

			event.record(&mut visitor);
			self.0.lock().push(visitor.0.unwrap_or_default());
		}
	}

	#[derive(Default)]
	struct ErrorField(Option<String>);
	impl Visit for ErrorField {
		fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
			if field.name() == "error" {
				self.0 = Some(format!("{value:?}"));
			}
		}
	}

	#[tokio::test]
	async fn failures_are_logged_once_and_returned_unchanged() {
		let events = ErrorEvents::default();
		let _guard = tracing::subscriber::set_default(registry().with(events.clone()));
		let missing = adapter(&RecordingHttpClient::default())
			.fetch_user_info(&TokenContext::default())
			.await
			.expect_err("Fetching without an access token must fail.");

		assert!(matches!(missing, Error::Authentication(AuthenticationError::MissingAccessToken)));
		assert_eq!(events.take(), vec![missing.to_string()]);

		let client = RecordingHttpClient::responding(StatusCode::UNAUTHORIZED);
		let rejected = adapter(&client)
			.fetch_user_info(&TokenContext::with_access_token("T"))
			.await
			.expect_err("Non-success statuses must fail.");

		assert!(matches!(rejected, Error::Upstream(UpstreamError::Status { status: 401, .. })));
		assert_eq!(events.take(), vec![rejected.to_string()]);
		assert_eq!(client.recorded_uris().len(), 1);
	}

	#[tokio::test]
	async fn successful_fetch_logs_no_error() {
		let events = ErrorEvents::default();
		let _guard = tracing::subscriber::set_default(registry().with(events.clone()));

		adapter(&RecordingHttpClient::default())
			.fetch_user_info(&TokenContext::with_access_token("T"))
			.await
			.expect("User info should be fetched through the fake transport.");

		assert!(events.take().is_empty());
	}
}
