//! Userinfo fetches against a mock HTTPS server.

#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
use serde_json::Value;
use time::Duration;
use url::Url;
// self
use oauth2_google::{
	auth::GoogleTokenResponse,
	error::{BoxError, Error, ProfileError},
	http::ReqwestHttpClient,
	profile::{PROVIDER, UserInfoClient},
	provider::{
		AUTHORIZATION_ENDPOINT, GoogleEndpoints, GoogleStrategy, GoogleStrategyOptions,
		ProviderStrategy,
	},
	reqwest::Client as ReqwestClient,
};

const PROFILE_BODY: &str = r#"{
	"sub": "110169484474386276334",
	"name": "Jane Doe",
	"given_name": "Jane",
	"family_name": "Doe",
	"picture": "https://lh3.googleusercontent.com/a/photo.jpg",
	"locale": "en",
	"email": "jane@example.com",
	"email_verified": true,
	"hd": "example.com"
}"#;

fn test_reqwest_http_client() -> ReqwestHttpClient {
	let client = ReqwestClient::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestHttpClient::with_client(client)
}

fn userinfo(server: &MockServer) -> UserInfoClient<ReqwestHttpClient> {
	UserInfoClient::new(
		test_reqwest_http_client(),
		Url::parse(&server.url("/userinfo")).expect("Mock userinfo endpoint should parse."),
	)
}

#[tokio::test]
async fn fetch_normalizes_google_profile() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/userinfo")
				.header("authorization", "Bearer ya29.valid")
				.header("accept", "application/json");
			then.status(200).header("content-type", "application/json").body(PROFILE_BODY);
		})
		.await;
	let profile = userinfo(&server)
		.fetch("ya29.valid")
		.await
		.expect("Userinfo fetch should succeed for a valid token.");

	mock.assert_async().await;

	assert_eq!(profile.provider, PROVIDER);
	assert_eq!(profile.id, "110169484474386276334");
	assert_eq!(profile.display_name.as_deref(), Some("Jane Doe"));
	assert_eq!(profile.name.given_name.as_deref(), Some("Jane"));
	assert_eq!(profile.name.family_name.as_deref(), Some("Doe"));
	assert_eq!(profile.emails.len(), 1);
	assert_eq!(profile.emails[0].value, "jane@example.com");
	assert_eq!(profile.photos.len(), 1);
	assert_eq!(profile.photos[0].value, "https://lh3.googleusercontent.com/a/photo.jpg");
	assert_eq!(profile.json.get("hd"), Some(&Value::from("example.com")));
	assert_eq!(profile.json.get("email_verified"), Some(&Value::Bool(true)));
}

#[tokio::test]
async fn rejected_token_reports_status() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/userinfo");
			then.status(401)
				.header("content-type", "application/json")
				.body("{\"error\":\"invalid_request\",\"error_description\":\"Invalid Credentials\"}");
		})
		.await;

	let err = userinfo(&server)
		.fetch("ya29.revoked")
		.await
		.expect_err("A revoked token should fail the userinfo fetch.");

	match err {
		Error::Profile(ProfileError::UserInfoEndpoint { status, message, .. }) => {
			assert_eq!(status, 401);
			assert!(message.contains("Invalid Credentials"));
		},
		other => panic!("Expected a userinfo endpoint error, got {other:?}."),
	}
}

#[tokio::test]
async fn throttled_fetch_exposes_retry_after() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/userinfo");
			then.status(429).header("retry-after", "30").body("Too many requests");
		})
		.await;

	let err = userinfo(&server)
		.fetch("ya29.valid")
		.await
		.expect_err("A throttled userinfo call should fail.");

	match err {
		Error::Profile(ProfileError::UserInfoEndpoint { status, retry_after, .. }) => {
			assert_eq!(status, 429);
			assert_eq!(retry_after, Some(Duration::seconds(30)));
		},
		other => panic!("Expected a userinfo endpoint error, got {other:?}."),
	}
}

#[tokio::test]
async fn html_body_is_a_parse_error() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/userinfo");
			then.status(200).header("content-type", "text/html").body("<html>captive portal</html>");
		})
		.await;

	let err = userinfo(&server)
		.fetch("ya29.valid")
		.await
		.expect_err("An HTML body should not parse as a profile.");

	assert!(matches!(err, Error::Profile(ProfileError::Parse { .. })));
}

#[tokio::test]
async fn strategy_user_profile_uses_overridden_endpoint() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/proxy/userinfo").header("authorization", "Bearer ya29.valid");
			then.status(200).header("content-type", "application/json").body(PROFILE_BODY);
		})
		.await;
	let endpoints = GoogleEndpoints::builder()
		.userinfo_endpoint(server.url("/proxy/userinfo"))
		.build()
		.expect("Mock endpoint override should be accepted.");
	let options = GoogleStrategyOptions::new(
		"client.apps.googleusercontent.com",
		"secret",
		"https://app.example.com/auth/google/callback",
	)
	.with_endpoints(endpoints);
	let strategy: GoogleStrategy<(), ReqwestHttpClient> = GoogleStrategy::with_http_client(
		options,
		|_tokens: GoogleTokenResponse| async { Ok::<_, BoxError>(()) },
		test_reqwest_http_client(),
	)
	.expect("Strategy should build with endpoint overrides.");
	let profile = strategy
		.user_profile("ya29.valid")
		.await
		.expect("Strategy profile lookup should succeed.");

	mock.assert_async().await;

	assert_eq!(profile.id, "110169484474386276334");
	assert_eq!(strategy.endpoints().authorization.as_str(), AUTHORIZATION_ENDPOINT);
}
