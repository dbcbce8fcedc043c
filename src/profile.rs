//! Userinfo profiles: the raw Google payload, the normalized shape, and the fetch client.
//!
//! [`UserInfoClient`] issues one bearer-authenticated `GET` against the userinfo endpoint and
//! maps the response into a [`NormalizedProfile`]. There is no retry, cache, or timeout at
//! this layer; each failure surfaces once to the caller. The raw payload is parsed through
//! a typed schema so a body without `sub` fails instead of producing an anonymous profile.

// crates.io
use oauth2::{
	AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse,
	http::{
		Method, Request,
		header::{ACCEPT, AUTHORIZATION},
	},
};
use serde::{
	Deserializer,
	de::{Error as _, Unexpected},
};
use serde_json::{Map, Value};
// self
use crate::{
	_prelude::*,
	error::{ConfigError, ProfileError, TransportError},
	http::{self, ProfileHttpClient},
	obs::{self, Operation, OperationSpan, Outcome},
	provider::descriptor::USERINFO_ENDPOINT,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Provider label stamped on every normalized profile.
pub const PROVIDER: &str = "google";

const BODY_PREVIEW_LIMIT: usize = 256;

/// Untouched userinfo payload, as Google sent it.
pub type ProfilePayload = Map<String, Value>;

/// Typed view of Google's userinfo payload.
///
/// Only `sub` is required. Members this struct does not name, and `null` members, are only
/// visible through the [`ProfilePayload`] the view was parsed from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawProfile {
	/// Stable Google account identifier.
	pub sub: String,
	/// Full display name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Given name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub given_name: Option<String>,
	/// Family name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub family_name: Option<String>,
	/// Profile picture URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub picture: Option<String>,
	/// BCP 47 locale tag.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub locale: Option<String>,
	/// Primary email address (requires the email scope).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	/// Whether Google verified the email address; `"true"`/`"false"` strings are accepted.
	#[serde(
		default,
		deserialize_with = "deserialize_lenient_flag",
		skip_serializing_if = "Option::is_none"
	)]
	pub email_verified: Option<bool>,
	/// Workspace hosted domain of the account.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hd: Option<String>,
}
impl RawProfile {
	/// Parses the typed view out of `payload`.
	pub fn from_payload(payload: &ProfilePayload) -> Result<Self, ProfileError> {
		let value = Value::Object(payload.clone());

		Ok(serde_path_to_error::deserialize(&value)?)
	}
}

/// Structured name parts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileName {
	/// Family name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub family_name: Option<String>,
	/// Given name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub given_name: Option<String>,
}

/// Email entry of a normalized profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEmail {
	/// Address.
	pub value: String,
	/// Optional classification (`work`, `home`, ...).
	#[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,
}

/// Photo entry of a normalized profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePhoto {
	/// Image URL.
	pub value: String,
}

/// Provider-neutral profile built from a userinfo payload.
///
/// `emails` and `photos` hold one entry when Google returned the corresponding field and
/// are empty otherwise. `json` (serialized as `_json`) is the untouched payload, `null`
/// and unknown members included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProfile {
	/// Always [`PROVIDER`].
	pub provider: String,
	/// Google account identifier (`sub`).
	pub id: String,
	/// Display name (`name`).
	pub display_name: Option<String>,
	/// Name parts (`given_name`, `family_name`).
	pub name: ProfileName,
	/// Email entries (`email`).
	pub emails: Vec<ProfileEmail>,
	/// Photo entries (`picture`).
	pub photos: Vec<ProfilePhoto>,
	/// Raw provider payload.
	#[serde(rename = "_json")]
	pub json: ProfilePayload,
}
impl NormalizedProfile {
	/// Normalizes `payload`, failing when it has no usable `sub`.
	pub fn from_payload(payload: ProfilePayload) -> Result<Self, ProfileError> {
		let raw = RawProfile::from_payload(&payload)?;

		Ok(Self::new(raw, payload))
	}

	/// Combines an already parsed view with the payload it came from.
	pub fn new(raw: RawProfile, payload: ProfilePayload) -> Self {
		let RawProfile { sub, name, given_name, family_name, picture, email, .. } = raw;

		Self {
			provider: PROVIDER.into(),
			id: sub,
			display_name: name,
			name: ProfileName { family_name, given_name },
			emails: email.into_iter().map(|value| ProfileEmail { value, kind: None }).collect(),
			photos: picture.into_iter().map(|value| ProfilePhoto { value }).collect(),
			json: payload,
		}
	}
}

/// Fetches and normalizes profiles from the userinfo endpoint.
///
/// The client is independent of any strategy instance, so it can be cloned into a verify
/// callback.
pub struct UserInfoClient<C>
where
	C: ?Sized + ProfileHttpClient,
{
	/// HTTP transport used for the request.
	pub http_client: Arc<C>,
	/// Userinfo endpoint.
	pub endpoint: Url,
}
impl<C> UserInfoClient<C>
where
	C: ?Sized + ProfileHttpClient,
{
	/// Creates a client for `endpoint` backed by `http_client`.
	pub fn new(http_client: impl Into<Arc<C>>, endpoint: Url) -> Self {
		Self { http_client: http_client.into(), endpoint }
	}

	/// Fetches the profile owned by `access_token`.
	pub async fn fetch(&self, access_token: &str) -> Result<NormalizedProfile> {
		const OPERATION: Operation = Operation::UserProfile;

		let span = OperationSpan::new(OPERATION, "userinfo_fetch");

		obs::record_outcome(OPERATION, Outcome::Attempt);

		let result = span
			.instrument(async move {
				let payload = self.fetch_payload(access_token).await?;

				Ok::<_, Error>(NormalizedProfile::from_payload(payload)?)
			})
			.await;

		obs::record_result(OPERATION, &result);

		result
	}

	/// Fetches the untouched payload owned by `access_token` without normalizing it.
	pub async fn fetch_payload(&self, access_token: &str) -> Result<ProfilePayload> {
		let request = build_request(&self.endpoint, access_token)?;
		let handle = self.http_client.handle();
		let response = handle.call(request).await.map_err(map_transport_error)?;

		Ok(read_payload(response)?)
	}
}
#[cfg(feature = "reqwest")]
impl UserInfoClient<ReqwestHttpClient> {
	/// Creates a reqwest-backed client for Google's production userinfo endpoint.
	pub fn google() -> Result<Self> {
		let endpoint = Url::parse(USERINFO_ENDPOINT)
			.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "userinfo", source })?;

		Ok(Self::new(ReqwestHttpClient::default(), endpoint))
	}
}
impl<C> Clone for UserInfoClient<C>
where
	C: ?Sized + ProfileHttpClient,
{
	fn clone(&self) -> Self {
		Self { http_client: self.http_client.clone(), endpoint: self.endpoint.clone() }
	}
}
impl<C> Debug for UserInfoClient<C>
where
	C: ?Sized + ProfileHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("UserInfoClient").field("endpoint", &self.endpoint.as_str()).finish()
	}
}

fn build_request(endpoint: &Url, access_token: &str) -> Result<HttpRequest, ConfigError> {
	Ok(Request::builder()
		.method(Method::GET)
		.uri(endpoint.as_str())
		.header(AUTHORIZATION, format!("Bearer {access_token}"))
		.header(ACCEPT, "application/json")
		.body(Vec::new())?)
}

fn read_payload(response: HttpResponse) -> Result<ProfilePayload, ProfileError> {
	let status = response.status();

	if !status.is_success() {
		return Err(ProfileError::UserInfoEndpoint {
			status: status.as_u16(),
			message: body_preview(response.body()),
			retry_after: http::parse_retry_after(response.headers()),
		});
	}

	let mut de = serde_json::Deserializer::from_slice(response.body());
	let payload = serde_path_to_error::deserialize(&mut de)?;

	de.end().map_err(|source| ProfileError::Parse { path: ".".into(), source })?;

	Ok(payload)
}

fn deserialize_lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Flag {
		Bool(bool),
		Text(String),
	}

	match Option::<Flag>::deserialize(deserializer)? {
		None => Ok(None),
		Some(Flag::Bool(flag)) => Ok(Some(flag)),
		Some(Flag::Text(text)) if text.eq_ignore_ascii_case("true") => Ok(Some(true)),
		Some(Flag::Text(text)) if text.eq_ignore_ascii_case("false") => Ok(Some(false)),
		Some(Flag::Text(text)) => Err(D::Error::invalid_value(
			Unexpected::Str(&text),
			&"a boolean or the string \"true\" or \"false\"",
		)),
	}
}

fn map_transport_error<E>(err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => TransportError::network(*inner).into(),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) => TransportError::Other { message }.into(),
		_ => TransportError::Other { message: "unrecognized transport failure".into() }.into(),
	}
}

fn body_preview(body: &[u8]) -> String {
	let text = String::from_utf8_lossy(body);

	if text.chars().count() <= BODY_PREVIEW_LIMIT {
		return text.into_owned();
	}

	let mut buf = text.chars().take(BODY_PREVIEW_LIMIT).collect::<String>();

	buf.push('…');

	buf
}
