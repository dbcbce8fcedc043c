//! Token response shape returned by Google's token endpoint.

// crates.io
use oauth2::{ExtraTokenFields, StandardTokenResponse, basic::BasicTokenType};
// self
use crate::_prelude::*;

/// Non-standard members of Google's token response.
///
/// `expires_in`, `token_type`, `scope`, and `refresh_token` are standard fields and live on
/// [`GoogleTokenResponse`] itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleTokenFields {
	/// OpenID Connect ID token, present when `openid` was requested.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id_token: Option<String>,
}
impl ExtraTokenFields for GoogleTokenFields {}

/// Token response produced by the engine's code exchange against Google.
pub type GoogleTokenResponse = StandardTokenResponse<GoogleTokenFields, BasicTokenType>;

#[cfg(test)]
mod tests {
	// crates.io
	use oauth2::TokenResponse;
	// self
	use super::*;

	#[test]
	fn id_token_is_kept_from_token_endpoint_payload() {
		let body = r#"{
			"access_token": "ya29.token",
			"expires_in": 3920,
			"token_type": "Bearer",
			"scope": "openid https://www.googleapis.com/auth/userinfo.email",
			"id_token": "eyJhbGciOi.payload.sig"
		}"#;
		let response: GoogleTokenResponse =
			serde_json::from_str(body).expect("Google token response should deserialize.");

		assert_eq!(response.access_token().secret(), "ya29.token");
		assert_eq!(response.extra_fields().id_token.as_deref(), Some("eyJhbGciOi.payload.sig"));
		assert_eq!(response.token_type(), &BasicTokenType::Bearer);
		assert!(response.refresh_token().is_none());
	}

	#[test]
	fn id_token_is_optional() {
		let body = r#"{"access_token":"ya29.token","token_type":"Bearer"}"#;
		let response: GoogleTokenResponse =
			serde_json::from_str(body).expect("Token response without id_token should parse.");

		assert!(response.extra_fields().id_token.is_none());
	}
}
