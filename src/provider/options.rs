//! Configuration surface for [`GoogleStrategy`](crate::provider::GoogleStrategy).

// self
use crate::{
	_prelude::*,
	auth::{AccessType, Prompt},
	provider::GoogleEndpoints,
};

/// Options a host application supplies when registering the Google strategy.
///
/// `client_id`, `client_secret`, and `redirect_uri` are required and never defaulted. All
/// other fields are optional; the strategy resolves their defaults at construction. The
/// struct deserializes from `snake_case` keys so it can be read from any configuration
/// source the host already uses.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleStrategyOptions {
	/// OAuth client identifier issued by the Google Cloud console.
	pub client_id: String,
	/// OAuth client secret.
	pub client_secret: String,
	/// Callback URL registered with Google.
	pub redirect_uri: String,
	/// Requested scopes; absent or empty means OpenID + profile + email.
	#[serde(default)]
	pub scopes: Option<Vec<String>>,
	/// `online` (default) or `offline` to also receive a refresh token.
	#[serde(default)]
	pub access_type: Option<AccessType>,
	/// Incremental authorization flag (default `false`).
	#[serde(default)]
	pub include_granted_scopes: Option<bool>,
	/// Forces the consent screen or account chooser.
	#[serde(default)]
	pub prompt: Option<Prompt>,
	/// Restricts sign-in to a Google Workspace domain.
	#[serde(default)]
	pub hd: Option<String>,
	/// Pre-fills the account chooser.
	#[serde(default)]
	pub login_hint: Option<String>,
	/// Endpoint overrides; Google's production endpoints when absent.
	#[serde(default)]
	pub endpoints: Option<GoogleEndpoints>,
}
impl GoogleStrategyOptions {
	/// Creates options from the three required values.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		redirect_uri: impl Into<String>,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			redirect_uri: redirect_uri.into(),
			scopes: None,
			access_type: None,
			include_granted_scopes: None,
			prompt: None,
			hd: None,
			login_hint: None,
			endpoints: None,
		}
	}

	/// Sets the requested scopes.
	pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scopes = Some(scopes.into_iter().map(Into::into).collect());

		self
	}

	/// Sets the access type.
	pub fn with_access_type(mut self, access_type: AccessType) -> Self {
		self.access_type = Some(access_type);

		self
	}

	/// Sets the incremental authorization flag.
	pub fn with_include_granted_scopes(mut self, include: bool) -> Self {
		self.include_granted_scopes = Some(include);

		self
	}

	/// Sets the forced prompt.
	pub fn with_prompt(mut self, prompt: Prompt) -> Self {
		self.prompt = Some(prompt);

		self
	}

	/// Sets the hosted-domain restriction.
	pub fn with_hd(mut self, hd: impl Into<String>) -> Self {
		self.hd = Some(hd.into());

		self
	}

	/// Sets the login hint.
	pub fn with_login_hint(mut self, login_hint: impl Into<String>) -> Self {
		self.login_hint = Some(login_hint.into());

		self
	}

	/// Overrides the endpoint set.
	pub fn with_endpoints(mut self, endpoints: GoogleEndpoints) -> Self {
		self.endpoints = Some(endpoints);

		self
	}
}
impl Debug for GoogleStrategyOptions {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("GoogleStrategyOptions")
			.field("client_id", &self.client_id)
			.field("client_secret_set", &!self.client_secret.is_empty())
			.field("redirect_uri", &self.redirect_uri)
			.field("scopes", &self.scopes)
			.field("access_type", &self.access_type)
			.field("include_granted_scopes", &self.include_granted_scopes)
			.field("prompt", &self.prompt)
			.field("hd", &self.hd)
			.field("login_hint", &self.login_hint)
			.field("endpoints", &self.endpoints)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn options_deserialize_from_snake_case_config() {
		let raw = r#"{
			"client_id": "client.apps.googleusercontent.com",
			"client_secret": "shh",
			"redirect_uri": "https://app.example.com/auth/google/callback",
			"access_type": "offline",
			"prompt": "select_account",
			"hd": "example.com"
		}"#;
		let options: GoogleStrategyOptions =
			serde_json::from_str(raw).expect("Options should deserialize from config JSON.");

		assert_eq!(options.client_id, "client.apps.googleusercontent.com");
		assert_eq!(options.access_type, Some(AccessType::Offline));
		assert_eq!(options.prompt, Some(Prompt::SelectAccount));
		assert_eq!(options.hd.as_deref(), Some("example.com"));
		assert!(options.scopes.is_none());
		assert!(options.include_granted_scopes.is_none());
		assert!(options.login_hint.is_none());
	}

	#[test]
	fn options_require_client_credentials_and_redirect() {
		let raw = r#"{"client_id":"id","client_secret":"secret"}"#;

		assert!(serde_json::from_str::<GoogleStrategyOptions>(raw).is_err());
	}

	#[test]
	fn debug_output_hides_client_secret() {
		let options = GoogleStrategyOptions::new("id", "super-secret", "https://app/cb");
		let rendered = format!("{options:?}");

		assert!(!rendered.contains("super-secret"));
		assert!(rendered.contains("client_secret_set: true"));
	}
}
