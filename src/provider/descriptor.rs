//! Google endpoint set and its builder.

// self
use crate::{_prelude::*, error::ConfigError};

/// Google's OAuth 2.0 authorization endpoint.
pub const AUTHORIZATION_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
/// Google's OAuth 2.0 token endpoint (called by the engine, never by this crate).
pub const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
/// Google's OpenID Connect userinfo endpoint.
pub const USERINFO_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

/// Endpoint set used by the strategy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleEndpoints {
	/// Authorization endpoint handed to the engine for the redirect.
	pub authorization: Url,
	/// Token endpoint handed to the engine for code exchange.
	pub token: Url,
	/// Userinfo endpoint queried for profiles.
	pub userinfo: Url,
}
impl GoogleEndpoints {
	/// Creates a builder seeded with Google's production endpoints.
	pub fn builder() -> GoogleEndpointsBuilder {
		GoogleEndpointsBuilder::default()
	}

	/// Parses Google's production endpoints.
	pub fn google() -> Result<Self, ConfigError> {
		Self::builder().build()
	}
}

/// Builder that overrides individual endpoints (proxies, test doubles).
#[derive(Debug, Default)]
pub struct GoogleEndpointsBuilder {
	/// Authorization endpoint override.
	pub authorization: Option<String>,
	/// Token endpoint override.
	pub token: Option<String>,
	/// Userinfo endpoint override.
	pub userinfo: Option<String>,
}
impl GoogleEndpointsBuilder {
	/// Overrides the authorization endpoint.
	pub fn authorization_endpoint(mut self, url: impl Into<String>) -> Self {
		self.authorization = Some(url.into());

		self
	}

	/// Overrides the token endpoint.
	pub fn token_endpoint(mut self, url: impl Into<String>) -> Self {
		self.token = Some(url.into());

		self
	}

	/// Overrides the userinfo endpoint.
	pub fn userinfo_endpoint(mut self, url: impl Into<String>) -> Self {
		self.userinfo = Some(url.into());

		self
	}

	/// Parses and validates the endpoint set; every endpoint must use HTTPS.
	pub fn build(self) -> Result<GoogleEndpoints, ConfigError> {
		let endpoints = GoogleEndpoints {
			authorization: parse_endpoint(
				"authorization",
				self.authorization.as_deref().unwrap_or(AUTHORIZATION_ENDPOINT),
			)?,
			token: parse_endpoint("token", self.token.as_deref().unwrap_or(TOKEN_ENDPOINT))?,
			userinfo: parse_endpoint(
				"userinfo",
				self.userinfo.as_deref().unwrap_or(USERINFO_ENDPOINT),
			)?,
		};

		endpoints.validate()?;

		Ok(endpoints)
	}
}

impl GoogleEndpoints {
	/// Validates that every endpoint uses HTTPS.
	pub fn validate(&self) -> Result<(), ConfigError> {
		validate_endpoint("authorization", &self.authorization)?;
		validate_endpoint("token", &self.token)?;
		validate_endpoint("userinfo", &self.userinfo)?;

		Ok(())
	}
}

fn parse_endpoint(endpoint: &'static str, raw: &str) -> Result<Url, ConfigError> {
	Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint { endpoint, source })
}

fn validate_endpoint(endpoint: &'static str, url: &Url) -> Result<(), ConfigError> {
	if url.scheme() != "https" {
		Err(ConfigError::InsecureEndpoint { endpoint, url: url.to_string() })
	} else {
		Ok(())
	}
}
