//! Strategy hooks invoked by an OAuth engine, and the Google implementation.
//!
//! The engine owns the authorization-code state machine. While building the redirect URL
//! it calls [`ProviderStrategy::authorization_params`] and after the code exchange it calls
//! [`ProviderStrategy::user_profile`] (usually from the application's verify callback).

// crates.io
use oauth2::{
	AuthUrl, Client, ClientId, ClientSecret, CsrfToken, EndpointNotSet, EndpointSet, RedirectUrl,
	Scope, StandardRevocableToken, TokenUrl,
	basic::{BasicErrorResponse, BasicRevocationErrorResponse, BasicTokenIntrospectionResponse},
};
// self
use crate::{
	_prelude::*,
	auth::{self, AccessType, AuthorizationParams, GoogleTokenResponse, Prompt, ResolvedScopes},
	error::{BoxError, ConfigError},
	http::ProfileHttpClient,
	obs::{self, Operation, OperationSpan, Outcome},
	profile::{NormalizedProfile, UserInfoClient},
	provider::{GoogleEndpoints, GoogleStrategyOptions},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Name under which the strategy registers itself by default.
pub const DEFAULT_STRATEGY_NAME: &str = "google";

/// Boxed future returned by [`ProviderStrategy::user_profile`].
pub type ProfileFuture<'a, P> = Pin<Box<dyn Future<Output = Result<P>> + 'a + Send>>;
/// Boxed future returned by [`VerifyCallback::verify`].
pub type VerifyFuture<U> = Pin<Box<dyn Future<Output = Result<U, BoxError>> + Send>>;

/// `oauth2` client configured with Google's authorization and token endpoints.
pub type GoogleClient = Client<
	BasicErrorResponse,
	GoogleTokenResponse,
	BasicTokenIntrospectionResponse,
	StandardRevocableToken,
	BasicRevocationErrorResponse,
	EndpointSet,
	EndpointNotSet,
	EndpointNotSet,
	EndpointNotSet,
	EndpointSet,
>;
type UnconfiguredGoogleClient = Client<
	BasicErrorResponse,
	GoogleTokenResponse,
	BasicTokenIntrospectionResponse,
	StandardRevocableToken,
	BasicRevocationErrorResponse,
	EndpointNotSet,
	EndpointNotSet,
	EndpointNotSet,
	EndpointNotSet,
	EndpointNotSet,
>;

#[cfg(feature = "reqwest")]
/// Google strategy specialized for the crate's default reqwest transport.
pub type ReqwestGoogleStrategy<U> = GoogleStrategy<U, ReqwestHttpClient>;

/// Provider capabilities an OAuth engine invokes through dependency injection.
///
/// Implementors are required to be `Send + Sync`; both hooks only read immutable
/// configuration, so concurrent requests never interact.
pub trait ProviderStrategy: Send + Sync {
	/// Profile type produced by [`user_profile`](Self::user_profile).
	type Profile;

	/// Registry name of the strategy.
	fn name(&self) -> &str;

	/// Layers provider parameters on the engine's base authorization parameters.
	///
	/// Keys the provider does not own, including the engine's `state`, must pass through
	/// unchanged.
	fn authorization_params(&self, base: AuthorizationParams) -> AuthorizationParams;

	/// Fetches the profile owned by `access_token`.
	fn user_profile<'a>(&'a self, access_token: &'a str) -> ProfileFuture<'a, Self::Profile>;
}

/// Application hook resolving exchanged tokens into an application user.
///
/// Any `Fn(GoogleTokenResponse) -> impl Future<Output = Result<U, BoxError>>` closure
/// implements the trait.
pub trait VerifyCallback<U>: Send + Sync {
	/// Resolves `tokens` into a user, or rejects the sign-in.
	fn verify(&self, tokens: GoogleTokenResponse) -> VerifyFuture<U>;
}
impl<U, F, Fut> VerifyCallback<U> for F
where
	U: 'static,
	F: Send + Sync + Fn(GoogleTokenResponse) -> Fut,
	Fut: 'static + Send + Future<Output = Result<U, BoxError>>,
{
	fn verify(&self, tokens: GoogleTokenResponse) -> VerifyFuture<U> {
		Box::pin(self(tokens))
	}
}

/// Google sign-in strategy.
///
/// Construction resolves every default, so the instance holds only immutable
/// configuration and can be shared across requests behind an `Arc`.
pub struct GoogleStrategy<U, C>
where
	C: ?Sized + ProfileHttpClient,
{
	name: String,
	client: GoogleClient,
	endpoints: GoogleEndpoints,
	scopes: ResolvedScopes,
	access_type: AccessType,
	include_granted_scopes: bool,
	prompt: Option<Prompt>,
	hd: Option<String>,
	login_hint: Option<String>,
	userinfo: UserInfoClient<C>,
	verify: Arc<dyn VerifyCallback<U>>,
}
impl<U, C> GoogleStrategy<U, C>
where
	C: ?Sized + ProfileHttpClient,
{
	/// Builds the strategy with a caller-provided profile transport.
	pub fn with_http_client(
		options: GoogleStrategyOptions,
		verify: impl 'static + VerifyCallback<U>,
		http_client: impl Into<Arc<C>>,
	) -> Result<Self> {
		let GoogleStrategyOptions {
			client_id,
			client_secret,
			redirect_uri,
			scopes,
			access_type,
			include_granted_scopes,
			prompt,
			hd,
			login_hint,
			endpoints,
		} = options;
		let endpoints = match endpoints {
			Some(endpoints) => {
				endpoints.validate()?;

				endpoints
			},
			None => GoogleEndpoints::google()?,
		};
		let redirect_url = RedirectUrl::new(redirect_uri)
			.map_err(|source| ConfigError::InvalidRedirect { source })?;
		let client = UnconfiguredGoogleClient::new(ClientId::new(client_id))
			.set_client_secret(ClientSecret::new(client_secret))
			.set_auth_uri(AuthUrl::from_url(endpoints.authorization.clone()))
			.set_token_uri(TokenUrl::from_url(endpoints.token.clone()))
			.set_redirect_uri(redirect_url);
		let userinfo = UserInfoClient::new(http_client, endpoints.userinfo.clone());

		Ok(Self {
			name: DEFAULT_STRATEGY_NAME.into(),
			client,
			endpoints,
			scopes: auth::parse_scopes(scopes),
			access_type: access_type.unwrap_or_default(),
			include_granted_scopes: include_granted_scopes.unwrap_or(false),
			prompt,
			hd,
			login_hint,
			userinfo,
			verify: Arc::new(verify),
		})
	}

	/// Overrides the registry name (defaults to [`DEFAULT_STRATEGY_NAME`]).
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();

		self
	}

	/// Engine client configured with Google's endpoints and the client credentials.
	///
	/// The engine uses it for the code exchange and refreshes.
	pub fn client(&self) -> &GoogleClient {
		&self.client
	}

	/// Endpoint set in use.
	pub fn endpoints(&self) -> &GoogleEndpoints {
		&self.endpoints
	}

	/// Resolved scopes requested on every authorization.
	pub fn scopes(&self) -> &[String] {
		&self.scopes
	}

	/// Resolved access type.
	pub fn access_type(&self) -> AccessType {
		self.access_type
	}

	/// Resolved incremental authorization flag.
	pub fn include_granted_scopes(&self) -> bool {
		self.include_granted_scopes
	}

	/// Configured prompt, if any.
	pub fn prompt(&self) -> Option<Prompt> {
		self.prompt
	}

	/// Configured hosted-domain restriction, if any.
	pub fn hd(&self) -> Option<&str> {
		self.hd.as_deref()
	}

	/// Configured login hint, if any.
	pub fn login_hint(&self) -> Option<&str> {
		self.login_hint.as_deref()
	}

	/// Userinfo client used by [`ProviderStrategy::user_profile`].
	pub fn userinfo(&self) -> &UserInfoClient<C> {
		&self.userinfo
	}

	/// Builds the authorization redirect URL for a caller-generated CSRF `state`.
	///
	/// The engine contributes `response_type`, `client_id`, `redirect_uri`, `scope`, and
	/// `state`; [`ProviderStrategy::authorization_params`] then adds Google's parameters.
	pub fn authorize_url(&self, state: CsrfToken) -> Url {
		const OPERATION: Operation = Operation::Authorize;

		let _span = OperationSpan::new(OPERATION, "authorize_url").entered();

		obs::record_outcome(OPERATION, Outcome::Attempt);

		let (mut url, _) = self
			.client
			.authorize_url(|| state)
			.add_scopes(self.scopes.iter().cloned().map(Scope::new))
			.url();
		let params = self.authorization_params(AuthorizationParams::from_query(&url));

		params.write_query(&mut url);
		obs::record_outcome(OPERATION, Outcome::Success);

		url
	}

	/// Forwards exchanged tokens to the application's verify callback.
	pub async fn verify(&self, tokens: GoogleTokenResponse) -> Result<U> {
		const OPERATION: Operation = Operation::Verify;

		let span = OperationSpan::new(OPERATION, "verify");

		obs::record_outcome(OPERATION, Outcome::Attempt);

		let result =
			span.instrument(self.verify.verify(tokens)).await.map_err(Error::verify);

		obs::record_result(OPERATION, &result);

		result
	}
}
#[cfg(feature = "reqwest")]
impl<U> GoogleStrategy<U, ReqwestHttpClient> {
	/// Builds the strategy with the default reqwest transport.
	pub fn new(
		options: GoogleStrategyOptions,
		verify: impl 'static + VerifyCallback<U>,
	) -> Result<Self> {
		Self::with_http_client(options, verify, ReqwestHttpClient::default())
	}
}
impl<U, C> ProviderStrategy for GoogleStrategy<U, C>
where
	C: ?Sized + ProfileHttpClient,
{
	type Profile = NormalizedProfile;

	fn name(&self) -> &str {
		&self.name
	}

	fn authorization_params(&self, base: AuthorizationParams) -> AuthorizationParams {
		let mut params = base;

		params.set(AuthorizationParams::ACCESS_TYPE, self.access_type.as_str());
		params.set(
			AuthorizationParams::INCLUDE_GRANTED_SCOPES,
			self.include_granted_scopes.to_string(),
		);

		if let Some(prompt) = self.prompt {
			params.set(AuthorizationParams::PROMPT, prompt.as_str());
		}
		if let Some(hd) = &self.hd {
			params.set(AuthorizationParams::HD, hd.as_str());
		}
		if let Some(login_hint) = &self.login_hint {
			params.set(AuthorizationParams::LOGIN_HINT, login_hint.as_str());
		}

		params
	}

	fn user_profile<'a>(&'a self, access_token: &'a str) -> ProfileFuture<'a, Self::Profile> {
		Box::pin(self.userinfo.fetch(access_token))
	}
}
impl<U, C> Debug for GoogleStrategy<U, C>
where
	C: ?Sized + ProfileHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("GoogleStrategy")
			.field("name", &self.name)
			.field("client_id", &self.client.client_id().as_str())
			.field("endpoints", &self.endpoints)
			.field("scopes", &self.scopes)
			.field("access_type", &self.access_type)
			.field("include_granted_scopes", &self.include_granted_scopes)
			.field("prompt", &self.prompt)
			.field("hd", &self.hd)
			.field("login_hint", &self.login_hint)
			.finish()
	}
}
