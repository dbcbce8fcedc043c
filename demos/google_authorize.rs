//! Configures the Google strategy from JSON and prints the sign-in redirect a host
//! application would send its user to.

// std
use std::collections::HashMap;
// crates.io
use color_eyre::Result;
use oauth2::CsrfToken;
// self
use oauth2_google::{
	auth::{AuthorizationParams, GoogleTokenResponse},
	error::BoxError,
	provider::{GoogleStrategy, GoogleStrategyOptions, ProviderStrategy},
};

const CONFIG: &str = r#"{
	"client_id": "demo-client.apps.googleusercontent.com",
	"client_secret": "demo-secret",
	"redirect_uri": "https://app.example.com/auth/google/callback",
	"access_type": "offline",
	"prompt": "consent",
	"hd": "example.com"
}"#;

fn main() -> Result<()> {
	color_eyre::install()?;

	let options: GoogleStrategyOptions = serde_json::from_str(CONFIG)?;
	let strategy = GoogleStrategy::new(options, |tokens: GoogleTokenResponse| async move {
		Ok::<_, BoxError>(tokens.extra_fields().id_token.clone())
	})?;

	println!("Registered strategy `{}` with scopes {:?}.", strategy.name(), strategy.scopes());

	let state = CsrfToken::new_random();
	let url = strategy.authorize_url(state.clone());

	println!("Send your user to {url}.");

	let mut pending: HashMap<String, CsrfToken> = HashMap::new();

	pending.insert(state.secret().clone(), state);

	// Simulate the callback handler matching the returned `state`.
	let returned = AuthorizationParams::from_query(&url);

	match returned.get("state").and_then(|state| pending.remove(state)) {
		Some(state) => {
			println!("Validated state {}.", state.secret());
			println!("Exchange the returned code with `strategy.client().exchange_code(..)`.");
		},
		None => eprintln!("The returned state was not recognized."),
	}

	Ok(())
}
