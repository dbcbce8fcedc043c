//! Google's authorization request parameters.

// std
use std::collections::btree_map::Iter;
// self
use crate::_prelude::*;

/// Whether Google should issue a refresh token alongside the access token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessType {
	#[default]
	/// Access token only.
	Online,
	/// Access token plus a refresh token for use while the user is away.
	Offline,
}
impl AccessType {
	/// Returns the `access_type` wire value.
	pub const fn as_str(self) -> &'static str {
		match self {
			AccessType::Online => "online",
			AccessType::Offline => "offline",
		}
	}
}
impl Display for AccessType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Consent or account-chooser UI that Google should force.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prompt {
	/// Never show UI; fails if the user is not already signed in and consented.
	None,
	/// Always show the consent screen.
	Consent,
	/// Always show the account chooser.
	SelectAccount,
}
impl Prompt {
	/// Returns the `prompt` wire value.
	pub const fn as_str(self) -> &'static str {
		match self {
			Prompt::None => "none",
			Prompt::Consent => "consent",
			Prompt::SelectAccount => "select_account",
		}
	}
}
impl Display for Prompt {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Query parameters of a single authorization request.
///
/// Keys are unique; setting an existing key replaces its value. The engine seeds the map
/// with `response_type`, `client_id`, `redirect_uri`, `scope`, and `state`, and the strategy
/// layers Google's parameters on top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorizationParams(BTreeMap<String, String>);
impl AuthorizationParams {
	/// Google's offline-access switch.
	pub const ACCESS_TYPE: &'static str = "access_type";
	/// Hosted (Workspace) domain restriction.
	pub const HD: &'static str = "hd";
	/// Incremental authorization flag.
	pub const INCLUDE_GRANTED_SCOPES: &'static str = "include_granted_scopes";
	/// Account chooser pre-fill.
	pub const LOGIN_HINT: &'static str = "login_hint";
	/// Forced consent/account-chooser UI.
	pub const PROMPT: &'static str = "prompt";

	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Collects the query pairs of `url`; later duplicates win.
	pub fn from_query(url: &Url) -> Self {
		url.query_pairs().into_owned().collect()
	}

	/// Sets `key` to `value`, returning the previous value.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.0.insert(key.into(), value.into())
	}

	/// Returns the value stored for `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Returns true when `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Removes `key`, returning its value.
	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.0.remove(key)
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no parameters are set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterator over `(key, value)` pairs in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Replaces the query of `url` with these parameters.
	pub fn write_query(&self, url: &mut Url) {
		url.set_query(None);

		if self.is_empty() {
			return;
		}

		url.query_pairs_mut().extend_pairs(self.0.iter());
	}
}
impl<K, V> FromIterator<(K, V)> for AuthorizationParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}
impl<'a> IntoIterator for &'a AuthorizationParams {
	type IntoIter = Iter<'a, String, String>;
	type Item = (&'a String, &'a String);

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
impl From<AuthorizationParams> for BTreeMap<String, String> {
	fn from(value: AuthorizationParams) -> Self {
		value.0
	}
}
