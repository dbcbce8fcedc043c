//! Scope defaults and resolution helpers.
//!
//! Google accepts scopes as a single space-delimited `scope` parameter. Callers pass an
//! ordered list; the list is forwarded verbatim, so entries are neither deduplicated nor
//! trimmed. When no scopes are supplied the strategy requests OpenID Connect sign-in with
//! the profile and email userinfo scopes.
//!
//! See <https://developers.google.com/identity/protocols/oauth2/scopes>.

/// Separator used to join scopes into the `scope` query parameter.
pub const SCOPE_SEPARATOR: &str = " ";

/// Space-joined scopes requested when the caller supplies none.
pub const DEFAULT_SCOPES: &str =
	"openid https://www.googleapis.com/auth/userinfo.profile https://www.googleapis.com/auth/userinfo.email";

/// Ordered scope list handed to the engine.
pub type ResolvedScopes = Vec<String>;

/// Resolves the caller's scopes, falling back to [`DEFAULT_SCOPES`].
///
/// Absent or empty input yields a single-element list holding [`DEFAULT_SCOPES`]; any other
/// input is returned unchanged.
pub fn parse_scopes(scopes: Option<Vec<String>>) -> ResolvedScopes {
	match scopes {
		Some(scopes) if !scopes.is_empty() => scopes,
		_ => vec![DEFAULT_SCOPES.to_owned()],
	}
}

/// Joins scopes with [`SCOPE_SEPARATOR`].
pub fn stringify_scopes(scopes: &[String]) -> String {
	scopes.join(SCOPE_SEPARATOR)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn default_scope_string_is_stable() {
		assert_eq!(
			DEFAULT_SCOPES,
			"openid https://www.googleapis.com/auth/userinfo.profile https://www.googleapis.com/auth/userinfo.email"
		);
	}

	#[test]
	fn absent_or_empty_scopes_fall_back_to_default() {
		assert_eq!(parse_scopes(None), vec![DEFAULT_SCOPES.to_owned()]);
		assert_eq!(parse_scopes(Some(Vec::new())), vec![DEFAULT_SCOPES.to_owned()]);
	}

	#[test]
	fn supplied_scopes_pass_through_verbatim() {
		let inputs = [
			vec!["email".to_owned()],
			vec!["email".to_owned(), "email".to_owned()],
			vec![" Profile ".to_owned(), "openid".to_owned()],
			vec![String::new()],
		];

		for input in inputs {
			assert_eq!(parse_scopes(Some(input.clone())), input);
		}
	}

	#[test]
	fn scopes_join_with_single_space() {
		let scopes = vec!["openid".to_owned(), "email".to_owned()];

		assert_eq!(stringify_scopes(&scopes), "openid email");
		assert_eq!(stringify_scopes(&parse_scopes(None)), DEFAULT_SCOPES);
		assert_eq!(stringify_scopes(&[]), "");
		assert_eq!(stringify_scopes(&[" a ".to_owned(), "a".to_owned()]), " a  a");
	}
}
