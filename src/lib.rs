//! Google identity for generic OAuth 2.0 engines: fixed endpoints, default scopes, Google's
//! extra authorization parameters, and userinfo profiles normalized into a provider-neutral
//! shape.
//!
//! The crate does not run the authorization-code flow itself. It configures an
//! [`oauth2`] client with Google's endpoints and exposes [`provider::ProviderStrategy`], the
//! hook an engine calls while building the redirect URL and after the code exchange.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod http;
pub mod obs;
pub mod profile;
pub mod provider;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
