//! Provider-facing endpoints (data), options (configuration), and strategies (behavior).
//!
//! `descriptor` exposes Google's HTTPS-only endpoint set. `options` is the configuration
//! surface applications fill in. `strategy` defines [`ProviderStrategy`], the hook an OAuth
//! engine calls while building the authorization redirect and after the code exchange, and
//! implements it for Google.

pub mod descriptor;
pub mod options;
pub mod strategy;

pub use descriptor::*;
pub use options::*;
pub use strategy::*;
