//! Google scopes, authorization parameters, and token response models.

pub mod params;
pub mod scope;
pub mod token;

pub use params::*;
pub use scope::*;
pub use token::*;
