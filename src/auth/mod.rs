//! Credential lifecycle: login, expiry tracking and transparent refresh.
//!
//! [`TokenCredential`] is the single owner of the bearer token used by all
//! outbound calls. It is created by performing the login call, shared by
//! reference (`Arc`) between the owning client and the dispatcher, and
//! mutated only by [`TokenCredential::refresh`].

mod credential;
mod token;

pub use credential::{CredentialBuilder, TokenCredential};
pub use token::AccessToken;
