//! Request builders, the shared parameter surface, and the legacy parameter parser.

pub mod builder;
pub mod client_credential;
pub mod interactive;
pub mod params;
pub mod query;
pub mod silent;

pub use builder::*;
pub use client_credential::*;
pub use interactive::*;
pub use params::*;
pub use query::*;
pub use silent::*;
