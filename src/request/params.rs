//! Shared parameter surface accumulated by every request builder.

// self
use crate::{_prelude::*, auth::Account, error::BuilderError};

/// Accumulated facets of one token-acquisition request.
///
/// Created when a builder is instantiated, mutated only through the builder's configuration
/// operations, and consumed when the request executes; instances are never reused across
/// executions. Read access for executors goes through the accessor methods.
#[derive(Clone, Debug, Default)]
pub struct RequestParameters {
	pub(crate) scopes: Option<Vec<String>>,
	pub(crate) login_hint: Option<String>,
	pub(crate) account: Option<Arc<Account>>,
	pub(crate) extra_query_parameters: HashMap<String, String>,
	pub(crate) extra_scopes_to_consent: Option<Vec<String>>,
	pub(crate) authority_override: Option<String>,
}
impl RequestParameters {
	/// Requested scopes, if they have been configured.
	///
	/// `None` means the request kind never set them; an empty slice means they were set
	/// explicitly empty.
	pub fn scopes(&self) -> Option<&[String]> {
		self.scopes.as_deref()
	}

	/// Login hint used to pre-select a user.
	pub fn login_hint(&self) -> Option<&str> {
		self.login_hint.as_deref()
	}

	/// Account the request runs against.
	pub fn account(&self) -> Option<&Arc<Account>> {
		self.account.as_ref()
	}

	/// Extra query parameters appended to the authorization request.
	pub fn extra_query_parameters(&self) -> &HashMap<String, String> {
		&self.extra_query_parameters
	}

	/// Additional scopes submitted for consent alongside the requested set.
	pub fn extra_scopes_to_consent(&self) -> Option<&[String]> {
		self.extra_scopes_to_consent.as_deref()
	}

	/// Authority URI overriding the client default, stored verbatim.
	pub fn authority_override(&self) -> Option<&str> {
		self.authority_override.as_deref()
	}

	/// Fails when scopes were never configured.
	///
	/// An explicitly configured empty set passes; judging emptiness is left to the executor.
	/// Request kinds that extend validation run this check first.
	pub fn ensure_scopes(&self) -> Result<(), BuilderError> {
		if self.scopes.is_none() {
			return Err(BuilderError::MissingScopes);
		}

		Ok(())
	}
}
