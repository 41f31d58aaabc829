//! Shared fluent configuration surface implemented by every request builder.

// self
use crate::{
	_prelude::*,
	auth::{Account, AuthenticationResult},
	error::{BuilderError, QueryParseError},
	request::{params::RequestParameters, query},
};

/// Boxed future returned by [`AcquireTokenBuilder::execute`].
pub type ExecuteFuture = Pin<Box<dyn Future<Output = Result<AuthenticationResult>> + Send>>;

pub(crate) mod sealed {
	// self
	use crate::request::params::RequestParameters;

	/// Crate-internal builder plumbing: parameter access and the scope setter.
	///
	/// The trait lives in a non-exported module so downstream code can neither implement
	/// [`AcquireTokenBuilder`](super::AcquireTokenBuilder) nor set scopes on a builder it did
	/// not construct; each request kind decides its own scope policy.
	pub trait BuilderInternal {
		/// Read access to the accumulated parameters.
		fn parameters(&self) -> &RequestParameters;

		/// Mutable access to the accumulated parameters.
		fn parameters_mut(&mut self) -> &mut RequestParameters;

		/// Overwrites the requested scopes.
		fn with_scopes<I, S>(mut self, scopes: I) -> Self
		where
			Self: Sized,
			I: IntoIterator<Item = S>,
			S: Into<String>,
		{
			self.parameters_mut().scopes = Some(scopes.into_iter().map(Into::into).collect());

			self
		}
	}
}

/// Shared fluent configuration surface for token-acquisition request builders.
///
/// Every provided method consumes and returns the concrete builder, so chains keep
/// kind-specific operations available after shared ones and no call ever allocates a new
/// builder. Configuration is synchronous and single-threaded; each builder owns an
/// independent [`RequestParameters`] until [`execute`](Self::execute) consumes it.
pub trait AcquireTokenBuilder
where
	Self: sealed::BuilderInternal + Sized,
{
	/// Overwrites the login hint used to pre-select a user.
	fn with_login_hint(mut self, hint: impl Into<String>) -> Self {
		self.parameters_mut().login_hint = Some(hint.into());

		self
	}

	/// Overwrites the account the request should run against.
	///
	/// The account stays externally owned; the builder holds a shared reference and never
	/// mutates it.
	fn with_account(mut self, account: Arc<Account>) -> Self {
		self.parameters_mut().account = Some(account);

		self
	}

	/// Overwrites the extra query parameters wholesale.
	///
	/// Passing `None` resets to an empty map; entries from earlier calls are never merged in.
	fn with_extra_query_parameters(
		mut self,
		parameters: impl Into<Option<HashMap<String, String>>>,
	) -> Self {
		self.parameters_mut().extra_query_parameters = parameters.into().unwrap_or_default();

		self
	}

	/// Parses a legacy `key=value&key=value` string and delegates to
	/// [`with_extra_query_parameters`](Self::with_extra_query_parameters).
	///
	/// Retained for callers migrating off the string-based surface; new code should build the
	/// map directly. The parse is all-or-nothing: nothing is applied unless the whole string
	/// parses. See [`query::parse_key_value_list`] for the decoding and duplicate policies.
	fn with_extra_query_string(self, encoded: &str) -> Result<Self, QueryParseError> {
		Ok(self.with_extra_query_parameters(query::parse_key_value_list(encoded)?))
	}

	/// Overwrites the additional scopes submitted for consent alongside the requested set.
	fn with_extra_scopes_to_consent<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.parameters_mut().extra_scopes_to_consent =
			Some(scopes.into_iter().map(Into::into).collect());

		self
	}

	/// Overwrites the issuing authority for this request only.
	///
	/// The URI is stored verbatim; well-formedness is judged by the executor, not here.
	fn with_authority_override(mut self, authority: impl Into<String>) -> Self {
		self.parameters_mut().authority_override = Some(authority.into());

		self
	}

	/// Checks that the accumulated parameters can be executed.
	///
	/// The base check fails when scopes were never configured. Request kinds with extra
	/// required fields override this and run [`RequestParameters::ensure_scopes`] first.
	fn validate(&self) -> Result<(), BuilderError> {
		self.parameters().ensure_scopes()
	}

	/// Validates the request, then hands it to the execution collaborator together with the
	/// caller's cancellation token.
	///
	/// Validation failures surface from the returned future before any collaborator work
	/// starts; collaborator failures are propagated verbatim.
	fn execute(self, cancel: CancellationToken) -> ExecuteFuture;
}
