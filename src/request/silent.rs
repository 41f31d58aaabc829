//! Silent (cache-backed) token request construction.

// self
use crate::{
	_prelude::*,
	error::BuilderError,
	exec::TokenExecutor,
	obs::{self, RequestKind, RequestOutcome, RequestSpan},
	request::{
		builder::{AcquireTokenBuilder, ExecuteFuture, sealed::BuilderInternal},
		params::RequestParameters,
	},
};

/// Finalized parameters handed to [`TokenExecutor::acquire_silent`].
#[derive(Clone, Debug)]
pub struct SilentParameters {
	/// Shared request facets accumulated by the builder.
	pub common: RequestParameters,
	/// Forces the executor to bypass any cached token it holds.
	pub force_refresh: bool,
}

/// Builder for requests answered from cached or renewable credentials, without user
/// interaction.
///
/// Silent requests must be able to locate the cached identity, so validation requires an
/// account or a login hint on top of the base scope check.
pub struct AcquireTokenSilent {
	executor: Arc<dyn TokenExecutor>,
	parameters: RequestParameters,
	force_refresh: bool,
}
impl AcquireTokenSilent {
	/// Creates a silent request for the provided scopes.
	///
	/// Chain [`with_account`](AcquireTokenBuilder::with_account) or
	/// [`with_login_hint`](AcquireTokenBuilder::with_login_hint) before executing.
	pub fn new<I, S>(executor: Arc<dyn TokenExecutor>, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { executor, parameters: RequestParameters::default(), force_refresh: false }
			.with_scopes(scopes)
	}

	/// Overrides the force-refresh flag; `true` bypasses executor-side caches.
	pub fn force_refresh(mut self, force: bool) -> Self {
		self.force_refresh = force;

		self
	}
}
impl BuilderInternal for AcquireTokenSilent {
	fn parameters(&self) -> &RequestParameters {
		&self.parameters
	}

	fn parameters_mut(&mut self) -> &mut RequestParameters {
		&mut self.parameters
	}
}
impl AcquireTokenBuilder for AcquireTokenSilent {
	fn validate(&self) -> Result<(), BuilderError> {
		self.parameters.ensure_scopes()?;

		if self.parameters.account.is_none() && self.parameters.login_hint.is_none() {
			return Err(BuilderError::MissingAccountSelector);
		}

		Ok(())
	}

	fn execute(self, cancel: CancellationToken) -> ExecuteFuture {
		const KIND: RequestKind = RequestKind::Silent;

		let span = RequestSpan::new(KIND, "execute");

		obs::record_request_outcome(KIND, RequestOutcome::Attempt);

		Box::pin(async move {
			let result = span
				.instrument(async move {
					self.validate()?;

					let Self { executor, parameters, force_refresh } = self;

					executor
						.acquire_silent(
							SilentParameters { common: parameters, force_refresh },
							cancel,
						)
						.await
				})
				.await;

			match &result {
				Ok(_) => obs::record_request_outcome(KIND, RequestOutcome::Success),
				Err(_) => obs::record_request_outcome(KIND, RequestOutcome::Failure),
			}

			result
		})
	}
}
impl Debug for AcquireTokenSilent {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AcquireTokenSilent")
			.field("parameters", &self.parameters)
			.field("force_refresh", &self.force_refresh)
			.finish()
	}
}
