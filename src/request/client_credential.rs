//! Client-credential (service-to-service) token request construction.

// self
use crate::{
	_prelude::*,
	exec::TokenExecutor,
	obs::{self, RequestKind, RequestOutcome, RequestSpan},
	request::{
		builder::{AcquireTokenBuilder, ExecuteFuture, sealed::BuilderInternal},
		params::RequestParameters,
	},
};

/// Finalized parameters handed to [`TokenExecutor::acquire_by_client_credential`].
#[derive(Clone, Debug)]
pub struct ClientCredentialParameters {
	/// Shared request facets accumulated by the builder.
	pub common: RequestParameters,
	/// Forces the executor to bypass any cached token it holds.
	pub force_refresh: bool,
}

/// Builder for application requests authenticated by the client's own credentials.
///
/// There is no user in this flow; the executor authenticates the application itself, so only
/// the base scope validation applies.
pub struct AcquireTokenByClientCredential {
	executor: Arc<dyn TokenExecutor>,
	parameters: RequestParameters,
	force_refresh: bool,
}
impl AcquireTokenByClientCredential {
	/// Creates a client-credential request for the provided scopes.
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
impl BuilderInternal for AcquireTokenByClientCredential {
	fn parameters(&self) -> &RequestParameters {
		&self.parameters
	}

	fn parameters_mut(&mut self) -> &mut RequestParameters {
		&mut self.parameters
	}
}
impl AcquireTokenBuilder for AcquireTokenByClientCredential {
	fn execute(self, cancel: CancellationToken) -> ExecuteFuture {
		const KIND: RequestKind = RequestKind::ClientCredential;

		let span = RequestSpan::new(KIND, "execute");

		obs::record_request_outcome(KIND, RequestOutcome::Attempt);

		Box::pin(async move {
			let result = span
				.instrument(async move {
					self.validate()?;

					let Self { executor, parameters, force_refresh } = self;

					executor
						.acquire_by_client_credential(
							ClientCredentialParameters { common: parameters, force_refresh },
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
impl Debug for AcquireTokenByClientCredential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AcquireTokenByClientCredential")
			.field("parameters", &self.parameters)
			.field("force_refresh", &self.force_refresh)
			.finish()
	}
}
