//! Interactive token request construction.

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

/// Prompt behaviors an interactive request may demand from the provider UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prompt {
	/// Always show the account picker.
	#[default]
	SelectAccount,
	/// Force a fresh credential entry even when a session exists.
	Login,
	/// Force the consent dialog even when consent is on record.
	Consent,
	/// Never show UI; the executor fails if interaction would be required.
	NoPrompt,
}
impl Prompt {
	/// Returns the wire label submitted to the authorization endpoint.
	pub const fn as_str(self) -> &'static str {
		match self {
			Prompt::SelectAccount => "select_account",
			Prompt::Login => "login",
			Prompt::Consent => "consent",
			Prompt::NoPrompt => "none",
		}
	}
}
impl Display for Prompt {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Finalized parameters handed to [`TokenExecutor::acquire_interactive`].
#[derive(Clone, Debug)]
pub struct InteractiveParameters {
	/// Shared request facets accumulated by the builder.
	pub common: RequestParameters,
	/// Prompt behavior requested from the provider UI.
	pub prompt: Prompt,
}

/// Builder for requests that sign the user in through provider UI.
pub struct AcquireTokenInteractive {
	executor: Arc<dyn TokenExecutor>,
	parameters: RequestParameters,
	prompt: Prompt,
}
impl AcquireTokenInteractive {
	/// Creates an interactive request for the provided scopes.
	pub fn new<I, S>(executor: Arc<dyn TokenExecutor>, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { executor, parameters: RequestParameters::default(), prompt: Prompt::default() }
			.with_scopes(scopes)
	}

	/// Overrides the prompt behavior (defaults to [`Prompt::SelectAccount`]).
	pub fn with_prompt(mut self, prompt: Prompt) -> Self {
		self.prompt = prompt;

		self
	}
}
impl BuilderInternal for AcquireTokenInteractive {
	fn parameters(&self) -> &RequestParameters {
		&self.parameters
	}

	fn parameters_mut(&mut self) -> &mut RequestParameters {
		&mut self.parameters
	}
}
impl AcquireTokenBuilder for AcquireTokenInteractive {
	fn execute(self, cancel: CancellationToken) -> ExecuteFuture {
		const KIND: RequestKind = RequestKind::Interactive;

		let span = RequestSpan::new(KIND, "execute");

		obs::record_request_outcome(KIND, RequestOutcome::Attempt);

		Box::pin(async move {
			let result = span
				.instrument(async move {
					self.validate()?;

					let Self { executor, parameters, prompt } = self;

					executor
						.acquire_interactive(
							InteractiveParameters { common: parameters, prompt },
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
impl Debug for AcquireTokenInteractive {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AcquireTokenInteractive")
			.field("parameters", &self.parameters)
			.field("prompt", &self.prompt)
			.finish()
	}
}
