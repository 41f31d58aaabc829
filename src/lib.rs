//! Fluent token-acquisition requests for identity clients—chain per-kind builders, fail
//! malformed parameters before the wire, and hand the finished request to any async executor.

#![deny(clippy::all, missing_docs)]

pub mod auth;
pub mod error;
pub mod exec;
pub mod obs;
pub mod request;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and recording doubles for integration tests; enabled via
	//! `cfg(test)` or the `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::{Account, AuthenticationResult},
		exec::{ExecutorFuture, TokenExecutor},
		request::{ClientCredentialParameters, InteractiveParameters, SilentParameters},
	};

	/// Request captured by [`RecordingExecutor`] for post-run assertions.
	#[derive(Clone, Debug)]
	pub enum RecordedRequest {
		/// Captured silent request.
		Silent(SilentParameters),
		/// Captured interactive request.
		Interactive(InteractiveParameters),
		/// Captured client credential request.
		ClientCredential(ClientCredentialParameters),
	}

	/// Executor double that records what it receives and replies with a queued outcome.
	///
	/// Each acquire method stores the finalized parameters and the forwarded cancellation
	/// token, then returns the queued reply (or a stock success when none was queued).
	#[derive(Default)]
	pub struct RecordingExecutor {
		/// Most recently captured request, if any.
		pub request: Mutex<Option<RecordedRequest>>,
		/// Cancellation token observed by the most recent call.
		pub cancellation: Mutex<Option<CancellationToken>>,
		/// Outcome handed back to the next caller; consumed on use.
		pub reply: Mutex<Option<Result<AuthenticationResult>>>,
	}
	impl RecordingExecutor {
		fn respond(
			&self,
			request: RecordedRequest,
			cancel: CancellationToken,
		) -> Result<AuthenticationResult> {
			*self.request.lock() = Some(request);
			*self.cancellation.lock() = Some(cancel);

			self.reply.lock().take().unwrap_or_else(|| Ok(test_result()))
		}
	}
	impl TokenExecutor for RecordingExecutor {
		fn acquire_silent(
			&self,
			parameters: SilentParameters,
			cancel: CancellationToken,
		) -> ExecutorFuture<'_> {
			Box::pin(async move { self.respond(RecordedRequest::Silent(parameters), cancel) })
		}

		fn acquire_interactive(
			&self,
			parameters: InteractiveParameters,
			cancel: CancellationToken,
		) -> ExecutorFuture<'_> {
			Box::pin(async move { self.respond(RecordedRequest::Interactive(parameters), cancel) })
		}

		fn acquire_by_client_credential(
			&self,
			parameters: ClientCredentialParameters,
			cancel: CancellationToken,
		) -> ExecutorFuture<'_> {
			Box::pin(
				async move { self.respond(RecordedRequest::ClientCredential(parameters), cancel) },
			)
		}
	}

	/// Builds the account fixture shared by integration tests.
	pub fn test_account() -> Account {
		Account::new("user@contoso.example", "login.contoso.example", "uid.utid")
	}

	/// Builds the stock successful result returned by recording doubles.
	pub fn test_result() -> AuthenticationResult {
		AuthenticationResult::builder()
			.access_token("test-access-token")
			.expires_in(Duration::minutes(30))
			.build()
			.expect("Stock test result should build successfully.")
	}
}

mod _prelude {
	pub use std::{
		collections::HashMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(any(test, feature = "test"))] pub use parking_lot::Mutex;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use tokio_util::sync::CancellationToken;

	pub use crate::error::{Error, Result};
}

pub use tokio_util;
