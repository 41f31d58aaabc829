//! Execution boundary between finalized requests and the token exchange.
//!
//! The module exposes [`TokenExecutor`], the builders' only dependency on the token protocol.
//! Builders validate, then call the method matching their request kind with the finalized
//! parameters and the caller's [`CancellationToken`] — forwarded unchanged, never replaced or
//! re-derived. Everything behind the trait (token caches, endpoint discovery, the network
//! exchange itself) is the implementation's concern.

// self
use crate::{
	_prelude::*,
	auth::AuthenticationResult,
	request::{ClientCredentialParameters, InteractiveParameters, SilentParameters},
};

pub use tokio_util::sync::CancellationToken;

/// Boxed future returned by [`TokenExecutor`] implementations.
pub type ExecutorFuture<'a> =
	Pin<Box<dyn Future<Output = Result<AuthenticationResult>> + 'a + Send>>;

/// Performs the authentication exchange for finalized requests.
///
/// Implementations must be `Send + Sync + 'static` so a single executor (typically behind
/// `Arc<dyn TokenExecutor>`) can serve every builder the client hands out.
///
/// # Cancellation Contract
///
/// The forwarded token must be honored cooperatively: check it between protocol steps and
/// abandon work once it fires, surfacing [`ExecutionError::Cancelled`]. Builders never poll
/// the token themselves.
///
/// # Failure Contract
///
/// Errors returned here reach the caller verbatim; the builder layer neither retries nor
/// wraps them.
///
/// [`ExecutionError::Cancelled`]: crate::error::ExecutionError::Cancelled
pub trait TokenExecutor
where
	Self: 'static + Send + Sync,
{
	/// Acquires a token from cached or renewable credentials, without user interaction.
	fn acquire_silent(
		&self,
		parameters: SilentParameters,
		cancel: CancellationToken,
	) -> ExecutorFuture<'_>;

	/// Acquires a token through an interactive sign-in, surfacing provider UI as needed.
	fn acquire_interactive(
		&self,
		parameters: InteractiveParameters,
		cancel: CancellationToken,
	) -> ExecutorFuture<'_>;

	/// Acquires an application token authenticated by the client's own credentials.
	fn acquire_by_client_credential(
		&self,
		parameters: ClientCredentialParameters,
		cancel: CancellationToken,
	) -> ExecutorFuture<'_>;
}
