//! Error types shared across builders, the legacy parameter parser, and executors.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Request validation failure.
	#[error(transparent)]
	Builder(#[from] BuilderError),
	/// Legacy parameter string could not be parsed.
	#[error(transparent)]
	Query(#[from] QueryParseError),
	/// Failure raised by the execution collaborator.
	#[error(transparent)]
	Execution(#[from] ExecutionError),
}

/// Validation failures raised synchronously, before any executor work starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum BuilderError {
	/// Scopes were never configured on the builder.
	#[error("Scopes must be configured before the request can execute.")]
	MissingScopes,
	/// Silent requests need a way to locate the cached identity.
	#[error("Silent requests require an account or a login hint.")]
	MissingAccountSelector,
}

/// Failures raised by the legacy `key=value` parameter parser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum QueryParseError {
	/// Segment lacks the `=` separator between key and value.
	#[error("Query parameter segment `{segment}` is missing the `=` delimiter.")]
	MissingDelimiter {
		/// Offending segment as it appeared in the input.
		segment: String,
	},
	/// Segment starts with `=` and therefore carries no key.
	#[error("Query parameter segment `{segment}` has an empty key.")]
	EmptyKey {
		/// Offending segment as it appeared in the input.
		segment: String,
	},
	/// The same key appeared more than once after decoding.
	#[error("Query parameter key `{key}` appears more than once.")]
	DuplicateKey {
		/// Decoded key that repeated.
		key: String,
	},
	/// Percent-decoding produced bytes that are not valid UTF-8.
	#[error("Query parameter segment `{segment}` does not decode to valid UTF-8.")]
	InvalidEncoding {
		/// Offending segment as it appeared in the input.
		segment: String,
	},
}

/// Failures surfaced by execution collaborators, propagated to callers verbatim.
#[derive(Debug, ThisError)]
pub enum ExecutionError {
	/// The caller triggered the cancellation token before a token was issued.
	#[error("Request was cancelled before a token could be issued.")]
	Cancelled,
	/// The identity provider refused the request.
	#[error("Identity provider rejected the request: {reason}.")]
	Rejected {
		/// Provider- or executor-supplied reason string.
		reason: String,
	},
	/// The transport layer failed before a provider answer arrived.
	#[error("Transport failure occurred during the token exchange.")]
	Transport {
		/// Transport-specific failure.
		#[source]
		source: BoxError,
	},
}
impl ExecutionError {
	/// Wraps a transport-specific failure inside [`ExecutionError`].
	pub fn transport(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Transport { source: Box::new(src) }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn messages_name_the_offending_input() {
		let err = QueryParseError::DuplicateKey { key: "client_id".into() };

		assert_eq!(err.to_string(), "Query parameter key `client_id` appears more than once.");

		let err = BuilderError::MissingScopes;

		assert_eq!(err.to_string(), "Scopes must be configured before the request can execute.");
	}

	#[test]
	fn transport_helper_preserves_the_source() {
		let io = std::io::Error::other("connection reset");
		let err = ExecutionError::transport(io);

		assert!(matches!(err, ExecutionError::Transport { .. }));
		assert!(std::error::Error::source(&err).is_some());
	}
}
