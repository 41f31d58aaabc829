//! Authentication results produced by execution collaborators.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Account},
};

/// Errors produced by [`AuthenticationResultBuilder`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum AuthenticationResultBuilderError {
	/// Issued when no access token value was provided.
	#[error("Access token is required.")]
	MissingAccessToken,
	/// Issued when no expiry (absolute or relative) was configured.
	#[error("Expiry must be supplied via expires_on or expires_in.")]
	MissingExpiry,
}

/// Outcome of a successful token exchange.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthenticationResult {
	/// Issued access token; callers must avoid logging it.
	pub access_token: AccessToken,
	/// Token type reported by the provider, normally `Bearer`.
	pub token_type: String,
	/// Expiry instant for the access token.
	pub expires_on: OffsetDateTime,
	/// Scopes the provider actually granted, which may differ from the requested set.
	pub granted_scopes: Vec<String>,
	/// Account the token was issued for, when the provider reported one.
	pub account: Option<Account>,
	/// Correlation identifier tying the result to provider-side logs.
	pub correlation_id: Option<String>,
}
impl AuthenticationResult {
	/// Returns a builder for assembling results on the executor side.
	pub fn builder() -> AuthenticationResultBuilder {
		AuthenticationResultBuilder::new()
	}

	/// Returns `true` if the token has expired at the provided instant.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		instant >= self.expires_on
	}

	/// Returns `true` if the token is expired relative to the current clock.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}
}
impl Debug for AuthenticationResult {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthenticationResult")
			.field("access_token", &"<redacted>")
			.field("token_type", &self.token_type)
			.field("expires_on", &self.expires_on)
			.field("granted_scopes", &self.granted_scopes)
			.field("account", &self.account)
			.field("correlation_id", &self.correlation_id)
			.finish()
	}
}

/// Builder for [`AuthenticationResult`].
#[derive(Clone, Debug, Default)]
pub struct AuthenticationResultBuilder {
	access_token: Option<AccessToken>,
	token_type: Option<String>,
	expires_on: Option<OffsetDateTime>,
	expires_in: Option<Duration>,
	granted_scopes: Vec<String>,
	account: Option<Account>,
	correlation_id: Option<String>,
}
impl AuthenticationResultBuilder {
	fn new() -> Self {
		Self::default()
	}

	/// Provides the access token value.
	pub fn access_token(mut self, token: impl Into<String>) -> Self {
		self.access_token = Some(AccessToken::new(token));

		self
	}

	/// Overrides the token type (defaults to `Bearer`).
	pub fn token_type(mut self, token_type: impl Into<String>) -> Self {
		self.token_type = Some(token_type.into());

		self
	}

	/// Sets an absolute expiry instant.
	pub fn expires_on(mut self, instant: OffsetDateTime) -> Self {
		self.expires_on = Some(instant);

		self
	}

	/// Sets a relative expiry duration, resolved against the clock when the result is built.
	pub fn expires_in(mut self, duration: Duration) -> Self {
		self.expires_in = Some(duration);

		self
	}

	/// Records the scopes the provider granted.
	pub fn granted_scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.granted_scopes = scopes.into_iter().map(Into::into).collect();

		self
	}

	/// Attaches the account the token was issued for.
	pub fn account(mut self, account: Account) -> Self {
		self.account = Some(account);

		self
	}

	/// Attaches the provider-side correlation identifier.
	pub fn correlation_id(mut self, id: impl Into<String>) -> Self {
		self.correlation_id = Some(id.into());

		self
	}

	/// Consumes the builder and produces an [`AuthenticationResult`].
	pub fn build(self) -> Result<AuthenticationResult, AuthenticationResultBuilderError> {
		let access_token =
			self.access_token.ok_or(AuthenticationResultBuilderError::MissingAccessToken)?;
		let expires_on = match (self.expires_on, self.expires_in) {
			(Some(instant), _) => instant,
			(None, Some(delta)) => OffsetDateTime::now_utc() + delta,
			(None, None) => return Err(AuthenticationResultBuilderError::MissingExpiry),
		};

		Ok(AuthenticationResult {
			access_token,
			token_type: self.token_type.unwrap_or_else(|| "Bearer".into()),
			expires_on,
			granted_scopes: self.granted_scopes,
			account: self.account,
			correlation_id: self.correlation_id,
		})
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn builder_requires_access_token_and_expiry() {
		let err = AuthenticationResult::builder()
			.expires_in(Duration::minutes(5))
			.build()
			.expect_err("Builder should reject a missing access token.");

		assert_eq!(err, AuthenticationResultBuilderError::MissingAccessToken);

		let err = AuthenticationResult::builder()
			.access_token("token")
			.build()
			.expect_err("Builder should reject a missing expiry.");

		assert_eq!(err, AuthenticationResultBuilderError::MissingExpiry);
	}

	#[test]
	fn absolute_expiry_wins_over_relative() {
		let instant = macros::datetime!(2025-06-01 12:00 UTC);
		let result = AuthenticationResult::builder()
			.access_token("token")
			.expires_on(instant)
			.expires_in(Duration::hours(8))
			.build()
			.expect("Result builder should succeed with an absolute expiry.");

		assert_eq!(result.expires_on, instant);
		assert_eq!(result.token_type, "Bearer");
		assert!(result.is_expired_at(instant));
		assert!(!result.is_expired_at(instant - Duration::seconds(1)));
	}

	#[test]
	fn debug_redacts_the_access_token() {
		let result = AuthenticationResult::builder()
			.access_token("ey.super-secret")
			.expires_in(Duration::minutes(30))
			.granted_scopes(["email"])
			.build()
			.expect("Result builder should succeed for the redaction test.");
		let rendered = format!("{result:?}");

		assert!(rendered.contains("<redacted>"));
		assert!(!rendered.contains("ey.super-secret"));
	}
}
