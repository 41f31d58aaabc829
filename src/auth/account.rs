//! Externally-owned account references passed through requests unmodified.

// self
use crate::_prelude::*;

/// Previously authenticated identity reusable across requests.
///
/// The builder layer stores the reference it is given and never mutates it; resolving or
/// refreshing account state is the executor's concern.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
	/// Displayable user principal name, usually email-shaped.
	pub username: String,
	/// Identity-provider host the account was issued by.
	pub environment: String,
	/// Stable identifier for the account across this client.
	pub home_account_id: String,
}
impl Account {
	/// Creates a new account reference.
	pub fn new(
		username: impl Into<String>,
		environment: impl Into<String>,
		home_account_id: impl Into<String>,
	) -> Self {
		Self {
			username: username.into(),
			environment: environment.into(),
			home_account_id: home_account_id.into(),
		}
	}
}
impl Display for Account {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.username)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn display_shows_the_username_only() {
		let account = Account::new("user@contoso.example", "login.contoso.example", "uid.utid");

		assert_eq!(account.to_string(), "user@contoso.example");
	}

	#[test]
	fn serde_round_trips() {
		let account = Account::new("user@contoso.example", "login.contoso.example", "uid.utid");
		let payload =
			serde_json::to_string(&account).expect("Account should serialize successfully.");
		let restored: Account =
			serde_json::from_str(&payload).expect("Account should deserialize successfully.");

		assert_eq!(account, restored);
	}
}
