// self
use token_acquire::{
	_preludet::*,
	error::{BuilderError, ExecutionError},
	request::{AcquireTokenBuilder, AcquireTokenSilent},
};

fn executor() -> Arc<RecordingExecutor> {
	Arc::new(RecordingExecutor::default())
}

#[tokio::test]
async fn silent_requires_an_account_or_login_hint() {
	let executor = executor();
	let outcome = AcquireTokenSilent::new(executor.clone(), ["user.read"])
		.execute(CancellationToken::new())
		.await;

	assert!(matches!(outcome, Err(Error::Builder(BuilderError::MissingAccountSelector))));
	assert!(
		executor.request.lock().is_none(),
		"Executor must not be called when validation fails."
	);
}

#[tokio::test]
async fn silent_forwards_parameters_and_cancellation() {
	let executor = executor();
	let account = Arc::new(test_account());
	let cancel = CancellationToken::new();
	let result = AcquireTokenSilent::new(executor.clone(), ["user.read", "mail.read"])
		.with_account(account.clone())
		.with_extra_query_parameters(HashMap::from_iter([(
			"slice".to_string(),
			"testslice".to_string(),
		)]))
		.with_authority_override("https://login.contoso.example/tenant")
		.force_refresh(true)
		.execute(cancel.clone())
		.await
		.expect("Recorded silent request should succeed.");

	assert_eq!(result.access_token.expose(), "test-access-token");

	let recorded =
		executor.request.lock().clone().expect("Executor should have captured the request.");
	let RecordedRequest::Silent(parameters) = recorded else {
		panic!("Captured request should be the silent kind.");
	};

	assert_eq!(parameters.common.scopes(), Some(&["user.read".into(), "mail.read".into()][..]));
	assert!(Arc::ptr_eq(
		parameters.common.account().expect("Account should be forwarded."),
		&account,
	));
	assert_eq!(
		parameters.common.extra_query_parameters().get("slice").map(String::as_str),
		Some("testslice"),
	);
	assert_eq!(
		parameters.common.authority_override(),
		Some("https://login.contoso.example/tenant"),
	);
	assert!(parameters.force_refresh);

	let observed =
		executor.cancellation.lock().clone().expect("Cancellation token should be forwarded.");

	assert!(!observed.is_cancelled());

	cancel.cancel();

	assert!(
		observed.is_cancelled(),
		"Observed token should share the caller's cancellation state."
	);
}

#[tokio::test]
async fn silent_accepts_a_login_hint_instead_of_an_account() {
	let executor = executor();

	AcquireTokenSilent::new(executor.clone(), ["user.read"])
		.with_login_hint("user@contoso.example")
		.execute(CancellationToken::new())
		.await
		.expect("Login-hint-backed silent request should succeed.");

	let recorded =
		executor.request.lock().clone().expect("Executor should have captured the request.");
	let RecordedRequest::Silent(parameters) = recorded else {
		panic!("Captured request should be the silent kind.");
	};

	assert_eq!(parameters.common.login_hint(), Some("user@contoso.example"));
	assert!(parameters.common.account().is_none());
	assert!(!parameters.force_refresh);
}

#[tokio::test]
async fn silent_passes_executor_failures_through_verbatim() {
	let executor = executor();

	*executor.reply.lock() =
		Some(Err(ExecutionError::Rejected { reason: "AADSTS50076".into() }.into()));

	let outcome = AcquireTokenSilent::new(executor, ["user.read"])
		.with_login_hint("user@contoso.example")
		.execute(CancellationToken::new())
		.await;
	let Err(Error::Execution(ExecutionError::Rejected { reason })) = outcome else {
		panic!("Executor failure should surface unmodified.");
	};

	assert_eq!(reason, "AADSTS50076");
}
