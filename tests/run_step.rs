// tests/run_step.rs

//! Orchestration tests for `run_step` against fake collaborators: no real
//! host detection, no real processes.

use std::time::Duration;

use pkgstep::errors::PkgstepError;
use pkgstep::provider::Provider;
use pkgstep::step::{run_step, ExecutionResult, StepRequest};
use pkgstep_test_utils::builders::StepRequestBuilder;
use pkgstep_test_utils::fake_executor::{FakeExecutor, UnstartableExecutor};
use pkgstep_test_utils::fake_host::FakeHost;
use pkgstep_test_utils::init_tracing;

#[tokio::test]
async fn empty_package_list_is_a_no_op() {
    init_tracing();

    let host = FakeHost::new("ubuntu", "22.04");
    let executor = FakeExecutor::new(0);
    let step = StepRequest::new(Vec::<String>::new());

    let result = run_step(&host, &executor, &step).await.unwrap();

    assert_eq!(result, ExecutionResult::success());
    assert_eq!(executor.call_count(), 0, "executor must not be invoked");
}

#[tokio::test]
async fn empty_package_string_is_a_no_op() {
    init_tracing();

    let host = FakeHost::new("ubuntu", "22.04");
    let executor = FakeExecutor::new(0);
    let step = StepRequest::new("");

    let result = run_step(&host, &executor, &step).await.unwrap();

    assert!(result.is_success());
    assert_eq!(executor.call_count(), 0);
}

#[tokio::test]
async fn provider_is_resolved_from_the_host() {
    init_tracing();

    let host = FakeHost::new("debian", "12");
    let executor = FakeExecutor::new(0);
    let step = StepRequest::new("git, curl wget");

    let result = run_step(&host, &executor, &step).await.unwrap();
    assert_eq!(result, ExecutionResult::success());

    let calls = executor.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].command,
        "sudo apt install --no-install-recommends -y git curl wget"
    );
    assert!(calls[0].ignore_output);

    let env = calls[0].env.as_ref().expect("apt step must carry an overlay");
    assert!(env.contains(&(
        "DEBIAN_FRONTEND".to_string(),
        "noninteractive".to_string()
    )));
}

#[tokio::test]
async fn override_skips_host_detection_entirely() {
    init_tracing();

    // The host would resolve to pacman; the override must win unchecked.
    let host = FakeHost::new("arch", "rolling");
    let executor = FakeExecutor::new(0);
    let step = StepRequestBuilder::new("mc").provider(Provider::Yum).build();

    run_step(&host, &executor, &step).await.unwrap();

    let calls = executor.calls();
    assert_eq!(
        calls[0].command,
        "sudo yum install -y --setopt=skip_missing_names_on_install=False mc"
    );
    assert!(calls[0].env.is_none(), "only apt gets an env overlay");
}

#[tokio::test]
async fn nonzero_exit_becomes_a_result_not_an_error() {
    init_tracing();

    let host = FakeHost::new("ubuntu", "22.04");
    let executor = FakeExecutor::new(1);
    let step = StepRequestBuilder::new("x").provider(Provider::Yum).build();

    let result = run_step(&host, &executor, &step).await.unwrap();

    assert_eq!(result.exit_code, 1);
    assert_eq!(result.message, "cmd exited with non-zero retcode: 1");
}

#[tokio::test]
async fn step_timeout_reaches_the_executor() {
    init_tracing();

    let host = FakeHost::new("alpine", "3.19");
    let executor = FakeExecutor::new(0);
    let step = StepRequestBuilder::new("x")
        .provider(Provider::Apk)
        .timeout(5)
        .build();

    let result = run_step(&host, &executor, &step).await.unwrap();

    assert_eq!(result, ExecutionResult::success());
    assert_eq!(executor.calls()[0].timeout, Duration::from_secs(5));
}

#[tokio::test]
async fn default_timeout_is_sixty_seconds() {
    init_tracing();

    let host = FakeHost::new("fedora", "40");
    let executor = FakeExecutor::new(0);
    let step = StepRequest::new("mc");

    run_step(&host, &executor, &step).await.unwrap();

    assert_eq!(executor.calls()[0].timeout, Duration::from_secs(60));
}

#[tokio::test]
async fn unsupported_host_propagates_as_error() {
    init_tracing();

    let host = FakeHost::new("opensuse", "15");
    let executor = FakeExecutor::new(0);
    let step = StepRequest::new("git");

    let err = run_step(&host, &executor, &step).await.unwrap_err();

    match err {
        PkgstepError::UnsupportedHost { id, version } => {
            assert_eq!(id, "opensuse");
            assert_eq!(version, "15");
        }
        other => panic!("expected UnsupportedHost, got {other:?}"),
    }
    assert_eq!(executor.call_count(), 0);
}

#[tokio::test]
async fn process_start_failure_propagates_as_error() {
    init_tracing();

    let host = FakeHost::new("ubuntu", "22.04");
    let step = StepRequest::new("git");

    let err = run_step(&host, &UnstartableExecutor, &step).await.unwrap_err();

    assert!(matches!(err, PkgstepError::ProcessStart { .. }));
}
