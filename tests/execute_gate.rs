use anyhow::anyhow;
use cellrun::config::SessionConfig;
use cellrun::relay::{BufferSink, Stream};
use cellrun::session::{ExecuteOutcome, Session};

fn session() -> Session<BufferSink> {
    Session::new(BufferSink::new(), SessionConfig::default())
}

#[tokio::test]
async fn directives_run_only_after_a_successful_cell() {
    let session = session();
    let outcome = ExecuteOutcome::Ok { execution_count: 1 };

    let returned = session
        .finish_execute("//% echo from directive\n", outcome.clone())
        .await;

    assert_eq!(returned, outcome);
    assert_eq!(session.sink().text(Stream::Stdout), "from directive\n");
}

#[tokio::test]
async fn failed_cell_skips_directives_entirely() {
    let dir = tempfile::tempdir().expect("tempdir");
    let marker = dir.path().join("never.txt");

    let session = session();
    let outcome = ExecuteOutcome::Error {
        ename: "CompileFailed".to_string(),
        evalue: "compilation failed".to_string(),
        traceback: vec![],
    };
    let source = format!("//% echo ran > {}\n", marker.display());

    let returned = session.finish_execute(&source, outcome.clone()).await;

    assert_eq!(returned, outcome);
    assert!(!marker.exists());
    assert!(session.sink().is_empty());
}

#[tokio::test]
async fn directive_failure_does_not_change_the_cell_outcome() {
    let session = session();
    let outcome = ExecuteOutcome::Ok { execution_count: 7 };

    let returned = session.finish_execute("//% exit 9\n", outcome.clone()).await;

    assert_eq!(returned, outcome);
    assert!(session.sink().text(Stream::Stderr).contains("exit code 9"));
}

#[tokio::test]
async fn repeated_runs_are_independent_full_cycles() {
    let session = session();
    let source = "//% echo once\n";

    session.run_directives(source).await;
    session.run_directives(source).await;

    assert_eq!(session.sink().text(Stream::Stdout), "once\nonce\n");
    assert!(session.sink().channel(Stream::Stderr).is_empty());
}

#[tokio::test]
async fn session_debug_flag_writes_debug_lines_to_stderr() {
    let config = SessionConfig {
        debug: true,
        ..SessionConfig::default()
    };
    let session = Session::new(BufferSink::new(), config);

    session
        .finish_execute("int x;\n", ExecuteOutcome::Ok { execution_count: 1 })
        .await;

    assert!(
        session
            .sink()
            .text(Stream::Stderr)
            .contains("[debug] cell ok, scanning for directives")
    );
}

#[test]
fn error_outcome_carries_the_cause_chain() {
    let err = anyhow!("permission denied").context("writing source file");
    let outcome = ExecuteOutcome::from_error("WriteFailed", &err);

    match outcome {
        ExecuteOutcome::Error {
            ename,
            evalue,
            traceback,
        } => {
            assert_eq!(ename, "WriteFailed");
            assert_eq!(evalue, "writing source file");
            assert_eq!(traceback, vec!["permission denied".to_string()]);
        }
        ExecuteOutcome::Ok { .. } => panic!("expected an error outcome"),
    }
}
