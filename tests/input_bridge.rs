use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use cellrun::exec::{DirectiveCommand, StdinForwarding};
use cellrun::input::{spawn_bridge, trigger_pair};
use cellrun::relay::{BufferSink, Stream};

#[test]
fn fire_unblocks_a_pending_wait_and_delivers_the_payload() {
    let (trigger, mut waiter) = trigger_pair();

    let handle = thread::spawn(move || waiter.wait());

    trigger.fire("need input").expect("fire");
    assert_eq!(handle.join().expect("join"), Some("need input".to_string()));
}

#[test]
fn wait_ends_when_the_fire_half_is_dropped() {
    let (trigger, mut waiter) = trigger_pair();

    let handle = thread::spawn(move || waiter.wait());
    drop(trigger);

    assert_eq!(handle.join().expect("join"), None);
}

#[test]
fn a_second_fire_before_consumption_is_rejected() {
    let (trigger, _waiter) = trigger_pair();

    trigger.fire("first").expect("first fire fills the slot");
    assert!(trigger.fire("second").is_err());
}

#[test]
fn bridge_appends_a_newline_and_writes_to_the_target_channel() {
    // `cat` copies stdin to stdout, so whatever the bridge writes comes back
    // out once its stdin pipe is closed.
    let mut child = Command::new("cat")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn cat");
    let stdin = child.stdin.take().expect("stdin pipe");

    let (prompt_tx, prompt_rx) = mpsc::channel();
    let (trigger, waiter) = trigger_pair();
    let bridge = spawn_bridge(
        waiter,
        stdin,
        Box::new(move |prompt: &str| {
            prompt_tx.send(prompt.to_string()).expect("record prompt");
            Ok("hello".to_string())
        }),
        "stdin: ".to_string(),
    )
    .expect("spawn bridge");

    trigger.fire("need input").expect("fire");

    let prompt = prompt_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("bridge asked for input");
    assert_eq!(prompt, "stdin: ");

    // Dropping the fire half ends the bridge loop, which closes cat's stdin.
    drop(trigger);
    bridge.join().expect("bridge thread");

    let output = child.wait_with_output().expect("cat output");
    assert_eq!(output.stdout, b"hello\n");
}

#[tokio::test]
async fn forwarded_input_reaches_a_directive_process() {
    let (trigger, waiter) = trigger_pair();
    // The request is queued up-front; the bridge consumes it as soon as the
    // process is spawned, and the shell's `read` sees the forwarded line.
    trigger.fire("need input").expect("fire");

    let sink = BufferSink::new();
    let forwarding = StdinForwarding {
        waiter,
        source: Box::new(|_prompt: &str| Ok("forwarded".to_string())),
        prompt: "stdin: ".to_string(),
    };

    let code = DirectiveCommand::new("read line; echo \"got $line\"", None)
        .run_with_input(&sink, Some(forwarding))
        .await
        .expect("run");

    drop(trigger);
    assert_eq!(code, 0);
    assert_eq!(sink.text(Stream::Stdout), "got forwarded\n");
}
