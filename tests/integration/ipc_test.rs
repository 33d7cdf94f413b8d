//! Wire-level tests against a realistic player session transcript.
//!
//! The per-line encode/decode cases live with the IPC module; these check
//! that a whole exchange, interleaved replies and events included, comes
//! through the reader in order.

use std::sync::mpsc;

use vdeck::handle::mpv::ipc::{read_loop, Message, Request};

#[test]
fn startup_transcript_decodes_in_order() {
    // What mpv sends back after attach: observe acks, then the initial
    // property flood once the file loads, a rejected command, and EOF
    let transcript = concat!(
        "{\"request_id\":1,\"error\":\"success\"}\n",
        "{\"request_id\":2,\"error\":\"success\"}\n",
        "{\"event\":\"property-change\",\"id\":3,\"name\":\"pause\",\"data\":true}\n",
        "{\"event\":\"file-loaded\"}\n",
        "{\"event\":\"property-change\",\"id\":2,\"name\":\"duration\",\"data\":596.5}\n",
        "{\"event\":\"property-change\",\"id\":1,\"name\":\"time-pos\",\"data\":0.04}\n",
        "{\"event\":\"property-change\",\"id\":1,\"name\":\"time-pos\",\"data\":0.08}\n",
        "{\"error\":\"invalid parameter\",\"request_id\":9}\n",
        "{\"event\":\"end-file\",\"reason\":\"eof\"}\n",
    );

    let (tx, rx) = mpsc::channel();
    read_loop(transcript.as_bytes(), tx);
    let messages: Vec<Message> = rx.iter().collect();

    assert_eq!(messages.len(), 9);
    assert!(matches!(&messages[0], Message::Reply(r) if r.is_success()));
    assert!(
        matches!(&messages[3], Message::Event(e) if e.event == "file-loaded"),
        "unexpected message: {:?}",
        messages[3]
    );
    match &messages[4] {
        Message::Event(event) => {
            assert_eq!(event.id, Some(2));
            assert_eq!(event.data.as_ref().and_then(|d| d.as_f64()), Some(596.5));
        }
        other => panic!("expected duration event, got {:?}", other),
    }
    assert!(matches!(&messages[7], Message::Reply(r) if !r.is_success()));
    assert!(matches!(&messages[8], Message::Event(e) if e.reason.as_deref() == Some("eof")));
}

#[test]
fn transcript_with_protocol_noise_still_delivers_the_rest() {
    let transcript = concat!(
        "{\"event\":\"property-change\",\"id\":1,\"name\":\"time-pos\",\"data\":12.5}\n",
        "log line that is not JSON\n",
        "{\"neither\":\"reply nor event\"}\n",
        "\n",
        "{\"request_id\":3,\"error\":\"success\"}\n",
    );

    let (tx, rx) = mpsc::channel();
    read_loop(transcript.as_bytes(), tx);
    let messages: Vec<Message> = rx.iter().collect();

    assert_eq!(messages.len(), 2);
    assert!(matches!(&messages[0], Message::Event(_)));
    assert!(matches!(&messages[1], Message::Reply(_)));
}

#[test]
fn transport_commands_encode_to_single_protocol_lines() {
    // The command side of a play, scrub, quit exchange
    let lines = [
        Request::set_property("pause", false, 5).to_line().unwrap(),
        Request::seek_absolute(270.0, 6).to_line().unwrap(),
        Request::quit(7).to_line().unwrap(),
    ];

    for line in &lines {
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
        // Each line must parse back as one command object
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert!(value.get("command").is_some());
        assert!(value.get("request_id").is_some());
    }

    assert!(lines[0].contains("\"pause\",false"));
    assert!(lines[1].contains("\"absolute\""));
}
