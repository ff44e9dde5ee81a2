// Host-side tests for decoding host messages.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod spatial {
        include!("../src/core/spatial.rs");
    }
    pub mod messages {
        include!("../src/core/messages.rs");
    }
}

use core::messages::*;
use core::spatial::Vector3;

fn parse(text: &str) -> HostMessage {
    HostMessage::from_json(text).expect("message should decode")
}

#[test]
fn open_and_stop_carry_no_fields() {
    assert_eq!(parse(r#"{"type":"OPEN"}"#), HostMessage::Open);
    assert_eq!(parse(r#"{"type":"STOP"}"#), HostMessage::Stop);
    // extra fields are ignored
    assert_eq!(parse(r#"{"type":"STOP","reason":"server"}"#), HostMessage::Stop);
}

#[test]
fn state_with_only_volume_leaves_other_fields_absent() {
    let msg = parse(r#"{"type":"STATE","volume":45}"#);
    let HostMessage::State(sync) = msg else {
        panic!("expected STATE, got {:?}", msg);
    };
    assert_eq!(sync.volume, Some(45.0));
    assert_eq!(sync.url, None);
    assert_eq!(sync.looped, None);
    assert_eq!(sync.radius, None);
    assert_eq!(sync.has_speaker, None);
}

#[test]
fn state_reads_every_field() {
    let msg = parse(
        r#"{"type":"STATE","url":"https://radio.example/live","looped":true,
            "volume":70,"radius":25.5,"hasSpeaker":true}"#,
    );
    assert_eq!(
        msg,
        HostMessage::State(StateSync {
            url: Some("https://radio.example/live".into()),
            looped: Some(true),
            volume: Some(70.0),
            radius: Some(25.5),
            has_speaker: Some(true),
        })
    );
}

#[test]
fn state_fields_with_wrong_type_are_ignored() {
    let msg = parse(r#"{"type":"STATE","url":5,"looped":"yes","volume":"45","radius":null,"hasSpeaker":1}"#);
    assert_eq!(msg, HostMessage::State(StateSync::default()));
}

#[test]
fn play_without_optional_fields() {
    let msg = parse(r#"{"type":"PLAY","url":"https://a.example/x.mp3"}"#);
    let HostMessage::Play(req) = msg else {
        panic!("expected PLAY, got {:?}", msg);
    };
    assert_eq!(req.url.as_deref(), Some("https://a.example/x.mp3"));
    assert_eq!(req.radius, None);
    assert_eq!(req.volume, None);
    assert!(!req.looped);
}

#[test]
fn play_looped_uses_truthiness() {
    let looped = |raw: &str| {
        let text = format!(r#"{{"type":"PLAY","url":"u","looped":{raw}}}"#);
        match parse(&text) {
            HostMessage::Play(req) => req.looped,
            other => panic!("expected PLAY, got {:?}", other),
        }
    };
    assert!(looped("true"));
    assert!(looped("1"));
    assert!(looped(r#""on""#));
    assert!(!looped("false"));
    assert!(!looped("0"));
    assert!(!looped(r#""""#));
    assert!(!looped("null"));
}

#[test]
fn pos_with_both_vectors() {
    let msg = parse(
        r#"{"type":"POS","listener":{"x":0,"y":0,"z":0},"source":{"x":10.5,"y":-2,"z":3}}"#,
    );
    let HostMessage::Pos(update) = msg else {
        panic!("expected POS, got {:?}", msg);
    };
    assert_eq!(update.listener, Some(Vector3::new(0.0, 0.0, 0.0)));
    assert_eq!(update.source, Some(Vector3::new(10.5, -2.0, 3.0)));
}

#[test]
fn pos_missing_a_vector_leaves_it_absent() {
    for text in [
        r#"{"type":"POS","listener":{"x":0,"y":0,"z":0}}"#,
        r#"{"type":"POS","source":{"x":0,"y":0,"z":0}}"#,
        r#"{"type":"POS","listener":null,"source":{"x":1,"y":1,"z":1}}"#,
        r#"{"type":"POS","listener":false,"source":{"x":1,"y":1,"z":1}}"#,
        r#"{"type":"POS"}"#,
    ] {
        match parse(text) {
            HostMessage::Pos(update) => assert!(
                update.listener.is_none() || update.source.is_none(),
                "{text}"
            ),
            other => panic!("expected POS, got {:?}", other),
        }
    }
}

#[test]
fn incomplete_vector_is_present_but_not_a_number() {
    let msg = parse(r#"{"type":"POS","listener":{"x":0,"y":0},"source":{"x":10}}"#);
    let HostMessage::Pos(update) = msg else {
        panic!("expected POS, got {:?}", msg);
    };
    let listener = update.listener.expect("listener present");
    let source = update.source.expect("source present");
    assert_eq!(listener.x, 0.0);
    assert!(listener.z.is_nan());
    assert_eq!(source.x, 10.0);
    assert!(source.y.is_nan() && source.z.is_nan());
}

#[test]
fn non_object_vector_has_nan_coordinates() {
    let msg = parse(r#"{"type":"POS","listener":[0,0,0],"source":{"x":1,"y":1,"z":1}}"#);
    let HostMessage::Pos(update) = msg else {
        panic!("expected POS, got {:?}", msg);
    };
    let listener = update.listener.expect("truthy endpoint is kept");
    assert!(listener.x.is_nan());
}

#[test]
fn pos_coordinates_coerce_numeric_strings() {
    let msg = parse(r#"{"type":"POS","listener":{"x":"1.5","y":" 2 ","z":null},"source":{"x":0,"y":0,"z":0}}"#);
    let HostMessage::Pos(update) = msg else {
        panic!("expected POS, got {:?}", msg);
    };
    assert_eq!(update.listener, Some(Vector3::new(1.5, 2.0, 0.0)));
}

#[test]
fn play_coerces_numeric_strings() {
    let msg = parse(r#"{"type":"PLAY","url":"u","volume":"50","radius":"15"}"#);
    let HostMessage::Play(req) = msg else {
        panic!("expected PLAY, got {:?}", msg);
    };
    assert_eq!(req.volume, Some(50.0));
    assert_eq!(req.radius, Some(15.0));
}

#[test]
fn play_falsy_radius_and_null_volume_are_absent() {
    for text in [
        r#"{"type":"PLAY","url":"u","radius":0,"volume":null}"#,
        r#"{"type":"PLAY","url":"u","radius":"","volume":null}"#,
        r#"{"type":"PLAY","url":"u","radius":false}"#,
    ] {
        match parse(text) {
            HostMessage::Play(req) => {
                assert_eq!(req.radius, None, "{text}");
                assert_eq!(req.volume, None, "{text}");
            }
            other => panic!("expected PLAY, got {:?}", other),
        }
    }
}

#[test]
fn play_zero_volume_is_kept() {
    match parse(r#"{"type":"PLAY","url":"u","volume":0}"#) {
        HostMessage::Play(req) => assert_eq!(req.volume, Some(0.0)),
        other => panic!("expected PLAY, got {:?}", other),
    }
}

#[test]
fn has_speaker_flag() {
    assert_eq!(
        parse(r#"{"type":"HAS_SPEAKER","has":true}"#),
        HostMessage::HasSpeaker(SpeakerPresence { has: true })
    );
    assert_eq!(
        parse(r#"{"type":"HAS_SPEAKER"}"#),
        HostMessage::HasSpeaker(SpeakerPresence { has: false })
    );
}

#[test]
fn unknown_type_is_tolerated() {
    let msg = parse(r#"{"type":"DANCE","speed":3}"#);
    assert_eq!(msg, HostMessage::Unknown);
    assert_eq!(msg.kind(), "UNKNOWN");
}

#[test]
fn garbage_is_an_error() {
    assert!(matches!(HostMessage::from_json(""), Err(MessageError::Empty)));
    assert!(matches!(
        HostMessage::from_json("not json"),
        Err(MessageError::Malformed(_))
    ));
    assert!(matches!(
        HostMessage::from_json(r#"{"url":"no type"}"#),
        Err(MessageError::Malformed(_))
    ));
    assert!(HostMessage::from_json(r#""OPEN""#).is_err());
}

#[test]
fn kind_names_match_wire_discriminator() {
    assert_eq!(parse(r#"{"type":"OPEN"}"#).kind(), "OPEN");
    assert_eq!(parse(r#"{"type":"HAS_SPEAKER","has":false}"#).kind(), "HAS_SPEAKER");
    assert_eq!(parse(r#"{"type":"POS"}"#).kind(), "POS");
}
