use std::collections::HashMap;
use std::io;

use serde_json::json;

use super::*;

#[derive(Debug, thiserror::Error)]
#[error("stock sync failed")]
struct SyncError {
    #[source]
    cause: io::Error,
}

// =============================================================
// Level
// =============================================================

#[test]
fn level_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Level::Log).unwrap(), json!("log"));
    assert_eq!(serde_json::to_value(Level::Warn).unwrap(), json!("warn"));
    assert_eq!(serde_json::to_value(Level::Error).unwrap(), json!("error"));
}

#[test]
fn level_display_matches_wire_name() {
    assert_eq!(Level::Warn.to_string(), "warn");
}

// =============================================================
// ErrorInfo
// =============================================================

#[test]
fn error_info_from_error_without_source_has_no_stack() {
    let err = io::Error::other("disk gone");
    let info = ErrorInfo::from_error(&err);
    assert_eq!(info.message, "disk gone");
    assert_eq!(info.name, "Error");
    assert_eq!(info.stack, None);
}

#[test]
fn error_info_from_error_renders_source_chain() {
    let err = SyncError {
        cause: io::Error::other("socket closed"),
    };
    let info = ErrorInfo::from_error(&err);
    assert_eq!(info.message, "stock sync failed");
    assert_eq!(info.name, "SyncError");
    assert_eq!(info.stack.as_deref(), Some("caused by: socket closed"));
}

#[test]
fn short_type_name_strips_path_and_generics() {
    assert_eq!(short_type_name("std::io::error::Error"), "Error");
    assert_eq!(short_type_name("a::Wrapper<b::Inner>"), "Wrapper");
    assert_eq!(short_type_name("Plain"), "Plain");
}

// =============================================================
// Arg classification
// =============================================================

#[test]
fn plain_values_pass_through_unchanged() {
    let value = json!({ "sku": "coffee", "stock": [8, 10, 50] });
    let arg = Arg::from_serialize(&value);
    assert_eq!(arg, Arg::Structured(value.clone()));
    assert_eq!(arg.to_value(), value);

    assert_eq!(Arg::from_serialize("hello").to_value(), json!("hello"));
    assert_eq!(Arg::from_serialize(&42).to_value(), json!(42));
    assert_eq!(Arg::from_serialize(&true).to_value(), json!(true));
    assert_eq!(Arg::from_serialize(&()).to_value(), json!(null));
}

#[test]
fn unserializable_value_is_coerced_to_string() {
    let mut grid = HashMap::new();
    grid.insert((1, 2), 3);
    let arg = Arg::from_serialize(&grid);
    assert_eq!(arg, Arg::Opaque("{(1, 2): 3}".to_owned()));
    assert_eq!(arg.to_value(), json!("{(1, 2): 3}"));
}

#[test]
fn non_finite_floats_are_coerced_to_string() {
    assert_eq!(Arg::float(f64::NAN).to_value(), json!("NaN"));
    assert_eq!(Arg::float(f64::INFINITY).to_value(), json!("inf"));
    assert_eq!(Arg::float(f64::NEG_INFINITY).to_value(), json!("-inf"));
    assert_eq!(Arg::float(87.5).to_value(), json!(87.5));
}

#[test]
fn error_arg_normalizes_to_message_stack_name() {
    let info = ErrorInfo::new("TypeError", "x is undefined").with_stack("at main.js:1:1");
    assert_eq!(
        Arg::from(info).to_value(),
        json!({ "message": "x is undefined", "stack": "at main.js:1:1", "name": "TypeError" })
    );
}

#[test]
fn missing_error_becomes_null() {
    assert_eq!(Arg::from(None::<ErrorInfo>), Arg::Null);
}

// =============================================================
// DiagnosticEvent
// =============================================================

#[test]
fn console_event_preserves_argument_order() {
    let event = DiagnosticEvent::console(Level::Warn, vec!["low stock".into(), Arg::from(3_u32), true.into()]);
    assert_eq!(event.source, Source::ConsoleCall);
    assert_eq!(event.to_message().args, vec![json!("low stock"), json!(3), json!(true)]);
}

#[test]
fn global_error_payload_shape() {
    let event = DiagnosticEvent::global_error(ErrorReport {
        message: "X".to_owned(),
        url: "u".to_owned(),
        line: 10,
        column: 2,
        error: Some(ErrorInfo::new("Error", "boom").with_stack("Error: boom")),
    });

    let message = event.to_message();
    assert_eq!(message.level, Level::Error);
    assert_eq!(event.source, Source::GlobalError);
    assert_eq!(
        message.args,
        vec![
            json!("X"),
            json!("u"),
            json!(10),
            json!(2),
            json!({ "message": "boom", "stack": "Error: boom", "name": "Error" }),
        ]
    );
}

#[test]
fn global_error_without_error_object_sends_null() {
    let event = DiagnosticEvent::global_error(ErrorReport {
        message: "Script error.".to_owned(),
        url: String::new(),
        line: 0,
        column: 0,
        error: None,
    });
    assert_eq!(event.to_message().args[4], json!(null));
}

#[test]
fn rejection_with_error_is_normalized() {
    let event = DiagnosticEvent::unhandled_rejection(ErrorInfo::new("Error", "fail").into());
    let message = event.to_message();
    assert_eq!(event.source, Source::UnhandledRejection);
    assert_eq!(message.level, Level::Error);
    assert_eq!(
        message.args,
        vec![
            json!("Unhandled Promise Rejection:"),
            json!({ "message": "fail", "stack": null, "name": "Error" }),
        ]
    );
}

#[test]
fn rejection_with_plain_string_passes_through() {
    let event = DiagnosticEvent::unhandled_rejection("plain string".into());
    assert_eq!(
        event.to_message().args,
        vec![json!("Unhandled Promise Rejection:"), json!("plain string")]
    );
}

// =============================================================
// RelayMessage wire shape
// =============================================================

#[test]
fn relay_message_serializes_with_type_discriminator() {
    let message = DiagnosticEvent::console(Level::Log, vec!["ready".into()]).to_message();
    assert!(message.is_relay());
    assert_eq!(
        serde_json::to_value(&message).unwrap(),
        json!({ "type": "iframe-console", "level": "log", "args": ["ready"] })
    );
}

#[test]
fn foreign_message_is_not_relay() {
    let message: RelayMessage =
        serde_json::from_value(json!({ "type": "resize", "level": "log", "args": [] })).unwrap();
    assert!(!message.is_relay());
}
