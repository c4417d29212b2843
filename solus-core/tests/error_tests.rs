// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use solus_core::{IntoSolusError, Result, SolusError};
use std::error::Error;
use std::io;
use std::panic;

#[test]
fn test_error_display() {
    let err = SolusError::stream_error("boom");
    assert_eq!(err.to_string(), "Stream processing error: boom");

    let err = SolusError::user_error(io::Error::other("disk full"));
    assert_eq!(err.to_string(), "User error: disk full");

    assert_eq!(
        SolusError::Cancelled.to_string(),
        "Pipeline cancelled before completion"
    );
}

#[test]
fn test_user_error_exposes_source() {
    let err = io::Error::other("disk full").into_solus();

    assert!(matches!(err, SolusError::UserError(_)));
    assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("disk full"));
}

#[test]
fn test_clone_shares_user_error() {
    let err = SolusError::user_error(io::Error::other("shared"));
    let cloned = err.clone();

    match (err, cloned) {
        (SolusError::UserError(a), SolusError::UserError(b)) => {
            assert!(std::sync::Arc::ptr_eq(&a, &b));
        }
        other => panic!("unexpected variants: {other:?}"),
    }
}

#[test]
fn test_from_panic_with_str_payload() {
    let payload = panic::catch_unwind(|| panic!("transform exploded")).unwrap_err();

    let err = SolusError::from_panic(payload.as_ref());

    assert!(
        matches!(err, SolusError::CallbackPanic { ref context } if context == "transform exploded")
    );
}

#[test]
fn test_from_panic_with_formatted_payload() {
    let value = 7;
    let payload = panic::catch_unwind(|| panic!("bad value {value}")).unwrap_err();

    let err = SolusError::from_panic(payload.as_ref());

    assert_eq!(err.to_string(), "User callback panicked: bad value 7");
}

#[test]
fn test_from_panic_with_opaque_payload() {
    let payload = panic::catch_unwind(|| panic::panic_any(42_u8)).unwrap_err();

    let err = SolusError::from_panic(payload.as_ref());

    assert!(matches!(err, SolusError::CallbackPanic { .. }));
}

#[test]
fn test_is_cancelled() {
    assert!(SolusError::Cancelled.is_cancelled());
    assert!(!SolusError::stream_error("boom").is_cancelled());
}

#[test]
fn test_result_alias_with_question_mark() {
    fn inner() -> Result<u32> {
        Err(SolusError::stream_error("inner failed"))
    }

    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }

    assert!(matches!(
        outer(),
        Err(SolusError::StreamProcessingError { .. })
    ));
}
