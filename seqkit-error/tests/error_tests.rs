// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqkit_error::{Result, SeqError};

#[test]
fn test_error_display() {
    let err = SeqError::invalid_argument("direction", "unknown value `up`");
    assert_eq!(
        err.to_string(),
        "Invalid argument `direction`: unknown value `up`"
    );

    assert_eq!(SeqError::EmptySelection.to_string(), "Selection is empty");
    assert_eq!(
        SeqError::NoMatch.to_string(),
        "No element matched the predicate"
    );
    assert_eq!(
        SeqError::multiple_matches(2).to_string(),
        "Expected a single match, found at least 2"
    );
}

#[test]
fn test_error_constructors() {
    let err = SeqError::invalid_argument("index", "too large");
    assert!(matches!(
        err,
        SeqError::InvalidArgument {
            name: "index",
            ..
        }
    ));

    let err = SeqError::multiple_matches(3);
    assert_eq!(err, SeqError::MultipleMatches { count: 3 });
}

#[test]
fn test_is_lookup_failure() {
    assert!(SeqError::NoMatch.is_lookup_failure());
    assert!(SeqError::multiple_matches(2).is_lookup_failure());
    assert!(!SeqError::EmptySelection.is_lookup_failure());
    assert!(!SeqError::invalid_argument("x", "y").is_lookup_failure());
}

#[test]
fn test_no_match_is_distinct_from_multiple_matches() {
    assert_ne!(SeqError::NoMatch, SeqError::multiple_matches(2));
}

#[test]
fn test_result_propagates_with_question_mark() -> anyhow::Result<()> {
    fn inner(fail: bool) -> Result<u32> {
        if fail {
            Err(SeqError::NoMatch)
        } else {
            Ok(7)
        }
    }

    fn outer(fail: bool) -> Result<u32> {
        let value = inner(fail)?;
        Ok(value * 2)
    }

    assert_eq!(outer(false)?, 14);
    assert_eq!(outer(true), Err(SeqError::NoMatch));
    Ok(())
}

#[test]
fn test_error_converts_into_anyhow() {
    let err: anyhow::Error = SeqError::EmptySelection.into();
    assert_eq!(err.to_string(), "Selection is empty");
}
