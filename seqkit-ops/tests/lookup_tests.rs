// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqkit_core::SeqError;
use seqkit_ops::LookupExt;
use seqkit_test_utils::{
    counting,
    test_data::{mixed, person_bob, TestData},
    Person,
};

#[test]
fn test_first_or_returns_first_element() -> anyhow::Result<()> {
    assert_eq!([4, 5].into_iter().first_or(0), 4);
    assert_eq!(Vec::new().into_iter().first_or(7), 7);

    Ok(())
}

#[test]
fn test_first_or_pulls_only_one() -> anyhow::Result<()> {
    // Arrange
    let (source, counter) = counting([1, 2, 3]);

    // Act
    let first = source.first_or(0);

    // Assert
    assert_eq!(first, 1);
    assert_eq!(counter.pulls(), 1);

    Ok(())
}

#[test]
fn test_single_or_empty_source_returns_fallback() -> anyhow::Result<()> {
    // Act
    let result = Vec::<i32>::new().into_iter().single_or(-1, |x| *x > 0)?;

    // Assert
    assert_eq!(result, -1);

    Ok(())
}

#[test]
fn test_single_or_finds_single_match() -> anyhow::Result<()> {
    // Act
    let result = mixed()
        .into_iter()
        .single_or(person_bob(), |data| data.magnitude() == 8)?;

    // Assert
    assert_eq!(result.magnitude(), 8);
    assert!(matches!(result, TestData::Animal(_)));

    Ok(())
}

#[test]
fn test_single_or_no_match_in_non_empty_source() -> anyhow::Result<()> {
    // Act
    let result = [1, 2, 3].into_iter().single_or(0, |x| *x > 10);

    // Assert
    assert_eq!(result, Err(SeqError::NoMatch));
    assert!(result.unwrap_err().is_lookup_failure());

    Ok(())
}

#[test]
fn test_single_or_multiple_matches_stops_early() -> anyhow::Result<()> {
    // Arrange
    let (source, counter) = counting([5, 6, 7, 8]);

    // Act
    let result = source.single_or(0, |x| *x > 5);

    // Assert
    assert_eq!(result, Err(SeqError::multiple_matches(2)));
    assert_eq!(counter.pulls(), 3);

    Ok(())
}

#[test]
fn test_single_or_errors_are_distinct() -> anyhow::Result<()> {
    // Act
    let none = [1].into_iter().single_or(0, |x| *x == 2);
    let many = [2, 2].into_iter().single_or(0, |x| *x == 2);

    // Assert
    assert_ne!(none, many);
    assert!(matches!(many, Err(SeqError::MultipleMatches { count: 2 })));

    Ok(())
}

#[test]
fn test_first_value_where_returns_first_accepted_projection() -> anyhow::Result<()> {
    // Arrange
    let people = vec![
        Person::new("Al", 20),
        Person::new("Barbara", 31),
        Person::new("Christopher", 44),
    ];

    // Act
    let long_name = people
        .iter()
        .first_value_where(|p| p.name.len(), |len| *len > 5);
    let missing = people.iter().first_value_where(|p| p.age, |age| *age > 100);

    // Assert
    assert_eq!(long_name, Some(7));
    assert_eq!(missing, None);

    Ok(())
}

#[test]
fn test_first_value_where_stops_at_first_hit() -> anyhow::Result<()> {
    // Arrange
    let (source, counter) = counting([1, 2, 3, 4]);

    // Act
    let found = source.first_value_where(|x| x * 10, |v| *v >= 20);

    // Assert
    assert_eq!(found, Some(20));
    assert_eq!(counter.pulls(), 2);

    Ok(())
}
