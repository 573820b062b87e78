// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqkit_ops::{ByComparer, Excludes, NativeEq, WithoutExt};
use seqkit_test_utils::{
    counting,
    test_data::{animal_cat, animal_dog, person_alice, plant_rose},
    CaseInsensitive,
};

#[test]
fn test_without_removes_every_occurrence() -> anyhow::Result<()> {
    let result: Vec<_> = [1, 2, 1, 3, 1].into_iter().without(1).collect();

    assert_eq!(result, vec![2, 3]);

    Ok(())
}

#[test]
fn test_without_missing_value_keeps_everything() -> anyhow::Result<()> {
    // Act
    let result: Vec<_> = vec![person_alice(), animal_dog(), plant_rose()]
        .into_iter()
        .without(animal_cat())
        .collect();

    // Assert
    assert_eq!(result, vec![person_alice(), animal_dog(), plant_rose()]);

    Ok(())
}

#[test]
fn test_without_by_uses_comparer() -> anyhow::Result<()> {
    // Arrange
    let tags: Vec<String> = ["Rust", "go", "RUST", "rust"]
        .into_iter()
        .map(String::from)
        .collect();

    // Act
    let result: Vec<_> = tags
        .into_iter()
        .without_by("rust".to_string(), CaseInsensitive)
        .collect();

    // Assert
    assert_eq!(result, vec!["go"]);

    Ok(())
}

#[test]
fn test_without_pulls_lazily() -> anyhow::Result<()> {
    // Arrange
    let (source, counter) = counting([0, 0, 5, 0, 6]);
    let mut kept = source.without(0);

    // Act & Assert
    assert_eq!(kept.next(), Some(5));
    assert_eq!(counter.pulls(), 3);

    assert_eq!(kept.next(), Some(6));
    assert_eq!(counter.pulls(), 5);

    Ok(())
}

#[test]
fn test_exclusion_strategies_are_usable_directly() -> anyhow::Result<()> {
    // Arrange
    let native = NativeEq;
    let by_comparer = ByComparer::new(CaseInsensitive);

    // Act & Assert
    assert!(native.excludes(&3, &3));
    assert!(!native.excludes(&3, &4));
    assert!(by_comparer.excludes(&"Rust".to_string(), &"RUST".to_string()));
    assert!(!by_comparer.excludes(&"Rust".to_string(), &"Go".to_string()));

    Ok(())
}
