// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqkit_core::{DefaultEquality, KeyProjectionComparer};
use seqkit_ops::DistinctByExt;
use seqkit_test_utils::{
    counting, random,
    test_data::{animal_dog, mixed, person_alice, plant_rose, DataVariant, TestData},
    CaseInsensitive, Person,
};
use std::collections::HashSet;

#[test]
fn test_distinct_by_keeps_first_element_per_key() -> anyhow::Result<()> {
    // Arrange
    let people = vec![
        Person::new("Alice", 30),
        Person::new("Bob", 25),
        Person::new("Carol", 30),
        Person::new("Dan", 25),
        Person::new("Eve", 41),
    ];

    // Act
    let result: Vec<_> = people.into_iter().distinct_by(Person::age_key).collect();

    // Assert
    assert_eq!(
        result,
        vec![
            Person::new("Alice", 30),
            Person::new("Bob", 25),
            Person::new("Eve", 41),
        ]
    );

    Ok(())
}

#[test]
fn test_distinct_by_variant_over_mixed_data() -> anyhow::Result<()> {
    // Act
    let result: Vec<TestData> = mixed().into_iter().distinct_by(TestData::variant).collect();

    // Assert
    assert_eq!(result, vec![person_alice(), animal_dog(), plant_rose()]);
    assert_eq!(
        result.iter().map(TestData::variant).collect::<Vec<_>>(),
        vec![DataVariant::Person, DataVariant::Animal, DataVariant::Plant]
    );

    Ok(())
}

#[test]
fn test_distinct_by_identity_on_distinct_input() -> anyhow::Result<()> {
    // Arrange
    let input = vec![5, 3, 9, 1, 7];

    // Act
    let result: Vec<_> = input.clone().into_iter().distinct_by(|x| *x).collect();

    // Assert
    assert_eq!(result, input);

    Ok(())
}

#[test]
fn test_distinct_by_empty_source() -> anyhow::Result<()> {
    let result: Vec<i32> = Vec::new().into_iter().distinct_by(|x: &i32| *x).collect();

    assert!(result.is_empty());

    Ok(())
}

#[test]
fn test_distinct_by_with_custom_key_comparer() -> anyhow::Result<()> {
    // Arrange
    let people = vec![
        Person::new("alice", 1),
        Person::new("ALICE", 2),
        Person::new("Bob", 3),
        Person::new("bob", 4),
    ];

    // Act
    let result: Vec<_> = people
        .into_iter()
        .distinct_by_with(Person::name_key, CaseInsensitive)
        .map(|p| p.age)
        .collect();

    // Assert
    assert_eq!(result, vec![1, 3]);

    Ok(())
}

#[test]
fn test_distinct_by_comparer_uses_projection() -> anyhow::Result<()> {
    // Arrange
    let by_len = KeyProjectionComparer::with_comparer(|s: &&str| s.len(), DefaultEquality);

    // Act
    let result: Vec<_> = ["aa", "b", "cc", "d", "eee"]
        .into_iter()
        .distinct_by_comparer(by_len)
        .collect();

    // Assert
    assert_eq!(result, vec!["aa", "b", "eee"]);

    Ok(())
}

#[test]
fn test_distinct_by_pulls_lazily() -> anyhow::Result<()> {
    // Arrange
    let (source, counter) = counting([1, 1, 2, 3]);
    let mut distinct = source.distinct_by(|x| *x);

    // Act & Assert
    assert_eq!(counter.pulls(), 0);

    assert_eq!(distinct.next(), Some(1));
    assert_eq!(counter.pulls(), 1);

    assert_eq!(distinct.next(), Some(2));
    assert_eq!(counter.pulls(), 3);

    assert_eq!(distinct.next(), Some(3));
    assert_eq!(counter.pulls(), 4);

    assert_eq!(distinct.next(), None);

    Ok(())
}

#[test]
fn test_distinct_by_clones_do_not_share_seen_keys() -> anyhow::Result<()> {
    // Arrange
    let mut original = [1, 2, 1, 3, 2].into_iter().distinct_by(|x| *x);
    assert_eq!(original.next(), Some(1));

    // Act
    let cloned = original.clone();
    let from_original: Vec<_> = original.collect();
    let from_clone: Vec<_> = cloned.collect();

    // Assert
    assert_eq!(from_original, vec![2, 3]);
    assert_eq!(from_clone, vec![2, 3]);

    Ok(())
}

#[test]
fn test_distinct_by_fresh_pass_starts_with_empty_set() -> anyhow::Result<()> {
    // Arrange
    let source = vec![3, 3, 4];

    // Act
    let first: Vec<_> = source.iter().distinct_by(|x| **x).collect();
    let second: Vec<_> = source.iter().distinct_by(|x| **x).collect();

    // Assert
    assert_eq!(first, vec![&3, &4]);
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_distinct_by_random_keys_keep_earliest_position() -> anyhow::Result<()> {
    for seed in [7u64, 42, 1234] {
        // Arrange
        let input = random::keys_with_positions(seed, 500, 32);

        // Act
        let result: Vec<_> = input.iter().copied().distinct_by(|(key, _)| *key).collect();

        // Assert
        let mut seen = HashSet::new();
        let expected: Vec<_> = input
            .iter()
            .copied()
            .filter(|(key, _)| seen.insert(*key))
            .collect();
        assert_eq!(result, expected);
        assert!(result.windows(2).all(|w| w[0].1 < w[1].1));
    }

    Ok(())
}

#[test]
fn test_distinct_by_stops_pulling_after_exhaustion() -> anyhow::Result<()> {
    // Arrange
    let (source, counter) = counting([1, 1, 2]);
    let mut distinct = source.distinct_by(|x| *x);

    // Act
    let drained: Vec<_> = distinct.by_ref().collect();
    let pulls_at_end = counter.pulls();

    // Assert
    assert_eq!(drained, vec![1, 2]);
    assert_eq!(pulls_at_end, 4);
    assert_eq!(distinct.next(), None);
    assert_eq!(distinct.next(), None);
    assert_eq!(counter.pulls(), pulls_at_end);
    assert_eq!(distinct.size_hint(), (0, Some(0)));

    Ok(())
}

#[test]
fn test_distinct_by_debug_reports_distinct_key_count() -> anyhow::Result<()> {
    // Arrange
    let mut distinct = [5, 5, 6, 7].into_iter().distinct_by(|x| *x);

    // Act
    distinct.next();
    distinct.next();

    // Assert
    assert_eq!(format!("{distinct:?}"), "DistinctBy { distinct_keys: 2, .. }");

    Ok(())
}
