// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqkit::prelude::*;
use seqkit::SeqError;
use seqkit_test_utils::test_data::{
    animal_bird, animal_cat, animal_dog, animal_spider, mixed, person_alice, person_bob,
    person_charlie, person_diane, plant_rose, plant_sunflower, TestData,
};
use seqkit_test_utils::{collect_twice, CaseInsensitive, Person, SinglePass};

#[test]
fn test_distinct_then_order_composition() -> anyhow::Result<()> {
    // Arrange
    let data = vec![
        animal_spider(),
        person_bob(),
        animal_dog(),
        animal_cat(),
        animal_bird(),
        person_alice(),
    ];

    // Act
    let result = data
        .into_iter()
        .distinct_by(TestData::magnitude)
        .order(comparing(TestData::magnitude));

    // Assert
    assert_eq!(
        result.as_slice(),
        [animal_bird(), animal_dog(), animal_spider(), person_alice(), person_bob()]
    );

    Ok(())
}

#[test]
fn test_select_where_then_order_descending() -> anyhow::Result<()> {
    // Act
    let people = mixed()
        .into_iter()
        .select_where(|data| match data {
            TestData::Person(p) => Selection::present(p),
            _ => Selection::empty(),
        })
        .order_descending(comparing(|p: &Person| p.age));

    // Assert
    let names: Vec<_> = people.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Charlie", "Bob", "Alice"]);

    Ok(())
}

#[test]
fn test_order_then_close_keeps_order_across_passes() -> anyhow::Result<()> {
    // Arrange
    let sorted = vec![plant_sunflower(), plant_rose(), person_diane()]
        .into_iter()
        .order(comparing(TestData::magnitude));

    // Act
    let (first, second) = collect_twice(&close(&sorted));

    // Assert
    assert_eq!(first, vec![&plant_rose(), &person_diane(), &plant_sunflower()]);
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_close_over_single_pass_then_distinct() -> anyhow::Result<()> {
    // Arrange
    let source = SinglePass::new(["b", "A", "a", "B", "c"].map(String::from));
    let guarded = close(&source);

    // Act
    let first: Vec<_> = guarded.iter().distinct_with(CaseInsensitive).collect();
    let second: Vec<_> = guarded.iter().collect();

    // Assert
    assert_eq!(first, vec!["b", "A", "c"]);
    assert!(second.is_empty());

    Ok(())
}

#[test]
fn test_lookup_after_composition() -> anyhow::Result<()> {
    // Arrange
    let people = || {
        mixed().into_iter().select_where(|data| match data {
            TestData::Person(p) => Selection::present(p),
            _ => Selection::empty(),
        })
    };

    // Act
    let oldest = people().single_or(Person::new("nobody", 0), |p| p.age > 30)?;
    let ambiguous = people().single_or(Person::new("nobody", 0), |p| p.age > 20);

    // Assert
    assert_eq!(oldest, Person::new("Charlie", 35));
    assert_eq!(ambiguous, Err(SeqError::multiple_matches(2)));

    Ok(())
}

#[test]
fn test_runtime_direction_and_tie_breaking() -> anyhow::Result<()> {
    // Arrange
    let direction: Direction = "Descending".parse()?;
    let people = vec![
        Person::new("bob", 30),
        Person::new("Al", 30),
        Person::new("cy", 25),
    ];

    // Act
    let sorted = seqkit::order_by_direction(people, comparing(|p: &Person| p.age), direction)
        .then_by(comparing(|p: &Person| p.name.to_lowercase()));

    // Assert
    let names: Vec<_> = sorted.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Al", "bob", "cy"]);

    Ok(())
}

#[test]
fn test_insert_without_and_matches_compose() -> anyhow::Result<()> {
    // Act
    let rebuilt: Vec<_> = [person_alice(), animal_dog(), person_charlie()]
        .into_iter()
        .without(animal_dog())
        .insert_at(1, person_bob())
        .collect();

    // Assert
    assert!(rebuilt
        .iter()
        .matches_with(["Alice", "Bob", "Charlie"], |data, name| match data {
            TestData::Person(p) => p.name == *name,
            _ => false,
        }));
    assert!(rebuilt
        .iter()
        .map(|data| matches!(data, TestData::Person(_)))
        .all_true());

    Ok(())
}
