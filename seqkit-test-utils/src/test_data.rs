// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::fixtures::{Animal, Person, Plant};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataVariant {
    Animal,
    Person,
    Plant,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestData {
    Person(Person),
    Animal(Animal),
    Plant(Plant),
}

impl TestData {
    #[must_use]
    pub const fn variant(&self) -> DataVariant {
        match self {
            TestData::Person(_) => DataVariant::Person,
            TestData::Animal(_) => DataVariant::Animal,
            TestData::Plant(_) => DataVariant::Plant,
        }
    }

    /// Age for people, legs for animals, height for plants.
    #[must_use]
    pub const fn magnitude(&self) -> u32 {
        match self {
            TestData::Person(p) => p.age,
            TestData::Animal(a) => a.legs,
            TestData::Plant(p) => p.height,
        }
    }
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestData::Person(p) => write!(f, "{p}"),
            TestData::Animal(a) => write!(f, "{} ({} legs)", a.name, a.legs),
            TestData::Plant(p) => write!(f, "{} ({} cm)", p.species, p.height),
        }
    }
}

pub fn person_alice() -> TestData {
    TestData::Person(Person::new("Alice", 25))
}

pub fn person_bob() -> TestData {
    TestData::Person(Person::new("Bob", 30))
}

pub fn person_charlie() -> TestData {
    TestData::Person(Person::new("Charlie", 35))
}

pub fn person_diane() -> TestData {
    TestData::Person(Person::new("Diane", 40))
}

pub fn animal_dog() -> TestData {
    TestData::Animal(Animal {
        name: "Dog",
        legs: 4,
    })
}

pub fn animal_cat() -> TestData {
    TestData::Animal(Animal {
        name: "Cat",
        legs: 4,
    })
}

pub fn animal_spider() -> TestData {
    TestData::Animal(Animal {
        name: "Spider",
        legs: 8,
    })
}

pub fn animal_bird() -> TestData {
    TestData::Animal(Animal {
        name: "Bird",
        legs: 2,
    })
}

pub fn plant_rose() -> TestData {
    TestData::Plant(Plant {
        species: "Rose",
        height: 15,
    })
}

pub fn plant_sunflower() -> TestData {
    TestData::Plant(Plant {
        species: "Sunflower",
        height: 180,
    })
}

/// A mixed fixture: Alice, Dog, Rose, Bob, Cat, Sunflower, Charlie, Spider.
pub fn mixed() -> Vec<TestData> {
    vec![
        person_alice(),
        animal_dog(),
        plant_rose(),
        person_bob(),
        animal_cat(),
        plant_sunflower(),
        person_charlie(),
        animal_spider(),
    ]
}
