//! Integration tests for the prototype registry: the full registry contract,
//! the global accessor, and clone calls racing registration.

use std::sync::Arc;
use std::thread;

use dp_core::Error;
use dp_prototype::{Character, CharacterClass, Document, PrototypeRegistry, Shape};

#[test]
fn global_instance_is_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| PrototypeRegistry::instance() as *const PrototypeRegistry as usize)
        })
        .collect();
    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn mixed_families_share_one_registry() {
    let registry = PrototypeRegistry::new();
    registry.register_standard_documents();
    registry.register_standard_characters();
    registry.register_standard_shapes().unwrap();

    let clone = registry.create_clone("warrior_template").unwrap();
    let warrior = clone.into_any().downcast::<Character>().unwrap();
    assert_eq!(warrior.class(), CharacterClass::Warrior);
    assert_eq!(warrior.stats().health, 150);

    let clone = registry.create_clone("triangle_template").unwrap();
    let triangle = clone.into_any().downcast::<Shape>().unwrap();
    assert_eq!(triangle.perimeter(), 12.0);

    // The stored templates survive any number of clones.
    for _ in 0..3 {
        registry.create_clone("circle_template").unwrap();
    }
    assert_eq!(registry.len(), 11);
}

#[test]
fn clone_label_can_be_rewritten_behind_the_trait() {
    let registry = PrototypeRegistry::new();
    registry.register("base", Box::new(Document::pdf_template("Base")));

    let mut clone = registry.create_clone("base").unwrap();
    clone.set_label("Customised");
    assert_eq!(clone.label(), "Customised");

    let untouched = registry.create_clone("base").unwrap();
    assert_eq!(untouched.label(), "Base");
}

#[test]
fn clones_race_register_and_remove_without_tearing() {
    let registry = Arc::new(PrototypeRegistry::new());
    registry.register("stable", Box::new(Document::word_template("Stable")));

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..50 {
                    let key = format!("churn_{t}");
                    registry.register(&key, Box::new(Document::pdf_template(&format!("v{i}"))));
                    registry.remove(&key);
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..200 {
                    // The stable key must always resolve to an intact clone;
                    // churned keys either clone cleanly or miss cleanly.
                    let clone = registry.create_clone("stable").unwrap();
                    assert_eq!(clone.label(), "Stable");
                    match registry.create_clone("churn_0") {
                        Ok(c) => assert!(c.label().starts_with('v')),
                        Err(Error::NotFound { key }) => assert_eq!(key, "churn_0"),
                        Err(e) => panic!("unexpected error: {e}"),
                    }
                }
            })
        })
        .collect();

    for h in writers.into_iter().chain(readers) {
        h.join().unwrap();
    }
    assert!(registry.contains("stable"));
}
