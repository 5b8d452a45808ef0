//! The prototype registry (translates the `PrototypeRegistry` of the C++
//! catalogue).
//!
//! A keyed store of owned template objects. Cloning a registered template
//! never removes or mutates it; a lookup miss is an explicit `NotFound`
//! error, never a null-like default. One exclusive lock guards the whole
//! map — registration and lookup are short and contention is negligible, so
//! a finer-grained scheme would buy nothing.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use dp_core::{errors::Result, Error, Prototype};

use crate::character::{Character, CharacterClass};
use crate::document::Document;
use crate::shape::Shape;

/// A keyed store of cloneable template prototypes.
///
/// ```
/// use dp_prototype::{Document, Prototype, PrototypeRegistry};
///
/// let registry = PrototypeRegistry::new();
/// registry.register("report", Box::new(Document::word_template("Report")));
///
/// let copy = registry.create_clone("report").unwrap();
/// assert_eq!(copy.label(), "Report");
/// assert!(registry.create_clone("missing").is_err());
/// ```
pub struct PrototypeRegistry {
    prototypes: Mutex<HashMap<String, Box<dyn Prototype>>>,
}

impl PrototypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        PrototypeRegistry {
            prototypes: Mutex::new(HashMap::new()),
        }
    }

    /// Return a reference to the process-wide instance, constructing it on
    /// the first call from any thread.
    pub fn instance() -> &'static PrototypeRegistry {
        static INSTANCE: OnceLock<PrototypeRegistry> = OnceLock::new();
        INSTANCE.get_or_init(PrototypeRegistry::new)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Box<dyn Prototype>>> {
        self.prototypes.lock().expect("PrototypeRegistry mutex poisoned")
    }

    /// Store a template under `key`, taking ownership. Replaces any prior
    /// entry at that key — last write wins.
    pub fn register(&self, key: &str, prototype: Box<dyn Prototype>) {
        self.lock().insert(key.to_string(), prototype);
    }

    /// Clone the template registered under `key`.
    ///
    /// The stored template is untouched; the caller takes exclusive
    /// ownership of the returned copy. Fails with `NotFound` if the key is
    /// absent.
    pub fn create_clone(&self, key: &str) -> Result<Box<dyn Prototype>> {
        self.lock()
            .get(key)
            .map(|p| p.clone_prototype())
            .ok_or_else(|| Error::NotFound { key: key.to_string() })
    }

    /// `true` if a template is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    /// Remove the template under `key`. Returns `true` if one was present.
    pub fn remove(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    /// All registered keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.lock().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// `true` if no templates are registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove every template.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Register the standard document templates
    /// (`word_template`, `pdf_template`, `presentation_template`,
    /// `spreadsheet_template`).
    pub fn register_standard_documents(&self) {
        self.register(
            "word_template",
            Box::new(Document::word_template("Document Template")),
        );
        self.register(
            "pdf_template",
            Box::new(Document::pdf_template("PDF Template")),
        );
        self.register(
            "presentation_template",
            Box::new(Document::presentation_template("Presentation Template")),
        );
        self.register(
            "spreadsheet_template",
            Box::new(Document::spreadsheet_template("Spreadsheet Template")),
        );
    }

    /// Register the standard character templates, one per class.
    pub fn register_standard_characters(&self) {
        self.register(
            "warrior_template",
            Box::new(Character::new(CharacterClass::Warrior, "Warrior Template")),
        );
        self.register(
            "mage_template",
            Box::new(Character::new(CharacterClass::Mage, "Mage Template")),
        );
        self.register(
            "archer_template",
            Box::new(Character::new(CharacterClass::Archer, "Archer Template")),
        );
        self.register(
            "rogue_template",
            Box::new(Character::new(CharacterClass::Rogue, "Rogue Template")),
        );
    }

    /// Register the standard shape templates: a radius-5 circle, a 10×6
    /// rectangle, and a 3-4-5 triangle.
    pub fn register_standard_shapes(&self) -> Result<()> {
        self.register(
            "circle_template",
            Box::new(Shape::circle("Circle Template", 5.0)?),
        );
        self.register(
            "rectangle_template",
            Box::new(Shape::rectangle("Rectangle Template", 10.0, 6.0)?),
        );
        self.register(
            "triangle_template",
            Box::new(Shape::triangle("Triangle Template", 3.0, 4.0, 5.0)?),
        );
        Ok(())
    }
}

impl Default for PrototypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
