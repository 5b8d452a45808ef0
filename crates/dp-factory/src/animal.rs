//! Animal product family (translates the `Animal` factory-method example of
//! the C++ catalogue).

use std::fmt;
use std::str::FromStr;

use dp_core::Error;

/// The closed set of animal kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimalKind {
    /// Domestic, barks.
    Dog,
    /// Domestic, meows.
    Cat,
    /// Savanna, roars.
    Lion,
    /// Forest, howls.
    Wolf,
}

impl AnimalKind {
    /// The sound this kind of animal makes.
    pub fn sound(&self) -> &'static str {
        match self {
            AnimalKind::Dog => "Woof!",
            AnimalKind::Cat => "Meow!",
            AnimalKind::Lion => "Roar!",
            AnimalKind::Wolf => "Howl!",
        }
    }

    /// Where this kind of animal lives.
    pub fn habitat(&self) -> &'static str {
        match self {
            AnimalKind::Dog | AnimalKind::Cat => "Domestic",
            AnimalKind::Lion => "Savanna",
            AnimalKind::Wolf => "Forest",
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnimalKind::Dog => "Dog",
            AnimalKind::Cat => "Cat",
            AnimalKind::Lion => "Lion",
            AnimalKind::Wolf => "Wolf",
        };
        f.write_str(s)
    }
}

impl FromStr for AnimalKind {
    type Err = Error;

    /// Parse a kind discriminator, case-insensitively.
    ///
    /// ```
    /// use dp_factory::AnimalKind;
    ///
    /// assert_eq!("lion".parse::<AnimalKind>().unwrap(), AnimalKind::Lion);
    /// assert!("dragon".parse::<AnimalKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dog" => Ok(AnimalKind::Dog),
            "cat" => Ok(AnimalKind::Cat),
            "lion" => Ok(AnimalKind::Lion),
            "wolf" => Ok(AnimalKind::Wolf),
            other => Err(Error::InvalidArgument(format!(
                "unknown animal kind `{other}`"
            ))),
        }
    }
}

/// A concrete animal, optionally of a named breed (dogs and cats only, as in
/// the catalogue).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    kind: AnimalKind,
    breed: Option<String>,
}

impl Animal {
    /// Create an animal with no breed.
    pub fn new(kind: AnimalKind) -> Self {
        Animal { kind, breed: None }
    }

    /// Create an animal of a specific breed.
    pub fn with_breed(kind: AnimalKind, breed: &str) -> Self {
        Animal {
            kind,
            breed: Some(breed.to_string()),
        }
    }

    /// The kind tag.
    pub fn kind(&self) -> AnimalKind {
        self.kind
    }

    /// The breed, if one was given.
    pub fn breed(&self) -> Option<&str> {
        self.breed.as_deref()
    }

    /// The sound this animal makes.
    pub fn sound(&self) -> &'static str {
        self.kind.sound()
    }

    /// Where this animal lives.
    pub fn habitat(&self) -> &'static str {
        self.kind.habitat()
    }

    /// Kind plus breed, e.g. `Dog (Beagle)`.
    pub fn type_name(&self) -> String {
        match &self.breed {
            Some(breed) => format!("{} ({breed})", self.kind),
            None => self.kind.to_string(),
        }
    }

    /// The introduction sentence of the catalogue's template method.
    pub fn describe(&self) -> String {
        format!(
            "This is a {} that says \"{}\" and lives in {}",
            self.type_name(),
            self.sound(),
            self.habitat()
        )
    }
}
