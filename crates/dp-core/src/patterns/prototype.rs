//! Prototype pattern.
//!
//! The C++ catalogue's `Prototype` base class exposes virtual copy
//! construction (`clone()` returning `unique_ptr<Prototype>`) so templates of
//! different concrete types can live behind one interface. The Rust analogue
//! is a trait whose `clone_prototype` method boxes a `Clone` of the concrete
//! type.
//!
//! The contract: the returned copy holds the same field values as the source
//! at the moment of cloning and shares no mutable state with it. Mutating
//! either side afterwards is never observable in the other. The caller takes
//! exclusive ownership of the copy.

use std::any::Any;

/// A template object supporting virtual copy construction.
///
/// Implementors are typically plain `Clone` structs; `clone_prototype` just
/// boxes a clone:
///
/// ```
/// use dp_core::Prototype;
/// use std::any::Any;
///
/// #[derive(Clone)]
/// struct Badge { label: String }
///
/// impl Prototype for Badge {
///     fn clone_prototype(&self) -> Box<dyn Prototype> {
///         Box::new(self.clone())
///     }
///     fn label(&self) -> &str {
///         &self.label
///     }
///     fn set_label(&mut self, label: &str) {
///         self.label = label.to_string();
///     }
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
///     fn into_any(self: Box<Self>) -> Box<dyn Any> {
///         self
///     }
/// }
///
/// let original = Badge { label: "visitor".into() };
/// let mut copy = original.clone_prototype();
/// copy.set_label("staff");
/// assert_eq!(original.label(), "visitor");
/// assert_eq!(copy.label(), "staff");
/// ```
pub trait Prototype: Send + Sync {
    /// Produce a new, independently-owned copy of this template.
    fn clone_prototype(&self) -> Box<dyn Prototype>;

    /// The human-readable label of this template.
    fn label(&self) -> &str;

    /// Rename this template. The one mutator shared by every template
    /// family, so freshly cloned objects can be customised behind the trait.
    fn set_label(&mut self, label: &str);

    /// Borrow this template as [`Any`] for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Convert a boxed template into [`Any`], allowing an owned downcast:
    /// `clone.into_any().downcast::<Document>()`.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl std::fmt::Debug for dyn Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prototype").field("label", &self.label()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Token {
        label: String,
        uses: u32,
    }

    impl Prototype for Token {
        fn clone_prototype(&self) -> Box<dyn Prototype> {
            Box::new(self.clone())
        }
        fn label(&self) -> &str {
            &self.label
        }
        fn set_label(&mut self, label: &str) {
            self.label = label.to_string();
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn into_any(self: Box<Self>) -> Box<dyn Any> {
            self
        }
    }

    #[test]
    fn clone_is_decoupled() {
        let mut original = Token { label: "t".into(), uses: 3 };
        let clone = original.clone_prototype();

        original.uses = 99;
        original.set_label("mutated");

        let clone = clone.into_any().downcast::<Token>().unwrap();
        assert_eq!(*clone, Token { label: "t".into(), uses: 3 });
    }

    #[test]
    fn downcast_by_reference() {
        let token = Token { label: "t".into(), uses: 0 };
        let boxed: Box<dyn Prototype> = token.clone_prototype();
        let back = boxed.as_any().downcast_ref::<Token>().unwrap();
        assert_eq!(back.uses, 0);
    }
}
