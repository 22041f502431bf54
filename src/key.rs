//! Lookup keys for the value registry.

use std::any::TypeId;
use std::sync::Arc;

/// Key under which a value is stored and looked up.
///
/// A key wraps the [`TypeId`] of a `'static` type together with its
/// [`std::any::type_name`], the latter purely for diagnostics and error
/// messages. Any `'static` type can key an entry, including unsized
/// ones, so trait-object and smart-pointer types key directly:
///
/// ```rust
/// use solder_di::Key;
///
/// assert_eq!(Key::of::<String>(), Key::of::<String>());
/// assert_ne!(Key::of::<String>(), Key::of::<u32>());
/// assert!(Key::of::<u32>().name().contains("u32"));
/// ```
///
/// Equality and hashing compare the `TypeId` only; the name rides
/// along for display.
#[derive(Clone, Copy, Debug)]
pub struct Key {
    id: TypeId,
    name: &'static str,
}

impl Key {
    /// Builds the key for `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Key {
        Key {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying type identifier.
    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The type name, for display and error messages.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Key {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Key {}

impl std::hash::Hash for Key {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Returns the key under which interface registrations are stored.
///
/// Consumers declare an interface dependency as `Arc<dyn Trait>`, so
/// that is the canonical key type: `interface_of::<dyn Trait>()` equals
/// `Key::of::<Arc<dyn Trait>>()`. [`Registry::map_as`] keys its entries
/// this way internally; callers working on the raw [`Registry::set`] /
/// [`Registry::resolve`] tier can use it to target the same entries.
///
/// ```rust
/// use std::sync::Arc;
/// use solder_di::{interface_of, Key};
///
/// trait Codec: Send + Sync {}
///
/// assert_eq!(interface_of::<dyn Codec>(), Key::of::<Arc<dyn Codec>>());
/// ```
///
/// # Panics
///
/// Panics when `I` is not a trait-object type. Passing a concrete type
/// here is programmer error, not a recoverable condition:
///
/// ```should_panic
/// use solder_di::interface_of;
///
/// struct Plain;
/// interface_of::<Plain>();
/// ```
///
/// The check leans on the `dyn ` prefix of [`std::any::type_name`], the
/// only runtime evidence of trait-object-ness the language exposes.
///
/// [`Registry::map_as`]: crate::Registry::map_as
/// [`Registry::set`]: crate::Registry::set
/// [`Registry::resolve`]: crate::Registry::resolve
pub fn interface_of<I: ?Sized + 'static>() -> Key {
    if !std::any::type_name::<I>().starts_with("dyn ") {
        panic!(
            "interface_of requires a trait-object type, got `{}`; call it as interface_of::<dyn MyTrait>()",
            std::any::type_name::<I>()
        );
    }
    Key::of::<Arc<I>>()
}
