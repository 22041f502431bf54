//! The type-keyed value registry.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{InjectError, InjectResult};
use crate::inject::Inject;
use crate::invoke::Handler;
use crate::key::{interface_of, Key};

/// Type-erased shared value, as stored by the registry.
///
/// Every entry is held behind an `Arc`, so registration never copies
/// and resolution hands out cheap clones of the same allocation.
pub type BoxedValue = Arc<dyn Any + Send + Sync>;

#[cfg(feature = "ahash")]
type KeyMap = HashMap<Key, BoxedValue, ahash::RandomState>;
#[cfg(not(feature = "ahash"))]
type KeyMap = HashMap<Key, BoxedValue>;

struct Inner {
    values: KeyMap,
    parent: Option<Arc<Registry>>,
}

/// A thread-safe store of values keyed by type, with optional chaining
/// to a parent registry.
///
/// At most one value lives under each key; registering again under the
/// same type replaces the previous entry. Lookups that miss locally
/// walk the parent chain. All operations take `&self`, so a registry
/// shared behind an [`Arc`] can be registered into and resolved from
/// concurrently.
///
/// # Examples
///
/// ```rust
/// use solder_di::Registry;
///
/// let registry = Registry::new();
/// registry.map("dev".to_string()).map(42u32);
///
/// assert_eq!(registry.value::<String>().as_deref(), Some("dev"));
/// assert_eq!(registry.value::<u32>(), Some(42));
/// assert_eq!(registry.value::<bool>(), None);
/// ```
pub struct Registry {
    inner: RwLock<Inner>,
}

impl Registry {
    /// Creates an empty registry with no parent.
    pub fn new() -> Self {
        Registry {
            inner: RwLock::new(Inner {
                values: KeyMap::default(),
                parent: None,
            }),
        }
    }

    /// Registers `value` under its own concrete type.
    ///
    /// Replaces any previous value of the same type. Returns `&self`
    /// for chaining. Registering an `Arc<T>` stores the handle itself,
    /// so every resolver shares one allocation:
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use solder_di::Registry;
    ///
    /// struct Pool { size: usize }
    ///
    /// let registry = Registry::new();
    /// let pool = Arc::new(Pool { size: 8 });
    /// registry.map(pool.clone()).map(10u32).map(11u32);
    ///
    /// let resolved = registry.value::<Arc<Pool>>().unwrap();
    /// assert!(Arc::ptr_eq(&pool, &resolved));
    /// assert_eq!(registry.value::<u32>(), Some(11)); // last one wins
    /// ```
    pub fn map<T: Any + Send + Sync>(&self, value: T) -> &Self {
        self.inner
            .write()
            .values
            .insert(Key::of::<T>(), Arc::new(value));
        self
    }

    /// Registers `value` under the interface type `I` instead of its
    /// concrete type.
    ///
    /// The entry is keyed as `Arc<I>`, the `Arc<dyn Trait>` handle type
    /// consumers request (see [`interface_of`](crate::interface_of)). A plain [`map`](Registry::map) never makes a
    /// value visible under a trait it implements; each interface a
    /// value should serve is registered explicitly.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use solder_di::Registry;
    ///
    /// trait Clock: Send + Sync {
    ///     fn now(&self) -> u64;
    /// }
    ///
    /// struct FixedClock(u64);
    /// impl Clock for FixedClock {
    ///     fn now(&self) -> u64 {
    ///         self.0
    ///     }
    /// }
    ///
    /// let registry = Registry::new();
    /// registry.map_as::<dyn Clock>(Arc::new(FixedClock(99)));
    ///
    /// let clock = registry.value::<Arc<dyn Clock>>().unwrap();
    /// assert_eq!(clock.now(), 99);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when `I` is not a trait-object type, for the same reason
    /// [`interface_of`](crate::interface_of) does.
    pub fn map_as<I: ?Sized + Any + Send + Sync>(&self, value: Arc<I>) -> &Self {
        let key = interface_of::<I>();
        self.inner.write().values.insert(key, Arc::new(value));
        self
    }

    /// Stores a pre-erased value under an explicit key.
    ///
    /// This is the raw tier beneath [`map`](Registry::map) and
    /// [`map_as`](Registry::map_as); nothing checks that the key and
    /// the value's dynamic type agree. A mismatched entry resolves by
    /// key but fails every typed access with
    /// [`CannotSet`](crate::InjectError::CannotSet).
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use solder_di::{Key, Registry};
    ///
    /// let registry = Registry::new();
    /// registry.set(Key::of::<u64>(), Arc::new(7u64));
    ///
    /// assert_eq!(registry.value::<u64>(), Some(7));
    /// ```
    pub fn set(&self, key: Key, value: BoxedValue) -> &Self {
        self.inner.write().values.insert(key, value);
        self
    }

    /// Looks up the value stored under `key`, consulting parents on a
    /// local miss.
    ///
    /// Returns the type-erased entry; [`value`](Registry::value) and
    /// [`load`](Registry::load) are the typed front ends. The local
    /// lock is released before the parent is consulted, so a deep
    /// chain never holds more than one registry's lock at a time.
    ///
    /// ```rust
    /// use solder_di::{Key, Registry};
    ///
    /// let registry = Registry::new();
    /// registry.map(0.5f64);
    ///
    /// assert!(registry.resolve(&Key::of::<f64>()).is_some());
    /// assert!(registry.resolve(&Key::of::<bool>()).is_none());
    /// ```
    pub fn resolve(&self, key: &Key) -> Option<BoxedValue> {
        let inner = self.inner.read();
        if let Some(found) = inner.values.get(key) {
            return Some(found.clone());
        }
        let parent = inner.parent.clone();
        drop(inner);
        parent.and_then(|p| p.resolve(key))
    }

    /// Returns a clone of the value registered under `T`, or `None`
    /// when nothing (or a mismatched raw entry) is stored there.
    ///
    /// ```rust
    /// use solder_di::Registry;
    ///
    /// let registry = Registry::new();
    /// registry.map(10u32);
    ///
    /// assert_eq!(registry.value::<u32>(), Some(10));
    /// assert_eq!(registry.value::<i32>(), None);
    /// ```
    pub fn value<T: Any + Send + Sync + Clone>(&self) -> Option<T> {
        self.resolve_value::<T>().ok()
    }

    /// Resolves a value of type `T` and writes it into `target`.
    ///
    /// Fails with [`NotFound`](crate::InjectError::NotFound) when no
    /// entry exists under `T` anywhere in the chain, and with
    /// [`CannotSet`](crate::InjectError::CannotSet) when a raw entry
    /// under `T`'s key holds some other type. On failure `target` is
    /// left untouched.
    ///
    /// ```rust
    /// use solder_di::Registry;
    ///
    /// let registry = Registry::new();
    /// registry.map("primary".to_string());
    ///
    /// let mut target = String::new();
    /// registry.load(&mut target).unwrap();
    /// assert_eq!(target, "primary");
    /// ```
    pub fn load<T: Any + Send + Sync + Clone>(&self, target: &mut T) -> InjectResult<()> {
        *target = self.resolve_value::<T>()?;
        Ok(())
    }

    /// Populates the injectable fields of `target` from this registry.
    ///
    /// Fields are loaded in declaration order and the first failure
    /// aborts the pass, leaving earlier fields populated and later
    /// ones untouched. See [`Inject`] and
    /// [`inject_fields!`](crate::inject_fields) for marking fields.
    ///
    /// ```rust
    /// use solder_di::{inject_fields, Registry};
    ///
    /// #[derive(Default)]
    /// struct Worker {
    ///     banner: String,
    ///     retries: u32,
    /// }
    ///
    /// inject_fields!(Worker { banner, retries });
    ///
    /// let registry = Registry::new();
    /// registry.map("ready".to_string()).map(3u32);
    ///
    /// let mut worker = Worker::default();
    /// registry.apply(&mut worker).unwrap();
    /// assert_eq!(worker.banner, "ready");
    /// assert_eq!(worker.retries, 3);
    /// ```
    pub fn apply<T: Inject + ?Sized>(&self, target: &mut T) -> InjectResult<()> {
        target.inject(self)
    }

    /// Calls `handler` with arguments resolved from this registry.
    ///
    /// Every parameter is resolved before the call; if any is missing
    /// the handler never runs and the error names the first missing
    /// type. The handler's return value is passed through.
    ///
    /// ```rust
    /// use solder_di::Registry;
    ///
    /// let registry = Registry::new();
    /// registry.map(2u32).map(3u64);
    ///
    /// let sum = registry.invoke(|a: u32, b: u64| a as u64 + b).unwrap();
    /// assert_eq!(sum, 5);
    /// ```
    pub fn invoke<Args, F>(&self, handler: F) -> InjectResult<F::Output>
    where
        F: Handler<Args>,
    {
        handler.call(self)
    }

    /// Removes all local entries and detaches the parent.
    ///
    /// ```rust
    /// use solder_di::Registry;
    ///
    /// let registry = Registry::new();
    /// registry.map(1u8);
    /// registry.reset();
    ///
    /// assert_eq!(registry.value::<u8>(), None);
    /// assert!(registry.is_empty());
    /// ```
    pub fn reset(&self) {
        let mut inner = self.inner.write();
        inner.values.clear();
        inner.parent = None;
    }

    /// Chains this registry to `parent`, replacing any previous parent.
    ///
    /// Lookups that miss locally fall through to the parent (and its
    /// parents in turn); local entries always win. The typical shape is
    /// a long-lived application registry behind short-lived child
    /// registries:
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use solder_di::Registry;
    ///
    /// let shared = Arc::new(Registry::new());
    /// shared.map(8080u16);
    ///
    /// let request = Registry::new();
    /// request.set_parent(shared.clone());
    /// request.map("req-1".to_string());
    ///
    /// assert_eq!(request.value::<u16>(), Some(8080));
    /// assert_eq!(request.value::<String>().as_deref(), Some("req-1"));
    /// ```
    pub fn set_parent(&self, parent: Arc<Registry>) -> &Self {
        self.inner.write().parent = Some(parent);
        self
    }

    /// Number of locally registered entries, parents excluded.
    pub fn len(&self) -> usize {
        self.inner.read().values.len()
    }

    /// True when no local entries are registered.
    pub fn is_empty(&self) -> bool {
        self.inner.read().values.is_empty()
    }

    /// Renders the locally registered type names, sorted, one per
    /// line, for debugging registry contents.
    #[cfg(feature = "diagnostics")]
    pub fn debug_string(&self) -> String {
        let inner = self.inner.read();
        let mut names: Vec<&'static str> = inner.values.keys().map(|k| k.name()).collect();
        names.sort_unstable();

        let mut out = String::from("=== Registry ===\n");
        for name in names {
            out.push_str("  ");
            out.push_str(name);
            out.push('\n');
        }
        if inner.parent.is_some() {
            out.push_str("  (chained to parent)\n");
        }
        out
    }

    /// Typed resolution shared by `value`, `load` and argument
    /// extraction: exact key lookup, then downcast, then clone out.
    pub(crate) fn resolve_value<T: Any + Send + Sync + Clone>(&self) -> InjectResult<T> {
        let key = Key::of::<T>();
        match self.resolve(&key) {
            Some(found) => match found.downcast_ref::<T>() {
                Some(resolved) => Ok(resolved.clone()),
                None => Err(InjectError::CannotSet(key.name())),
            },
            None => Err(InjectError::NotFound(key.name())),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}
