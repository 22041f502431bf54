//! Function invocation with registry-supplied arguments.

use std::any::Any;

use crate::error::{InjectError, InjectResult};
use crate::key::Key;
use crate::registry::{BoxedValue, Registry};

/// Types an invocation argument can be extracted as.
///
/// Implemented for every `Any + Send + Sync + Clone` type through a
/// single blanket impl: a parameter resolves by exactly the type it
/// declares. Concrete parameters match [`map`](Registry::map) entries,
/// `Arc<dyn Trait>` parameters match [`map_as`](Registry::map_as)
/// entries, and there is no other rule.
pub trait FromRegistry: Sized {
    /// Resolves `Self` from the registry, walking the parent chain.
    fn from_registry(registry: &Registry) -> InjectResult<Self>;
}

impl<T: Any + Send + Sync + Clone> FromRegistry for T {
    #[inline]
    fn from_registry(registry: &Registry) -> InjectResult<T> {
        registry.resolve_value::<T>()
    }
}

/// A callable whose arguments a [`Registry`] can supply.
///
/// [`Registry::invoke`] accepts any `Handler`. Two families implement
/// it:
///
/// - Plain functions and closures of up to twelve parameters, each
///   parameter implementing [`FromRegistry`]. The `Args` parameter is
///   the tuple of their types and is inferred at the call site.
/// - [`FastInvoker`] types, which receive their arguments as one
///   pre-resolved list with `Args` fixed to [`BoxedArgs`].
///
/// Arguments are resolved before the call, in declaration order; a
/// missing one aborts with [`NotFound`](InjectError::NotFound) and the
/// callable never runs.
pub trait Handler<Args> {
    /// What the callable returns; passed through by `invoke`.
    type Output;

    /// Resolves the arguments from `registry` and performs the call.
    fn call(self, registry: &Registry) -> InjectResult<Self::Output>;
}

macro_rules! impl_handler {
    ($($ty:ident),*) => {
        impl<Func, Out, $($ty,)*> Handler<($($ty,)*)> for Func
        where
            Func: FnOnce($($ty),*) -> Out,
            $($ty: FromRegistry,)*
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn call(self, registry: &Registry) -> InjectResult<Out> {
                $(let $ty = <$ty as FromRegistry>::from_registry(registry)?;)*
                Ok((self)($($ty),*))
            }
        }
    };
}

impl_handler!();
impl_handler!(A1);
impl_handler!(A1, A2);
impl_handler!(A1, A2, A3);
impl_handler!(A1, A2, A3, A4);
impl_handler!(A1, A2, A3, A4, A5);
impl_handler!(A1, A2, A3, A4, A5, A6);
impl_handler!(A1, A2, A3, A4, A5, A6, A7);
impl_handler!(A1, A2, A3, A4, A5, A6, A7, A8);
impl_handler!(A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_handler!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
impl_handler!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
impl_handler!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);

/// Marker argument list selecting the fast calling convention.
///
/// Uninhabited: it exists only as the `Args` parameter that routes a
/// [`FastInvoker`] through [`Handler`] without overlapping the
/// function impls.
pub enum BoxedArgs {}

/// A callable that takes its arguments as one ordered, type-erased
/// list, skipping per-parameter extraction.
///
/// The generic [`Handler`] path extracts each argument with a typed
/// clone-out. A `FastInvoker` instead publishes its parameter keys up
/// front and receives the raw [`BoxedValue`]s in that order,
/// downcasting them itself. Fallible invokers return a `Result` as
/// their [`Output`](FastInvoker::Output); `invoke` then yields a
/// nested result, the outer layer for resolution and the inner one for
/// the call.
///
/// ```rust
/// use std::sync::Arc;
/// use solder_di::{BoxedValue, FastInvoker, Key, Registry};
///
/// struct Shout;
///
/// impl FastInvoker for Shout {
///     type Output = String;
///
///     fn param_keys() -> Vec<Key> {
///         vec![Key::of::<String>()]
///     }
///
///     fn call_fast(self, args: Vec<BoxedValue>) -> String {
///         let name = args[0].downcast_ref::<String>().unwrap();
///         format!("{}!", name.to_uppercase())
///     }
/// }
///
/// let registry = Registry::new();
/// registry.map("louder".to_string());
///
/// assert_eq!(registry.invoke(Shout).unwrap(), "LOUDER!");
/// ```
pub trait FastInvoker {
    /// What the call returns.
    type Output;

    /// Keys of the call's parameters, in declaration order.
    fn param_keys() -> Vec<Key>;

    /// Performs the call. `args` holds the resolved values in the same
    /// order as [`param_keys`](FastInvoker::param_keys), one per key.
    fn call_fast(self, args: Vec<BoxedValue>) -> Self::Output;
}

impl<F: FastInvoker> Handler<BoxedArgs> for F {
    type Output = F::Output;

    fn call(self, registry: &Registry) -> InjectResult<F::Output> {
        let keys = F::param_keys();
        let mut args = Vec::with_capacity(keys.len());
        for key in keys {
            match registry.resolve(&key) {
                Some(found) => args.push(found),
                None => return Err(InjectError::NotFound(key.name())),
            }
        }
        Ok(self.call_fast(args))
    }
}
