//! Struct field population from a registry.

use crate::error::InjectResult;
use crate::registry::Registry;

/// Types whose fields can be populated from a [`Registry`].
///
/// [`Registry::apply`] delegates to [`inject`](Inject::inject), which
/// loads each injectable field by its own type. Implementations are
/// usually generated with [`inject_fields!`](crate::inject_fields);
/// hand-written impls are useful when a field needs something other
/// than a plain [`Registry::load`], such as a fallback default:
///
/// ```rust
/// use solder_di::{Inject, InjectResult, Registry};
///
/// struct Server {
///     addr: String,
///     port: u16,
/// }
///
/// impl Inject for Server {
///     fn inject(&mut self, registry: &Registry) -> InjectResult<()> {
///         registry.load(&mut self.addr)?;
///         self.port = registry.value::<u16>().unwrap_or(8080);
///         Ok(())
///     }
/// }
///
/// let registry = Registry::new();
/// registry.map("0.0.0.0".to_string());
///
/// let mut server = Server { addr: String::new(), port: 0 };
/// registry.apply(&mut server).unwrap();
/// assert_eq!(server.addr, "0.0.0.0");
/// assert_eq!(server.port, 8080);
/// ```
pub trait Inject {
    /// Fills the injectable fields of `self` from `registry`.
    ///
    /// Stops at the first field that fails to load, leaving fields
    /// before it populated and fields after it untouched.
    fn inject(&mut self, registry: &Registry) -> InjectResult<()>;
}

/// Implements [`Inject`] for a struct by naming its injectable fields.
///
/// Listed fields are loaded from the registry in the order written;
/// fields left off the list are skipped entirely, even when a value of
/// their type is registered. Each listed field's type must be
/// `Any + Send + Sync + Clone`.
///
/// ```rust
/// use solder_di::{inject_fields, Registry};
///
/// #[derive(Default)]
/// struct Pipeline {
///     name: String,
///     width: u32,
///     comment: String, // not listed, never touched
/// }
///
/// inject_fields!(Pipeline { name, width });
///
/// let registry = Registry::new();
/// registry.map("resize".to_string()).map(640u32);
///
/// let mut pipeline = Pipeline::default();
/// registry.apply(&mut pipeline).unwrap();
/// assert_eq!(pipeline.name, "resize");
/// assert_eq!(pipeline.width, 640);
/// assert_eq!(pipeline.comment, "");
/// ```
#[macro_export]
macro_rules! inject_fields {
    ($target:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::Inject for $target {
            fn inject(
                &mut self,
                registry: &$crate::Registry,
            ) -> $crate::InjectResult<()> {
                $(registry.load(&mut self.$field)?;)+
                Ok(())
            }
        }
    };
}
