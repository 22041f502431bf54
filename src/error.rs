//! Error types for registry operations.

use std::fmt;

/// Injection errors.
///
/// Represents the two recoverable failure conditions of the registry:
/// a lookup that found nothing, and a found entry that could not be
/// written into the requested destination type. Both carry the
/// [`type name`](std::any::type_name) of the value involved.
///
/// # Examples
///
/// ```rust
/// use solder_di::{InjectError, Registry};
///
/// // A lookup against an empty registry reports what was missing.
/// let registry = Registry::new();
/// let mut target = String::new();
/// match registry.load(&mut target) {
///     Err(InjectError::NotFound(type_name)) => {
///         assert_eq!(type_name, "alloc::string::String");
///     }
///     _ => unreachable!(),
/// }
/// ```
///
/// ```rust
/// use solder_di::InjectError;
///
/// let not_found = InjectError::NotFound("MyService");
/// let cannot_set = InjectError::CannotSet("alloc::string::String");
///
/// // Both errors implement Display.
/// println!("Error: {}", not_found);
/// println!("Error: {}", cannot_set);
/// ```
#[derive(Debug, Clone)]
pub enum InjectError {
    /// No value registered under the requested type, here or in any
    /// parent.
    NotFound(&'static str),
    /// A value was found but its stored type does not match the
    /// requested destination.
    CannotSet(&'static str),
}

impl fmt::Display for InjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectError::NotFound(name) => write!(f, "value not found: {}", name),
            InjectError::CannotSet(name) => write!(f, "value can not set: {}", name),
        }
    }
}

impl std::error::Error for InjectError {}

/// Result type for registry operations.
///
/// A convenience alias for `Result<T, InjectError>` used throughout the
/// crate, following the common pattern of a crate-specific result type
/// to cut signature boilerplate.
///
/// # Examples
///
/// ```rust
/// use solder_di::{InjectError, InjectResult};
///
/// fn wire_up() -> InjectResult<String> {
///     Ok("wired".to_string())
/// }
///
/// fn failing_operation() -> InjectResult<()> {
///     Err(InjectError::NotFound("some_dependency"))
/// }
///
/// match wire_up() {
///     Ok(value) => println!("Success: {}", value),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub type InjectResult<T> = Result<T, InjectError>;
