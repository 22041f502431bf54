//! # solder-di
//!
//! Runtime dependency injection for Rust: a thread-safe, type-keyed
//! value registry with struct field population and call-site argument
//! injection.
//!
//! ## Features
//!
//! - **Type-keyed storage**: One value per type, last registration wins
//! - **Interface registrations**: Serve a value as `Arc<dyn Trait>` with explicit mapping
//! - **Field injection**: Populate struct fields from the registry with a one-line macro
//! - **Function invocation**: Call plain functions and closures with resolved arguments
//! - **Registry chaining**: Child registries fall back to a shared parent on miss
//! - **Thread-safe**: All operations take `&self`; share a registry behind an `Arc`
//!
//! ## Quick Start
//!
//! ```rust
//! use solder_di::Registry;
//! use std::sync::Arc;
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! struct English;
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".to_string()
//!     }
//! }
//!
//! // Register a concrete value and an interface implementation.
//! let registry = Registry::new();
//! registry.map("world".to_string());
//! registry.map_as::<dyn Greeter>(Arc::new(English));
//!
//! // Invoke a function; its arguments are resolved by type.
//! let line = registry
//!     .invoke(|name: String, greeter: Arc<dyn Greeter>| {
//!         format!("{}, {}", greeter.greet(), name)
//!     })
//!     .unwrap();
//! assert_eq!(line, "hello, world");
//! ```
//!
//! ## Interface Registrations
//!
//! A value registered with [`Registry::map`] is visible under its
//! concrete type only. To serve it behind a trait, register it with
//! [`Registry::map_as`]; consumers then declare `Arc<dyn Trait>`:
//!
//! ```rust
//! use solder_di::Registry;
//! use std::sync::Arc;
//!
//! trait Store: Send + Sync {
//!     fn get(&self, key: &str) -> Option<String>;
//! }
//!
//! struct MemStore;
//! impl Store for MemStore {
//!     fn get(&self, _key: &str) -> Option<String> {
//!         None
//!     }
//! }
//!
//! let registry = Registry::new();
//! registry.map_as::<dyn Store>(Arc::new(MemStore));
//!
//! let store = registry.value::<Arc<dyn Store>>().unwrap();
//! assert_eq!(store.get("missing"), None);
//! ```
//!
//! ## Field Injection
//!
//! ```rust
//! use solder_di::{inject_fields, Registry};
//!
//! #[derive(Default)]
//! struct Worker {
//!     banner: String,
//!     retries: u32,
//! }
//!
//! inject_fields!(Worker { banner, retries });
//!
//! let registry = Registry::new();
//! registry.map("ready".to_string()).map(3u32);
//!
//! let mut worker = Worker::default();
//! registry.apply(&mut worker).unwrap();
//! assert_eq!(worker.banner, "ready");
//! assert_eq!(worker.retries, 3);
//! ```
//!
//! ## Registry Chaining
//!
//! ```rust
//! use std::sync::Arc;
//! use solder_di::Registry;
//!
//! let app = Arc::new(Registry::new());
//! app.map(8080u16);
//!
//! let request = Registry::new();
//! request.set_parent(app.clone());
//! request.map("req-1".to_string());
//!
//! // Local entries win; misses fall through to the parent.
//! assert_eq!(request.value::<u16>(), Some(8080));
//! assert_eq!(request.value::<String>().as_deref(), Some("req-1"));
//! assert_eq!(app.value::<String>(), None);
//! ```

// Module declarations
pub mod error;
pub mod inject;
pub mod invoke;
pub mod key;
pub mod registry;

// Re-export core types
pub use error::{InjectError, InjectResult};
pub use inject::Inject;
pub use invoke::{BoxedArgs, FastInvoker, FromRegistry, Handler};
pub use key::{interface_of, Key};
pub use registry::{BoxedValue, Registry};
