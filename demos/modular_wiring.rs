//! Example: Modular registry wiring
//!
//! This example demonstrates how to organize registrations into
//! modules, either as plain wiring functions or as extension traits
//! on the registry.

use solder_di::Registry;
use std::sync::Arc;

// ===== Shared Configuration =====

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub api_key: String,
    pub max_connections: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "postgresql://localhost:5432/app".to_string(),
            api_key: "dev-api-key".to_string(),
            max_connections: 10,
        }
    }
}

// ===== Database Module =====

#[derive(Debug)]
pub struct Database {
    pub connection_string: String,
    pub max_connections: usize,
}

impl Database {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            connection_string: config.database_url.clone(),
            max_connections: config.max_connections,
        }
    }

    pub fn connect(&self) -> String {
        format!("Connected to {}", self.connection_string)
    }
}

pub fn wire_database(registry: &Registry) {
    let config = registry
        .value::<Arc<AppConfig>>()
        .expect("wire the config before the database module");
    registry.map(Arc::new(Database::new(&config)));
}

// ===== User Module =====

#[derive(Debug)]
pub struct UserRepository {
    pub database: Arc<Database>,
}

impl UserRepository {
    pub fn find_user(&self, id: u32) -> String {
        format!("User {} from {}", id, self.database.connect())
    }
}

pub fn wire_users(registry: &Registry) {
    let database = registry
        .value::<Arc<Database>>()
        .expect("wire the database module before the user module");
    registry.map(Arc::new(UserRepository { database }));
}

// ===== API Module, as an extension trait =====

pub trait ApiWiring {
    fn wire_api(&self) -> &Self;
}

#[derive(Debug)]
pub struct ApiClient {
    pub api_key: String,
}

impl ApiClient {
    pub fn call_api(&self) -> String {
        format!("API call with key: {}", self.api_key)
    }
}

impl ApiWiring for Registry {
    fn wire_api(&self) -> &Self {
        let config = self
            .value::<Arc<AppConfig>>()
            .expect("wire the config before the API module");
        self.map(Arc::new(ApiClient {
            api_key: config.api_key.clone(),
        }))
    }
}

// ===== Application entry points =====

fn process_request(
    user_id: u32,
    users: Arc<UserRepository>,
    api: Arc<ApiClient>,
) -> String {
    format!("{} | {}", users.find_user(user_id), api.call_api())
}

fn main() {
    println!("=== Modular Wiring Example ===\n");

    println!("1. Wiring the registry from modules:");
    let registry = Registry::new();
    registry.map(Arc::new(AppConfig::default()));
    wire_database(&registry);
    wire_users(&registry);
    registry.wire_api();
    println!("   {} entries registered\n", registry.len());

    println!("2. Invoking an entry point with injected arguments:");
    let report = registry
        .invoke(|users: Arc<UserRepository>, api: Arc<ApiClient>| {
            process_request(123, users, api)
        })
        .unwrap();
    println!("   Result: {}\n", report);

    println!("3. Re-wiring with a different configuration:");
    let registry = Registry::new();
    registry.map(Arc::new(AppConfig {
        database_url: "sqlite:///tmp/app.db".to_string(),
        api_key: "owned-api-key".to_string(),
        max_connections: 5,
    }));
    wire_database(&registry);
    wire_users(&registry);
    registry.wire_api();

    let report = registry
        .invoke(|users: Arc<UserRepository>, api: Arc<ApiClient>| {
            process_request(111, users, api)
        })
        .unwrap();
    println!("   Result: {}\n", report);

    println!("=== Summary ===");
    println!("- Wiring functions keep related registrations together");
    println!("- Extension traits give the same shape a fluent spelling");
    println!("- Entry points declare dependencies as plain parameters");
}
