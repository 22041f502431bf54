//! Example: Request pipeline with per-request registries
//!
//! This example demonstrates the typical web-ish shape: one long-lived
//! application registry holding shared services, and a short-lived
//! child registry per request carrying request-local values.

use solder_di::{inject_fields, BoxedValue, FastInvoker, Key, Registry};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ===== Shared application services =====

pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("   [LOG] {}", message);
    }
}

#[derive(Debug)]
pub struct Metrics {
    handled: AtomicUsize,
}

impl Metrics {
    pub fn record(&self) -> usize {
        self.handled.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn total(&self) -> usize {
        self.handled.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub site_name: String,
}

// ===== Request-local values =====

#[derive(Debug, Clone, Default)]
pub struct RequestId(pub String);

#[derive(Debug, Clone)]
pub struct QueryString(pub String);

// ===== Handlers =====

fn greet_handler(
    id: RequestId,
    query: QueryString,
    config: AppConfig,
    logger: Arc<dyn Logger>,
) -> String {
    logger.log(&format!("{} handling query '{}'", id.0, query.0));
    format!("{} says: hello, {}!", config.site_name, query.0)
}

fn count_handler(id: RequestId, metrics: Arc<Metrics>, logger: Arc<dyn Logger>) -> usize {
    let total = metrics.record();
    logger.log(&format!("{} is request number {}", id.0, total));
    total
}

// A handler wired through field injection instead of parameters.
#[derive(Default)]
struct StatusReport {
    config: AppConfig,
    request: RequestId,
}

inject_fields!(StatusReport { config, request });

// A handler on the fast calling convention: it publishes its parameter
// keys up front and receives the stored values as one resolved list.
struct HealthCheck;

impl FastInvoker for HealthCheck {
    type Output = String;

    fn param_keys() -> Vec<Key> {
        vec![Key::of::<AppConfig>(), Key::of::<Arc<Metrics>>()]
    }

    fn call_fast(self, args: Vec<BoxedValue>) -> String {
        let config = args[0].downcast_ref::<AppConfig>().unwrap();
        let metrics = args[1].downcast_ref::<Arc<Metrics>>().unwrap();
        format!("{} healthy after {} requests", config.site_name, metrics.total())
    }
}

fn main() {
    println!("=== Request Pipeline Example ===\n");

    // The application registry lives for the whole process.
    let app = Arc::new(Registry::new());
    app.map(AppConfig {
        site_name: "solderworks".to_string(),
    });
    app.map(Arc::new(Metrics {
        handled: AtomicUsize::new(0),
    }));
    app.map_as::<dyn Logger>(Arc::new(ConsoleLogger));

    for (number, query) in ["world", "crater", "flux"].iter().enumerate() {
        println!("-- request {} --", number + 1);

        // Each request gets its own registry chained to the app.
        let request = Registry::new();
        request.set_parent(app.clone());
        request.map(RequestId(format!("req-{}", number + 1)));
        request.map(QueryString(query.to_string()));

        let body = request.invoke(greet_handler).unwrap();
        println!("   body: {}", body);

        let total = request.invoke(count_handler).unwrap();
        println!("   handled so far: {}", total);

        let mut report = StatusReport::default();
        request.apply(&mut report).unwrap();
        println!(
            "   report: {} via {}\n",
            report.request.0, report.config.site_name
        );
    }

    println!("-- health --");
    let health = app.invoke(HealthCheck).unwrap();
    println!("   {}\n", health);

    println!("=== Summary ===");
    println!("- Shared services live once in the app registry");
    println!("- Request registries shadow and extend it per call");
    println!("- Handlers stay plain functions with typed parameters");
    println!("- Fast invokers take their arguments as one resolved list");
}
