#![no_main]

use libfuzzer_sys::fuzz_target;
use solder_di::{InjectError, Key, Registry};
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }

    let registry = Registry::new();

    // Use first 4 bytes to determine the registration pattern
    let pattern = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);

    // Use next 4 bytes for the registered value
    let value = i32::from_le_bytes([data[4], data[5], data[6], data[7]]);

    match pattern % 6 {
        0 => {
            // Concrete registration round-trips
            registry.map(TestService { value });

            let service = registry.value::<TestService>().unwrap();
            assert_eq!(service.value, value);
            assert_eq!(registry.len(), 1);
        }
        1 => {
            // Multiple registrations of the same type (last wins)
            registry.map(TestService { value: value / 2 });
            registry.map(TestService { value });

            let service = registry.value::<TestService>().unwrap();
            assert_eq!(service.value, value);
            assert_eq!(registry.len(), 1);
        }
        2 => {
            // Interface registration
            registry.map_as::<dyn TestTrait>(Arc::new(TestServiceImpl { value }));

            let service = registry.value::<Arc<dyn TestTrait>>().unwrap();
            assert_eq!(service.get_value(), value);

            // The concrete type never shows up on its own.
            assert!(registry.value::<Arc<TestServiceImpl>>().is_none());
        }
        3 => {
            // Raw entry with a matching payload
            registry.set(Key::of::<i32>(), Arc::new(value));

            assert_eq!(registry.value::<i32>(), Some(value));
        }
        4 => {
            // Raw entry with a mismatched payload: resolvable by key,
            // rejected by every typed access
            registry.set(Key::of::<String>(), Arc::new(value));

            assert!(registry.resolve(&Key::of::<String>()).is_some());
            assert!(registry.value::<String>().is_none());

            let mut target = String::new();
            match registry.load(&mut target) {
                Err(InjectError::CannotSet(_)) => {}
                other => panic!("expected CannotSet, got {:?}", other),
            }
            assert!(target.is_empty());
        }
        5 => {
            // Reset drops everything
            registry.map(TestService { value });
            registry.map(value);
            registry.reset();

            assert!(registry.is_empty());
            assert!(registry.value::<TestService>().is_none());
            assert!(registry.value::<i32>().is_none());
        }
        _ => unreachable!(),
    }
});

#[derive(Debug, Clone)]
struct TestService {
    value: i32,
}

trait TestTrait: Send + Sync {
    fn get_value(&self) -> i32;
}

#[derive(Debug)]
struct TestServiceImpl {
    value: i32,
}

impl TestTrait for TestServiceImpl {
    fn get_value(&self) -> i32 {
        self.value
    }
}
