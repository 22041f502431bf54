//! Property-based tests for value resolution.
//!
//! These tests verify that resolution behavior follows expected
//! patterns regardless of the specific values or chain shape used.

use proptest::prelude::*;
use solder_di::Registry;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
struct ServiceA {
    value: String,
}

#[derive(Debug, Clone)]
struct ServiceB {
    number: u64,
}

// Property: repeated resolutions of one registration agree with each
// other and with the registered value.
proptest! {
    #[test]
    fn resolution_consistency(service_value in "\\PC{0,50}") {
        let registry = Registry::new();
        registry.map(ServiceA { value: service_value.clone() });

        let resolved1 = registry.value::<ServiceA>().unwrap();
        let resolved2 = registry.value::<ServiceA>().unwrap();
        let resolved3 = registry.value::<ServiceA>().unwrap();

        prop_assert_eq!(&resolved1, &resolved2);
        prop_assert_eq!(&resolved2, &resolved3);
        prop_assert_eq!(&resolved1.value, &service_value);
    }
}

// Property: presence of a registration decides every access path the
// same way.
proptest! {
    #[test]
    fn presence_decides_all_access_paths(register in any::<bool>()) {
        let registry = Registry::new();

        if register {
            registry.map(ServiceB { number: 42 });
        }

        let via_value = registry.value::<ServiceB>();

        let mut target = ServiceB { number: 0 };
        let via_load = registry.load(&mut target);

        let via_invoke = registry.invoke(|b: ServiceB| b.number);

        prop_assert_eq!(via_value.is_some(), register);
        prop_assert_eq!(via_load.is_ok(), register);
        prop_assert_eq!(via_invoke.is_ok(), register);

        if register {
            prop_assert_eq!(target.number, 42);
            prop_assert_eq!(via_invoke.unwrap(), 42);
        } else {
            prop_assert_eq!(target.number, 0);
        }
    }
}

// Property: a value registered at any depth of a parent chain is
// visible from the leaf.
proptest! {
    #[test]
    fn chain_depth_resolution(depth in 1usize..6, position in 0usize..6, number in any::<u64>()) {
        let position = position % depth;

        // Build a chain root..leaf, planting the value at `position`
        // levels above the leaf.
        let mut registries = Vec::new();
        for _ in 0..depth {
            registries.push(Arc::new(Registry::new()));
        }
        for i in (1..depth).rev() {
            // registries[0] is the leaf; each links to the next one up.
            registries[i - 1].set_parent(registries[i].clone());
        }

        registries[position].map(ServiceB { number });

        let leaf = &registries[0];
        let resolved = leaf.value::<ServiceB>();
        prop_assert!(resolved.is_some());
        prop_assert_eq!(resolved.unwrap().number, number);
    }
}

// Property: the nearest registration in the chain wins.
proptest! {
    #[test]
    fn nearest_registration_wins(
        leaf_value in any::<u64>(),
        parent_value in any::<u64>(),
        register_leaf in any::<bool>(),
    ) {
        let parent = Arc::new(Registry::new());
        parent.map(ServiceB { number: parent_value });

        let leaf = Registry::new();
        leaf.set_parent(parent);
        if register_leaf {
            leaf.map(ServiceB { number: leaf_value });
        }

        let expected = if register_leaf { leaf_value } else { parent_value };
        prop_assert_eq!(leaf.value::<ServiceB>().unwrap().number, expected);
    }
}

// Property: a miss everywhere in the chain is a plain None, at any depth.
proptest! {
    #[test]
    fn absent_everywhere_is_none(depth in 1usize..6) {
        let mut leaf = Arc::new(Registry::new());
        for _ in 1..depth {
            let child = Arc::new(Registry::new());
            child.set_parent(leaf.clone());
            leaf = child;
        }

        prop_assert_eq!(leaf.value::<ServiceB>().map(|b| b.number), None);

        let mut target = ServiceB { number: 7 };
        prop_assert!(leaf.load(&mut target).is_err());
        prop_assert_eq!(target.number, 7);
    }
}

// Property: trait resolution returns the registered implementation and
// shares its allocation across resolutions.
trait TestTrait: Send + Sync {
    fn get_id(&self) -> u32;
}

#[derive(Debug)]
struct TraitImpl {
    id: u32,
}

impl TestTrait for TraitImpl {
    fn get_id(&self) -> u32 {
        self.id
    }
}

proptest! {
    #[test]
    fn trait_resolution_properties(trait_id in 1u32..1000) {
        let registry = Registry::new();
        registry.map_as::<dyn TestTrait>(Arc::new(TraitImpl { id: trait_id }));

        let trait1 = registry.value::<Arc<dyn TestTrait>>().unwrap();
        let trait2 = registry.value::<Arc<dyn TestTrait>>().unwrap();

        prop_assert!(Arc::ptr_eq(&trait1, &trait2));
        prop_assert_eq!(trait1.get_id(), trait_id);
        prop_assert_eq!(trait2.get_id(), trait_id);
    }
}

// Property: resolution through a chain never mutates any registry in it.
proptest! {
    #[test]
    fn resolution_is_read_only(number in any::<u64>(), lookups in 1usize..10) {
        let parent = Arc::new(Registry::new());
        parent.map(ServiceB { number });

        let leaf = Registry::new();
        leaf.set_parent(parent.clone());

        for _ in 0..lookups {
            prop_assert!(leaf.value::<ServiceB>().is_some());
        }

        prop_assert_eq!(leaf.len(), 0);
        prop_assert_eq!(parent.len(), 1);
    }
}
