#![no_main]

use libfuzzer_sys::fuzz_target;
use solder_di::Registry;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }

    // Chain shape from the first bytes, planted value from the rest.
    let depth = (data[0] % 4) as usize + 1;
    let position = (data[1] % 4) as usize % depth;
    let shadow = data[2] & 1 == 1;
    let value = i32::from_le_bytes([data[4], data[5], data[6], data[7]]);

    // registries[0] is the leaf; each level links to the next one up.
    let mut registries = Vec::with_capacity(depth);
    for _ in 0..depth {
        registries.push(Arc::new(Registry::new()));
    }
    for i in (1..depth).rev() {
        registries[i - 1].set_parent(registries[i].clone());
    }

    registries[position].map(TestService { value });

    let leaf_value = value.wrapping_add(1);
    if shadow && position != 0 {
        registries[0].map(TestService { value: leaf_value });
    }

    let leaf = &registries[0];
    let resolved = leaf.value::<TestService>().unwrap();
    if shadow && position != 0 {
        // The local entry shadows the one planted higher up.
        assert_eq!(resolved.value, leaf_value);
    } else {
        assert_eq!(resolved.value, value);
    }

    // Lookups never copy entries downward.
    for (i, registry) in registries.iter().enumerate() {
        let expected = usize::from(i == position) + usize::from(i == 0 && shadow && position != 0);
        assert_eq!(registry.len(), expected);
    }

    // Resetting the planted level removes it from the leaf's view.
    registries[position].reset();
    if shadow && position != 0 {
        assert_eq!(leaf.value::<TestService>().unwrap().value, leaf_value);
    } else {
        assert!(leaf.value::<TestService>().is_none());
    }
});

#[derive(Debug, Clone)]
struct TestService {
    value: i32,
}
