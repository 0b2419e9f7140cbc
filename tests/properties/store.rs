//! Property tests for store round-trips and write-once behavior.

use std::collections::HashMap;

use proptest::prelude::*;

use handoff::{
    Encoding, FileSystemIntermediatesManager, InMemoryIntermediatesManager,
    IntermediatesManager, StepOutputHandle,
};

fn handle_strategy() -> impl Strategy<Value = StepOutputHandle> {
    ("[a-c]", "[x-z]").prop_map(|(s, o)| StepOutputHandle::new(s, o).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Raw payloads come back byte-exact.
    #[test]
    fn property_bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemIntermediatesManager::new(dir.path()).unwrap();
        let h = StepOutputHandle::new("step", "blob").unwrap();

        store.set_bytes(&h, &bytes).unwrap();
        prop_assert_eq!(store.get_bytes(&h).unwrap(), bytes);
    }

    /// PROPERTY: Strings survive every shipped encoding.
    #[test]
    fn property_encodings_round_trip(text in "[ -~]{0,64}", idx in 0usize..3) {
        let encoding = [Encoding::Json, Encoding::JsonPretty, Encoding::Yaml][idx];
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemIntermediatesManager::with_codec(dir.path(), encoding)
            .unwrap()
            .with_fsync(false);
        let h = StepOutputHandle::new("step", "text").unwrap();

        store.set_value(&h, &text).unwrap();
        prop_assert_eq!(store.get_value::<String>(&h).unwrap(), text);
    }

    /// PROPERTY: For any write sequence, the store holds the first value
    /// written per handle, and exactly the later writes to a taken handle
    /// fail. Both backends agree.
    #[test]
    fn property_first_write_wins(
        writes in proptest::collection::vec((handle_strategy(), any::<i32>()), 1..24)
    ) {
        let dir = tempfile::tempdir().unwrap();
        let fs_store = FileSystemIntermediatesManager::new(dir.path())
            .unwrap()
            .with_fsync(false);
        let mem_store = InMemoryIntermediatesManager::<i32>::new();
        let mut expected: HashMap<StepOutputHandle, i32> = HashMap::new();

        for (h, v) in &writes {
            let first = !expected.contains_key(h);
            let fs_result = IntermediatesManager::<i32>::set_value(&fs_store, h, *v);
            let mem_result = mem_store.set_value(h, *v);
            prop_assert_eq!(fs_result.is_ok(), first);
            prop_assert_eq!(mem_result.is_ok(), first);
            expected.entry(h.clone()).or_insert(*v);
        }

        for (h, v) in &expected {
            prop_assert_eq!(fs_store.get_value::<i32>(h).unwrap(), *v);
            prop_assert_eq!(mem_store.get_value(h).unwrap(), *v);
        }
        prop_assert_eq!(fs_store.handles().unwrap().len(), expected.len());
        prop_assert_eq!(mem_store.len(), expected.len());
    }
}
