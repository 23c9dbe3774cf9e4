pub(crate) mod fixtures {
    use std::sync::Arc;

    use crate::memory::MemoryStore;

    /// One organization (`Acme`) with `alice` responsible for it; `bob` and
    /// `carol` are plain employees.
    pub(crate) struct Seeded {
        pub store: Arc<MemoryStore>,
        pub org_id: String,
        pub alice_id: String,
        pub bob_id: String,
        pub carol_id: String,
    }

    pub(crate) fn seeded_store() -> Seeded {
        let store = Arc::new(MemoryStore::new());
        let org = store.add_organization("Acme");
        let alice = store.add_employee("alice");
        let bob = store.add_employee("bob");
        let carol = store.add_employee("carol");
        store.add_responsible(&org.id, &alice.id);
        Seeded {
            store,
            org_id: org.id,
            alice_id: alice.id,
            bob_id: bob.id,
            carol_id: carol.id,
        }
    }
}
