//! Shared test utilities for tender-db unit tests.

pub(crate) mod helpers {
    use crate::TenderDb;

    pub async fn test_db() -> TenderDb {
        TenderDb::open_local(":memory:").await.unwrap()
    }

    pub struct Directory {
        pub db: TenderDb,
        pub org_id: String,
        pub alice_id: String,
        pub bob_id: String,
    }

    /// `alice` is responsible for `Acme`; `bob` is not.
    pub async fn seeded_db() -> Directory {
        let db = test_db().await;
        let org = db.create_organization("Acme", None).await.unwrap();
        let alice = db.create_employee("alice", Some("Alice"), None).await.unwrap();
        let bob = db.create_employee("bob", None, None).await.unwrap();
        db.add_responsible(&org.id, &alice.id).await.unwrap();
        Directory {
            db,
            org_id: org.id,
            alice_id: alice.id,
            bob_id: bob.id,
        }
    }
}
