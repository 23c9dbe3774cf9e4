use std::collections::HashSet;
use std::sync::Arc;

use pretty_assertions::assert_eq;

use tender_core::entities::{NewBid, NewTender, Tender};
use tender_core::enums::{AuthorType, BidDecision, BidStatus, ServiceType, TenderStatus};
use tender_core::errors::ErrorKind;
use tender_core::listing::{Page, ServiceTypeFilter};
use tender_core::updates::tender::TenderUpdateBuilder;
use tender_engine::{BidManager, MemoryStore, TenderManager};

struct World {
    tenders: TenderManager<MemoryStore>,
    bids: BidManager<MemoryStore>,
    org_id: String,
    carol_id: String,
}

fn world() -> World {
    let store = Arc::new(MemoryStore::new());
    let org = store.add_organization("Acme");
    let alice = store.add_employee("alice");
    store.add_employee("bob");
    let carol = store.add_employee("carol");
    store.add_responsible(&org.id, &alice.id);
    World {
        tenders: TenderManager::new(Arc::clone(&store)),
        bids: BidManager::new(store),
        org_id: org.id,
        carol_id: carol.id,
    }
}

fn new_tender(w: &World, name: &str, service_type: ServiceType) -> NewTender {
    NewTender {
        name: name.into(),
        description: String::new(),
        service_type,
        organization_id: w.org_id.clone(),
        creator_username: "alice".into(),
    }
}

async fn publish(w: &World, name: &str, service_type: ServiceType) -> Tender {
    let tender = w
        .tenders
        .create_tender(new_tender(w, name, service_type))
        .await
        .unwrap();
    w.tenders
        .edit_tender_status(&tender.id, "alice", TenderStatus::Published)
        .await
        .unwrap()
}

#[tokio::test]
async fn tender_publication_and_foreign_close() {
    let w = world();
    let t1 = w
        .tenders
        .create_tender(new_tender(&w, "T1", ServiceType::Delivery))
        .await
        .unwrap();
    assert_eq!((t1.status, t1.version), (TenderStatus::Created, 1));

    let published = w
        .tenders
        .edit_tender_status(&t1.id, "alice", TenderStatus::Published)
        .await
        .unwrap();
    assert_eq!((published.status, published.version), (TenderStatus::Published, 2));

    let listed = w
        .tenders
        .list_tenders(Page::default(), &ServiceTypeFilter::Any)
        .await
        .unwrap();
    assert!(listed.iter().any(|t| t.id == t1.id));

    let err = w
        .tenders
        .edit_tender_status(&t1.id, "bob", TenderStatus::Closed)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);

    let mine = w
        .tenders
        .list_user_tenders(Page::default(), "alice")
        .await
        .unwrap();
    assert_eq!(mine[0].version, 2);
    assert_eq!(mine[0].status, TenderStatus::Published);
}

#[tokio::test]
async fn bid_decision_by_responsible_member_only() {
    let w = world();
    let t1 = publish(&w, "T1", ServiceType::Construction).await;
    let bid = w
        .bids
        .create_bid(NewBid {
            name: "Carol's offer".into(),
            description: "Fixed price".into(),
            tender_id: t1.id.clone(),
            author_type: AuthorType::User,
            author_id: w.carol_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!((bid.status, bid.version), (BidStatus::Created, 1));

    let decided = w
        .bids
        .submit_decision(&bid.id, "alice", BidDecision::Approved)
        .await
        .unwrap();
    assert_eq!(decided.status, BidStatus::Closed);
    assert_eq!(decided.decision, Some(BidDecision::Approved));

    let err = w
        .bids
        .submit_decision(&bid.id, "carol", BidDecision::Approved)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
}

#[tokio::test]
async fn pagination_orders_by_name() {
    let w = world();
    for name in ["golf", "alpha", "echo", "charlie", "bravo", "foxtrot", "delta"] {
        publish(&w, name, ServiceType::Delivery).await;
    }

    let first = w
        .tenders
        .list_tenders(Page::default(), &ServiceTypeFilter::Any)
        .await
        .unwrap();
    let names: Vec<_> = first.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "bravo", "charlie", "delta", "echo"]);

    let rest = w
        .tenders
        .list_tenders(Page::parse(Some(5), Some(5)).unwrap(), &ServiceTypeFilter::Any)
        .await
        .unwrap();
    let names: Vec<_> = rest.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["foxtrot", "golf"]);

    let beyond = w
        .tenders
        .list_tenders(Page::parse(None, Some(40)).unwrap(), &ServiceTypeFilter::Any)
        .await
        .unwrap();
    assert!(beyond.is_empty());
}

#[tokio::test]
async fn service_type_filter_restricts_listing() {
    let w = world();
    publish(&w, "build", ServiceType::Construction).await;
    publish(&w, "ship", ServiceType::Delivery).await;
    publish(&w, "make", ServiceType::Manufacture).await;

    let filter = ServiceTypeFilter::from_types([ServiceType::Delivery, ServiceType::Manufacture]);
    let listed = w
        .tenders
        .list_tenders(Page::default(), &filter)
        .await
        .unwrap();
    let names: Vec<_> = listed.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["make", "ship"]);

    let everything = ServiceTypeFilter::from_types(ServiceType::ALL);
    let listed = w
        .tenders
        .list_tenders(Page::default(), &everything)
        .await
        .unwrap();
    assert_eq!(listed.len(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_edits_never_share_a_version() {
    let w = world();
    let tender = w
        .tenders
        .create_tender(new_tender(&w, "Contested", ServiceType::Delivery))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for i in 0..16 {
        let tenders = w.tenders.clone();
        let id = tender.id.clone();
        handles.push(tokio::spawn(async move {
            let update = TenderUpdateBuilder::new()
                .description(format!("revision {i}"))
                .build();
            tenders.edit_tender(&id, "alice", update).await.unwrap().version
        }));
    }

    let mut versions = HashSet::new();
    for handle in handles {
        assert!(versions.insert(handle.await.unwrap()));
    }
    assert_eq!(versions, (2..=17).collect::<HashSet<i64>>());
}
