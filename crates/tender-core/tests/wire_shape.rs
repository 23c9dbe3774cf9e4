//! Wire-shape checks: field casing, enum spelling, and schema conformance.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use schemars::schema_for;
use tender_core::entities::{Bid, Tender};
use tender_core::enums::{AuthorType, BidDecision, BidStatus, ServiceType, TenderStatus};

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn sample_tender() -> Tender {
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
    Tender {
        id: "tnd-0a1b2c3d".into(),
        name: "Bridge repair".into(),
        description: "Repair of the north bridge".into(),
        service_type: ServiceType::Construction,
        status: TenderStatus::Published,
        version: 2,
        organization_id: "org-00000001".into(),
        creator_username: "alice".into(),
        created_at: at,
        updated_at: at,
    }
}

fn sample_bid() -> Bid {
    let at = Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap();
    Bid {
        id: "bid-00c0ffee".into(),
        name: "Carol's offer".into(),
        description: "Two weeks, fixed price".into(),
        status: BidStatus::Closed,
        tender_id: "tnd-0a1b2c3d".into(),
        author_type: AuthorType::User,
        author_id: "emp-00000003".into(),
        version: 3,
        decision: Some(BidDecision::Approved),
        created_at: at,
        updated_at: at,
    }
}

#[test]
fn tender_serializes_camel_case() {
    let json = serde_json::to_value(sample_tender()).unwrap();
    let obj = json.as_object().unwrap();
    for key in ["serviceType", "organizationId", "creatorUsername", "createdAt", "updatedAt"] {
        assert!(obj.contains_key(key), "missing {key}: {json}");
    }
    assert_eq!(json["status"], "Published");
    assert_eq!(json["serviceType"], "Construction");
}

#[test]
fn bid_serializes_decision_and_author() {
    let json = serde_json::to_value(sample_bid()).unwrap();
    assert_eq!(json["authorType"], "User");
    assert_eq!(json["tenderId"], "tnd-0a1b2c3d");
    assert_eq!(json["decision"], "Approved");
    assert_eq!(json["status"], "Closed");
}

#[test]
fn undecided_bid_serializes_null_decision() {
    let bid = Bid {
        decision: None,
        status: BidStatus::Created,
        ..sample_bid()
    };
    let json = serde_json::to_value(bid).unwrap();
    assert!(json["decision"].is_null());
}

#[test]
fn entities_conform_to_their_schemas() {
    let tender_schema = serde_json::to_value(schema_for!(Tender)).unwrap();
    let errors = validate_against_schema(&tender_schema, &serde_json::to_value(sample_tender()).unwrap());
    assert!(errors.is_empty(), "tender: {errors:?}");

    let bid_schema = serde_json::to_value(schema_for!(Bid)).unwrap();
    let errors = validate_against_schema(&bid_schema, &serde_json::to_value(sample_bid()).unwrap());
    assert!(errors.is_empty(), "bid: {errors:?}");
}

#[test]
fn schema_rejects_unknown_status() {
    let tender_schema = serde_json::to_value(schema_for!(Tender)).unwrap();
    let mut instance = serde_json::to_value(sample_tender()).unwrap();
    instance["status"] = serde_json::Value::String("Archived".into());
    let errors = validate_against_schema(&tender_schema, &instance);
    assert!(!errors.is_empty());
}
