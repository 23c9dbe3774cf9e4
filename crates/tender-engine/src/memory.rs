//! In-memory [`ProcurementStore`](crate::store::ProcurementStore) implementation.
//!
//! Backs unit and scenario tests. All state sits behind one `RwLock`; every
//! mutation takes the write lock for its whole read-modify-write so version
//! bumps are atomic exactly like the single-statement SQL updates.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use tender_core::entities::{
    Bid, Employee, NewBid, NewTender, Organization, OrganizationResponsible, Tender,
};
use tender_core::enums::{BidDecision, BidStatus, TenderStatus};
use tender_core::errors::StoreError;
use tender_core::identity::ActorIdentity;
use tender_core::ids::{
    PREFIX_BID, PREFIX_EMPLOYEE, PREFIX_ORGANIZATION, PREFIX_RESPONSIBLE, PREFIX_TENDER, format_id,
};
use tender_core::listing::{Page, ServiceTypeFilter};
use tender_core::updates::bid::BidUpdate;
use tender_core::updates::tender::TenderUpdate;

use crate::store::{AccessStore, BidAuthorship, BidStore, StoreResult, TenderStore};

#[derive(Default)]
struct State {
    seq: u32,
    employees: HashMap<String, Employee>,
    organizations: HashMap<String, Organization>,
    responsibles: Vec<OrganizationResponsible>,
    tenders: HashMap<String, Tender>,
    bids: HashMap<String, Bid>,
}

impl State {
    fn next_id(&mut self, prefix: &str) -> String {
        self.seq += 1;
        format_id(prefix, self.seq)
    }

    fn employee_by_username(&self, username: &str) -> Option<&Employee> {
        self.employees.values().find(|e| e.username == username)
    }

    fn responsible_for(&self, username: &str, organization_id: &str) -> bool {
        let Some(employee) = self.employee_by_username(username) else {
            return false;
        };
        self.responsibles
            .iter()
            .any(|r| r.user_id == employee.id && r.organization_id == organization_id)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
    faulty: AtomicBool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent store call fail with `StoreError::Query`.
    pub fn inject_fault(&self, faulty: bool) {
        self.faulty.store(faulty, Ordering::SeqCst);
    }

    fn check(&self) -> StoreResult<()> {
        if self.faulty.load(Ordering::SeqCst) {
            return Err(StoreError::Query("injected fault".into()));
        }
        Ok(())
    }

    pub fn add_employee(&self, username: &str) -> Employee {
        let mut state = self.state.write();
        let employee = Employee {
            id: state.next_id(PREFIX_EMPLOYEE),
            username: username.to_string(),
            first_name: None,
            last_name: None,
            created_at: Utc::now(),
        };
        state.employees.insert(employee.id.clone(), employee.clone());
        employee
    }

    pub fn add_organization(&self, name: &str) -> Organization {
        let mut state = self.state.write();
        let organization = Organization {
            id: state.next_id(PREFIX_ORGANIZATION),
            name: name.to_string(),
            description: None,
            created_at: Utc::now(),
        };
        state
            .organizations
            .insert(organization.id.clone(), organization.clone());
        organization
    }

    pub fn add_responsible(&self, organization_id: &str, user_id: &str) -> OrganizationResponsible {
        let mut state = self.state.write();
        let row = OrganizationResponsible {
            id: state.next_id(PREFIX_RESPONSIBLE),
            organization_id: organization_id.to_string(),
            user_id: user_id.to_string(),
        };
        state.responsibles.push(row.clone());
        row
    }
}

fn sorted_page<T: Clone>(mut items: Vec<T>, key: impl Fn(&T) -> (String, String), page: Page) -> Vec<T> {
    items.sort_by_key(|item| key(item));
    page.slice(&items)
}

#[async_trait]
impl TenderStore for MemoryStore {
    async fn list_published_tenders(
        &self,
        filter: &ServiceTypeFilter,
        page: Page,
    ) -> StoreResult<Vec<Tender>> {
        self.check()?;
        let state = self.state.read();
        let matching = state
            .tenders
            .values()
            .filter(|t| t.status == TenderStatus::Published && filter.matches(t.service_type))
            .cloned()
            .collect();
        Ok(sorted_page(matching, |t: &Tender| (t.name.clone(), t.id.clone()), page))
    }

    async fn list_tenders_by_creator(&self, username: &str, page: Page) -> StoreResult<Vec<Tender>> {
        self.check()?;
        let state = self.state.read();
        let matching = state
            .tenders
            .values()
            .filter(|t| t.creator_username == username)
            .cloned()
            .collect();
        Ok(sorted_page(matching, |t: &Tender| (t.name.clone(), t.id.clone()), page))
    }

    async fn tender_status(&self, tender_id: &str) -> StoreResult<Option<TenderStatus>> {
        self.check()?;
        Ok(self.state.read().tenders.get(tender_id).map(|t| t.status))
    }

    async fn tender_creator(&self, tender_id: &str) -> StoreResult<Option<String>> {
        self.check()?;
        Ok(self
            .state
            .read()
            .tenders
            .get(tender_id)
            .map(|t| t.creator_username.clone()))
    }

    async fn tender_exists(&self, tender_id: &str) -> StoreResult<bool> {
        self.check()?;
        Ok(self.state.read().tenders.contains_key(tender_id))
    }

    async fn insert_tender(&self, tender: &NewTender) -> StoreResult<Tender> {
        self.check()?;
        let mut state = self.state.write();
        if !state.organizations.contains_key(&tender.organization_id) {
            return Err(StoreError::Constraint(format!(
                "organization {} does not exist",
                tender.organization_id
            )));
        }
        let now = Utc::now();
        let row = Tender {
            id: state.next_id(PREFIX_TENDER),
            name: tender.name.clone(),
            description: tender.description.clone(),
            service_type: tender.service_type,
            status: TenderStatus::Created,
            version: 1,
            organization_id: tender.organization_id.clone(),
            creator_username: tender.creator_username.clone(),
            created_at: now,
            updated_at: now,
        };
        state.tenders.insert(row.id.clone(), row.clone());
        Ok(row)
    }

    async fn update_tender_status(
        &self,
        tender_id: &str,
        status: TenderStatus,
    ) -> StoreResult<Option<Tender>> {
        self.check()?;
        let mut state = self.state.write();
        Ok(state.tenders.get_mut(tender_id).map(|t| {
            t.status = status;
            t.version += 1;
            t.updated_at = Utc::now();
            t.clone()
        }))
    }

    async fn update_tender_fields(
        &self,
        tender_id: &str,
        update: &TenderUpdate,
    ) -> StoreResult<Option<Tender>> {
        self.check()?;
        let mut state = self.state.write();
        Ok(state.tenders.get_mut(tender_id).map(|t| {
            if let Some(name) = &update.name {
                t.name.clone_from(name);
            }
            if let Some(description) = &update.description {
                t.description.clone_from(description);
            }
            if let Some(service_type) = update.service_type {
                t.service_type = service_type;
            }
            t.version += 1;
            t.updated_at = Utc::now();
            t.clone()
        }))
    }
}

#[async_trait]
impl BidStore for MemoryStore {
    async fn list_bids_by_author(&self, author_id: &str, page: Page) -> StoreResult<Vec<Bid>> {
        self.check()?;
        let state = self.state.read();
        let matching = state
            .bids
            .values()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect();
        Ok(sorted_page(matching, |b: &Bid| (b.name.clone(), b.id.clone()), page))
    }

    async fn list_published_bids(&self, tender_id: &str, page: Page) -> StoreResult<Vec<Bid>> {
        self.check()?;
        let state = self.state.read();
        let matching = state
            .bids
            .values()
            .filter(|b| b.tender_id == tender_id && b.status == BidStatus::Published)
            .cloned()
            .collect();
        Ok(sorted_page(matching, |b: &Bid| (b.name.clone(), b.id.clone()), page))
    }

    async fn bid_status(&self, bid_id: &str) -> StoreResult<Option<BidStatus>> {
        self.check()?;
        Ok(self.state.read().bids.get(bid_id).map(|b| b.status))
    }

    async fn bid_authorship(&self, bid_id: &str) -> StoreResult<Option<BidAuthorship>> {
        self.check()?;
        Ok(self.state.read().bids.get(bid_id).map(|b| BidAuthorship {
            author_type: b.author_type,
            author_id: b.author_id.clone(),
        }))
    }

    async fn insert_bid(&self, bid: &NewBid) -> StoreResult<Bid> {
        self.check()?;
        let mut state = self.state.write();
        if !state.tenders.contains_key(&bid.tender_id) {
            return Err(StoreError::Constraint(format!(
                "tender {} does not exist",
                bid.tender_id
            )));
        }
        let now = Utc::now();
        let row = Bid {
            id: state.next_id(PREFIX_BID),
            name: bid.name.clone(),
            description: bid.description.clone(),
            status: BidStatus::Created,
            tender_id: bid.tender_id.clone(),
            author_type: bid.author_type,
            author_id: bid.author_id.clone(),
            version: 1,
            decision: None,
            created_at: now,
            updated_at: now,
        };
        state.bids.insert(row.id.clone(), row.clone());
        Ok(row)
    }

    async fn update_bid_status(&self, bid_id: &str, status: BidStatus) -> StoreResult<Option<Bid>> {
        self.check()?;
        let mut state = self.state.write();
        Ok(state.bids.get_mut(bid_id).map(|b| {
            b.status = status;
            b.version += 1;
            b.updated_at = Utc::now();
            b.clone()
        }))
    }

    async fn update_bid_fields(&self, bid_id: &str, update: &BidUpdate) -> StoreResult<Option<Bid>> {
        self.check()?;
        let mut state = self.state.write();
        Ok(state.bids.get_mut(bid_id).map(|b| {
            if let Some(name) = &update.name {
                b.name.clone_from(name);
            }
            if let Some(description) = &update.description {
                b.description.clone_from(description);
            }
            b.version += 1;
            b.updated_at = Utc::now();
            b.clone()
        }))
    }

    async fn record_decision(
        &self,
        bid_id: &str,
        decision: BidDecision,
    ) -> StoreResult<Option<Bid>> {
        self.check()?;
        let mut state = self.state.write();
        Ok(state.bids.get_mut(bid_id).map(|b| {
            b.decision = Some(decision);
            b.status = BidStatus::Closed;
            b.version += 1;
            b.updated_at = Utc::now();
            b.clone()
        }))
    }
}

#[async_trait]
impl AccessStore for MemoryStore {
    async fn resolve_username(&self, username: &str) -> StoreResult<Option<ActorIdentity>> {
        self.check()?;
        Ok(self
            .state
            .read()
            .employee_by_username(username)
            .map(|e| ActorIdentity {
                id: e.id.clone(),
                username: e.username.clone(),
            }))
    }

    async fn employee_exists(&self, employee_id: &str) -> StoreResult<bool> {
        self.check()?;
        Ok(self.state.read().employees.contains_key(employee_id))
    }

    async fn organization_exists(&self, organization_id: &str) -> StoreResult<bool> {
        self.check()?;
        Ok(self.state.read().organizations.contains_key(organization_id))
    }

    async fn is_organization_responsible(
        &self,
        username: &str,
        organization_id: &str,
    ) -> StoreResult<bool> {
        self.check()?;
        Ok(self.state.read().responsible_for(username, organization_id))
    }

    async fn is_tender_organization_responsible(
        &self,
        username: &str,
        tender_id: &str,
    ) -> StoreResult<bool> {
        self.check()?;
        let state = self.state.read();
        Ok(state
            .tenders
            .get(tender_id)
            .is_some_and(|t| state.responsible_for(username, &t.organization_id)))
    }

    async fn is_bid_organization_responsible(
        &self,
        username: &str,
        bid_id: &str,
    ) -> StoreResult<bool> {
        self.check()?;
        let state = self.state.read();
        Ok(state
            .bids
            .get(bid_id)
            .and_then(|b| state.tenders.get(&b.tender_id))
            .is_some_and(|t| state.responsible_for(username, &t.organization_id)))
    }
}
