#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use link_shortener::application::services::{LinkService, MetricsService};
use link_shortener::domain::entities::{Link, LinkMetric, NewLink};
use link_shortener::domain::repositories::{LinkRepository, StoreError, VisitCounter};
use link_shortener::domain::visit_event::VisitEvent;
use link_shortener::domain::visit_worker::record_visit;
use link_shortener::routes::app_router;
use link_shortener::state::AppState;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Link store held in memory, with a switch to simulate an outage.
///
/// Each insert is stamped one second after the previous one so that
/// ordering by `created_at` is deterministic.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
    unavailable: AtomicBool,
}

impl InMemoryLinkRepository {
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn count_code(&self, code: &str) -> usize {
        self.links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.code == code)
            .count()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError> {
        self.check()?;
        let mut links = self.links.lock().unwrap();

        if links.iter().any(|l| l.code == new_link.code) {
            return Err(StoreError::DuplicateCode(new_link.code));
        }

        let id = links.len() as i64 + 1;
        let created_at = Utc::now() + Duration::seconds(id);
        let link = Link::new(id, new_link.code, new_link.original_url, created_at);
        links.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        self.check()?;
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.code == code)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Link>, StoreError> {
        self.check()?;
        let mut links = self.links.lock().unwrap().clone();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(links)
    }

    async fn health_check(&self) -> bool {
        self.check().is_ok()
    }
}

/// Visit counters held in memory.
#[derive(Default)]
pub struct InMemoryVisitCounter {
    scores: Mutex<HashMap<i64, u64>>,
    unavailable: AtomicBool,
}

impl InMemoryVisitCounter {
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn set_score(&self, link_id: i64, clicks: u64) {
        self.scores.lock().unwrap().insert(link_id, clicks);
    }

    pub fn score(&self, link_id: i64) -> Option<u64> {
        self.scores.lock().unwrap().get(&link_id).copied()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl VisitCounter for InMemoryVisitCounter {
    async fn increment(&self, link_id: i64) -> Result<u64, StoreError> {
        self.check()?;
        let mut scores = self.scores.lock().unwrap();
        let score = scores.entry(link_id).or_insert(0);
        *score += 1;
        Ok(*score)
    }

    async fn scores_up_to(&self, ceiling: u64) -> Result<Vec<LinkMetric>, StoreError> {
        self.check()?;
        Ok(self
            .scores
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, clicks)| **clicks <= ceiling)
            .map(|(id, clicks)| LinkMetric::new(*id, *clicks))
            .collect())
    }

    async fn health_check(&self) -> bool {
        self.check().is_ok()
    }
}

/// The served application over in-memory stores, trailing-slash normalization included.
pub struct TestApp {
    pub server: TestServer,
    pub links: Arc<InMemoryLinkRepository>,
    pub counter: Arc<InMemoryVisitCounter>,
    pub visits: mpsc::Receiver<VisitEvent>,
}

impl TestApp {
    /// Applies every queued visit to the counter, as the worker would.
    pub async fn flush_visits(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.visits.try_recv() {
            if record_visit(self.counter.as_ref(), event).await {
                applied += 1;
            }
        }
        applied
    }
}

pub fn create_test_state(
    links: Arc<InMemoryLinkRepository>,
    counter: Arc<InMemoryVisitCounter>,
    score_ceiling: u64,
) -> (AppState, mpsc::Receiver<VisitEvent>) {
    let (tx, rx) = mpsc::channel(100);

    let link_repository: Arc<dyn LinkRepository> = links;
    let visit_counter: Arc<dyn VisitCounter> = counter;

    let state = AppState::new(
        Arc::new(LinkService::new(link_repository, tx)),
        Arc::new(MetricsService::new(visit_counter, score_ceiling)),
    );

    (state, rx)
}

pub fn spawn_app_with_ceiling(score_ceiling: u64) -> TestApp {
    let links = Arc::new(InMemoryLinkRepository::default());
    let counter = Arc::new(InMemoryVisitCounter::default());
    let (state, visits) = create_test_state(links.clone(), counter.clone(), score_ceiling);

    let app = ServiceExt::<Request>::into_make_service(app_router(state));
    let server = TestServer::new(app).unwrap();

    TestApp {
        server,
        links,
        counter,
        visits,
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with_ceiling(50)
}
