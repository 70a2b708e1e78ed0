//! Link creation, resolution and listing.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};
use url::Url;

use crate::domain::entities::{CodeViolation, Link, MIN_CODE_LENGTH, NewLink, check_code};
use crate::domain::repositories::LinkRepository;
use crate::domain::visit_event::VisitEvent;
use crate::error::AppError;

/// Service for creating and resolving short links.
///
/// Resolution and counting are decoupled: a successful lookup pushes a
/// [`VisitEvent`] onto the visit queue and returns immediately. The redirect
/// never waits on the counter store.
pub struct LinkService<R: LinkRepository + ?Sized = dyn LinkRepository> {
    repository: Arc<R>,
    visits: mpsc::Sender<VisitEvent>,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `visits` is the sending half of the queue drained by
    /// [`crate::domain::visit_worker::run_visit_worker`].
    pub fn new(repository: Arc<R>, visits: mpsc::Sender<VisitEvent>) -> Self {
        Self { repository, visits }
    }

    /// Registers `code` as a short code for `url` and returns the new link id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the code is shorter than
    /// [`MIN_CODE_LENGTH`], contains a path delimiter, is shadowed by a static
    /// route, or the URL does not parse. The store is not touched.
    ///
    /// Returns [`AppError::DuplicateCode`] if the code is taken, and
    /// [`AppError::StoreUnavailable`] on any other store failure.
    pub async fn create_link(&self, code: String, url: String) -> Result<i64, AppError> {
        ensure_code(&code)?;

        if let Err(e) = Url::parse(&url) {
            return Err(AppError::bad_request(
                "Invalid URL format",
                json!({ "reason": e.to_string() }),
            ));
        }

        let link = self
            .repository
            .create(NewLink {
                code,
                original_url: url,
            })
            .await?;

        debug!(id = link.id, code = %link.code, "Link created");

        Ok(link.id)
    }

    /// Returns the destination of `code` and schedules a visit increment.
    ///
    /// The increment is best-effort. If the visit queue is full or closed the
    /// visit is dropped with a warning and the URL is still returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for codes shorter than [`MIN_CODE_LENGTH`],
    /// [`AppError::NotFound`] if no link matches, and
    /// [`AppError::StoreUnavailable`] on store failures.
    pub async fn resolve_link(&self, code: &str) -> Result<String, AppError> {
        ensure_code(code)?;

        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)?;

        match self.visits.try_send(VisitEvent::new(link.id)) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                warn!(link_id = event.link_id, "Visit queue full, dropping visit");
            }
            Err(TrySendError::Closed(event)) => {
                warn!(link_id = event.link_id, "Visit queue closed, dropping visit");
            }
        }

        Ok(link.original_url)
    }

    /// Returns every link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store failures.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.repository.list().await?)
    }

    /// Returns true if the link store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.repository.health_check().await
    }

    /// Remaining visit queue capacity, or `None` once the worker has stopped.
    pub fn visit_queue_capacity(&self) -> Option<usize> {
        if self.visits.is_closed() {
            None
        } else {
            Some(self.visits.capacity())
        }
    }
}

fn ensure_code(code: &str) -> Result<(), AppError> {
    let message = match check_code(code) {
        Ok(()) => return Ok(()),
        Err(CodeViolation::TooShort) => {
            format!("Short code must have at least {MIN_CODE_LENGTH} characters")
        }
        Err(CodeViolation::ForbiddenChar) => {
            "Short code must not contain '/', '?' or '#'".to_string()
        }
        Err(CodeViolation::Reserved) => "Short code is reserved".to_string(),
    };

    Err(AppError::bad_request(message, json!({ "code": code })))
}
