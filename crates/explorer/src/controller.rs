use std::sync::Mutex;

use nowa_client::{BatchClient, BatchClientError, RequestOptions};
use nowa_common::{Batch, BatchPage};
use tracing::debug;

use crate::pagination::{PageSize, PaginationState};

/// A fetch authorization captured at transition time.
///
/// Every navigation bumps the controller's generation; a settled response
/// is only committed while its ticket's generation is still current, so a
/// response belonging to a superseded page/limit can never overwrite newer
/// state no matter how late it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    pub generation: u64,
    pub page: u64,
    pub limit: u64,
}

/// Read-only snapshot handed to rendering collaborators.
#[derive(Debug, Clone)]
pub struct PageView {
    pub pagination: PaginationState,
    pub batches: Vec<Batch>,
}

struct ControllerInner {
    pagination: PaginationState,
    batches: Vec<Batch>,
    generation: u64,
}

/// Drives the paginated batch listing: decides what to fetch, applies
/// settled responses, and reconciles them with in-flight navigation.
///
/// The lock is only held for state reads and writes, never across an await;
/// the generation token is the sole synchronization primitive between
/// concurrently settling fetches.
pub struct PageController {
    client: BatchClient,
    inner: Mutex<ControllerInner>,
}

impl PageController {
    pub fn new(client: BatchClient) -> Self {
        Self {
            client,
            inner: Mutex::new(ControllerInner {
                pagination: PaginationState::default(),
                batches: Vec::new(),
                generation: 0,
            }),
        }
    }

    pub fn snapshot(&self) -> PageView {
        let inner = self.lock();
        PageView {
            pagination: inner.pagination,
            batches: inner.batches.clone(),
        }
    }

    /// A ticket for the page currently on display, without superseding
    /// anything. This is what periodic poll ticks use.
    pub fn current_ticket(&self) -> PageTicket {
        let inner = self.lock();
        PageTicket {
            generation: inner.generation,
            page: inner.pagination.current_page,
            limit: inner.pagination.items_per_page.as_u64(),
        }
    }

    /// Navigates to `page`. Out-of-range targets are a no-op returning
    /// `None`; otherwise any in-flight fetch is superseded and the returned
    /// ticket authorizes the re-fetch.
    pub fn go_to_page(&self, page: u64) -> Option<PageTicket> {
        let mut inner = self.lock();
        if page < 1 || page > inner.pagination.total_pages {
            return None;
        }
        inner.pagination.current_page = page;
        Some(Self::supersede(&mut inner))
    }

    pub fn next(&self) -> Option<PageTicket> {
        let target = self.lock().pagination.current_page.saturating_add(1);
        self.go_to_page(target)
    }

    pub fn prev(&self) -> Option<PageTicket> {
        let current = self.lock().pagination.current_page;
        if current <= 1 {
            return None;
        }
        self.go_to_page(current - 1)
    }

    /// Switches the page size and resets to the first page.
    pub fn change_items_per_page(&self, items_per_page: PageSize) -> PageTicket {
        let mut inner = self.lock();
        inner.pagination.items_per_page = items_per_page;
        inner.pagination.current_page = 1;
        Self::supersede(&mut inner)
    }

    /// Fetches the page named by `ticket` and commits it if still current.
    /// Returns whether the response was applied to visible state.
    pub async fn refresh(&self, ticket: PageTicket) -> Result<bool, BatchClientError> {
        let page = self
            .client
            .get_batches_paginated(ticket.page, ticket.limit, &RequestOptions::default())
            .await?;
        Ok(self.commit(ticket, page))
    }

    /// Applies a settled response to visible state, unless the ticket was
    /// superseded by a later navigation.
    pub fn commit(&self, ticket: PageTicket, page: BatchPage) -> bool {
        let mut inner = self.lock();
        if ticket.generation != inner.generation {
            debug!(
                "Discarding superseded response for page {} (generation {} != {})",
                ticket.page, ticket.generation, inner.generation
            );
            return false;
        }

        inner.batches = page.batches;
        inner.pagination.total_records = page.total;
        inner.pagination.total_pages = page.total_pages;
        // Totals can shrink between polls; keep the current page reachable.
        let max_page = inner.pagination.total_pages.max(1);
        if inner.pagination.current_page > max_page {
            inner.pagination.current_page = max_page;
        }
        true
    }

    fn supersede(inner: &mut ControllerInner) -> PageTicket {
        inner.generation += 1;
        PageTicket {
            generation: inner.generation,
            page: inner.pagination.current_page,
            limit: inner.pagination.items_per_page.as_u64(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ControllerInner> {
        // The lock is never held across an await, so poisoning can only
        // follow a panic in this module's own critical sections.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
