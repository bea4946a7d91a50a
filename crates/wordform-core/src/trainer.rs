//! Page navigation around the single active quiz session.

use crate::catalog::Catalog;
use crate::engine::SelectionPolicy;
use crate::session::QuizSession;

/// Owns the catalog and the session bound to the currently displayed page.
///
/// Every page change or retry discards the active session and builds a new one.
#[derive(Debug, Clone)]
pub struct Trainer {
    catalog: Catalog,
    policy: SelectionPolicy,
    session: QuizSession,
}

impl Trainer {
    /// Start on page 1.
    pub fn new(catalog: Catalog, policy: SelectionPolicy) -> Self {
        Self::start_at(catalog, policy, 1)
    }

    pub fn start_at(catalog: Catalog, policy: SelectionPolicy, page: usize) -> Self {
        let session = QuizSession::initialize(&catalog, page, policy);
        Self {
            catalog,
            policy,
            session,
        }
    }

    /// Open `page` with a fresh session. Pages outside the catalog give an empty session.
    pub fn go_to_page(&mut self, page: usize) {
        tracing::info!("opening page {page} of {}", self.total_pages());
        self.session = QuizSession::initialize(&self.catalog, page, self.policy);
    }

    /// Move forward one page. Returns `false` on the last page.
    pub fn next_page(&mut self) -> bool {
        let page = self.current_page();
        if page >= self.total_pages() {
            return false;
        }
        self.go_to_page(page + 1);
        true
    }

    /// Move back one page. Returns `false` on the first page.
    pub fn prev_page(&mut self) -> bool {
        let page = self.current_page();
        if page <= 1 {
            return false;
        }
        self.go_to_page((page - 1).min(self.total_pages().max(1)));
        true
    }

    /// Try the current page again with a fresh session on the next round.
    pub fn retry(&mut self) {
        let round = self.session.round().wrapping_add(1);
        tracing::info!("retrying page {} (round {round})", self.current_page());
        self.session =
            QuizSession::for_round(&self.catalog, self.current_page(), self.policy, round);
    }

    pub fn current_page(&self) -> usize {
        self.session.page()
    }

    pub fn total_pages(&self) -> usize {
        self.catalog.total_pages()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }
}
