use serde::Serialize;

use crate::vacancy::{Card, CardView};

/// Cards requested per fetch when nothing else is configured.
pub const DEFAULT_PER_PAGE: usize = 5;

/// Upper bound on cards fetched in one session. The upstream API documents
/// a maximum depth of 2000 objects per listing.
pub const DEFAULT_MAX_RECORDS: usize = 2000;

/// Pagination state for incremental loading.
///
/// Tracks the 1-based page cursor, the page size, the session-wide record
/// bound, and the accumulated cards. The feed is *loadable* while
/// `page * per_page <= max_records`; once the cursor advances past that
/// bound it is *exhausted* until the cursor is reset.
#[derive(Debug, Clone)]
pub struct Feed {
    cards: Vec<Card>,
    per_page: usize,
    max_records: usize,
    page: usize,
}

impl Default for Feed {
    fn default() -> Self {
        Self::with_limits(DEFAULT_PER_PAGE, DEFAULT_MAX_RECORDS)
    }
}

impl Feed {
    pub fn with_limits(per_page: usize, max_records: usize) -> Self {
        Self {
            cards: Vec::new(),
            per_page,
            max_records,
            page: 1,
        }
    }

    /// Whether another page may be fetched. Checked before every fetch.
    pub fn can_load(&self) -> bool {
        self.page * self.per_page <= self.max_records
    }

    /// Advance the cursor after a successful fetch.
    pub fn advance_page(&mut self) {
        self.page += 1;
    }

    /// Rewind the cursor to page 1. Used when filters change.
    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Discard all accumulated cards. Used when filters change, before the
    /// refetch (clear-before-refetch ordering).
    pub fn clear_cards(&mut self) {
        self.cards.clear();
    }

    pub fn push_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn append_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn max_records(&self) -> usize {
        self.max_records
    }
}

/// Accounting for one page load.
///
/// `listed` is what the listing endpoint returned, `hydrated` how many cards
/// survived the per-item detail fetches. Keeping the counts separate makes a
/// short last page distinguishable from a page that merely lost items to
/// fetch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageStats {
    pub requested: usize,
    pub listed: usize,
    pub hydrated: usize,
    pub failed: usize,
}

impl PageStats {
    /// The listing returned fewer items than requested, so no further pages
    /// exist upstream. Per-item failures do not count towards exhaustion.
    pub fn exhausted(&self) -> bool {
        self.listed < self.requested
    }

    /// At least one detail fetch failed and the page is missing items.
    pub fn degraded(&self) -> bool {
        self.failed > 0
    }
}

/// One rendered page of the listing, with navigation metadata.
#[derive(Debug, Serialize, Clone)]
pub struct PageOutput {
    pub cards: Vec<CardView>,
    pub pagination: PageInfo,
}

#[derive(Debug, Serialize, Clone)]
pub struct PageInfo {
    pub current_page: usize,
    pub per_page: usize,
    pub listed: usize,
    pub hydrated: usize,
    pub failed: usize,
    pub found: Option<u64>,
    pub exhausted: bool,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// Assemble the output for one listed page.
///
/// Navigation commands follow the CLI: the next-page command is withheld
/// once the page signals exhaustion.
pub fn assemble_page(cards: &[Card], stats: PageStats, page: usize, found: Option<u64>) -> PageOutput {
    let exhausted = stats.exhausted();

    let next_page_command =
        (!exhausted).then(|| format!("hhtools vacancies list --page {}", page + 1));
    let prev_page_command =
        (page > 1).then(|| format!("hhtools vacancies list --page {}", page - 1));

    PageOutput {
        cards: cards.iter().map(Card::view).collect(),
        pagination: PageInfo {
            current_page: page,
            per_page: stats.requested,
            listed: stats.listed,
            hydrated: stats.hydrated,
            failed: stats.failed,
            found,
            exhausted,
            next_page_command,
            prev_page_command,
        },
    }
}

/// Accumulated output of a multi-page feed session.
#[derive(Debug, Serialize, Clone)]
pub struct FeedOutput {
    pub cards: Vec<CardView>,
    pub pages: Vec<PageStats>,
    pub total: usize,
    pub exhausted: bool,
}

pub fn assemble_feed(cards: &[Card], pages: Vec<PageStats>, exhausted: bool) -> FeedOutput {
    FeedOutput {
        cards: cards.iter().map(Card::view).collect(),
        total: cards.len(),
        pages,
        exhausted,
    }
}
