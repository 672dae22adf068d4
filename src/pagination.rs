use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Requested page (1-based) and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Position of a page within the full result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total_pages: usize,
    pub total: usize,
}

/// One page of items plus its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Slice `items` down to the requested page
///
/// Zero page or page size is clamped to 1. A page past the end is empty but
/// still reports the real totals.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let page = request.page.max(1);
    let per_page = request.per_page.max(1);
    let total = items.len();
    let per_page_len = per_page as usize;

    let start = (page as usize - 1).saturating_mul(per_page_len);
    let items = items.into_iter().skip(start).take(per_page_len).collect();

    Page {
        items,
        pagination: Pagination {
            page,
            per_page,
            total_pages: total.div_ceil(per_page_len),
            total,
        },
    }
}
