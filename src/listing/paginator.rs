//! Paginator
//!
//! Pure page math: parsing the `page` query parameter, translating a 1-based
//! page number into a dataset offset, and deriving the navigation links shown
//! on the HTML page. No I/O happens here.

use crate::error::{Result, ServiceError};

/// Number of places per page.
pub const PAGE_SIZE: usize = 10;

/// Parses the `page` query parameter. Absent or empty means page 1; anything
/// non-numeric or negative is rejected. Page 0 passes through and is rejected
/// downstream by the cache's negative-offset check.
pub fn parse_page_param(raw: Option<&str>) -> Result<i64> {
    let raw = match raw {
        None | Some("") => return Ok(1),
        Some(raw) => raw,
    };

    let page = raw
        .parse::<i64>()
        .map_err(|_| ServiceError::InvalidPage(raw.to_string()))?;
    if page < 0 {
        return Err(ServiceError::InvalidPage(raw.to_string()));
    }
    Ok(page)
}

/// Offset of the first item on a 1-based page. Saturates on overflow so an
/// absurdly large (but parseable) page number becomes an out-of-range offset
/// the cache rejects, instead of wrapping into a valid one.
pub fn offset_for(page: i64, page_size: usize) -> i64 {
    (page - 1).saturating_mul(page_size as i64)
}

/// Navigation metadata for a listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub current: i64,
    pub total_pages: i64,
    pub prev_page: Option<i64>,
    pub next_page: Option<i64>,
}

impl PageView {
    pub fn new(page: i64, page_size: usize, total: usize) -> Self {
        let total_pages = (total as i64 + page_size as i64 - 1) / page_size as i64;
        let prev_page = (page > 1).then(|| page - 1);
        let next_page = (page + 1 <= total_pages).then(|| page + 1);

        Self {
            current: page,
            total_pages,
            prev_page,
            next_page,
        }
    }
}
