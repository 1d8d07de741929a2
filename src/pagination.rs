//! Page window validation and the paged response envelope shared by every
//! list endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 50;

/// Rejected page window parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid page number.")]
    InvalidPage,
    #[error("Invalid page size. It should be between 1 and {max}.")]
    InvalidPageSize { max: usize },
}

/// Paging defaults loaded from configuration.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct PaginationSettings {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "max_page_size")]
    pub max_page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn max_page_size() -> usize {
    MAX_PAGE_SIZE
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl PaginationSettings {
    /// Resolves optional query parameters into a validated [`PageRequest`],
    /// falling back to page 1 and the configured default size.
    pub fn request(
        &self,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<PageRequest, PaginationError> {
        let default_size = self.default_page_size.min(self.max_page_size) as i64;
        PageRequest::validate(
            page.unwrap_or(1),
            page_size.unwrap_or(default_size),
            self.max_page_size,
        )
    }
}

/// A validated, 1-indexed page window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Validates raw page parameters.
    ///
    /// A page size above `max_page_size` is clamped rather than rejected.
    pub fn validate(
        page: i64,
        page_size: i64,
        max_page_size: usize,
    ) -> Result<Self, PaginationError> {
        if page < 1 {
            log::info!("Rejected page number {page}");
            return Err(PaginationError::InvalidPage);
        }
        if page_size < 1 {
            log::info!("Rejected page size {page_size}");
            return Err(PaginationError::InvalidPageSize { max: max_page_size });
        }

        let page_size = usize::try_from(page_size)
            .unwrap_or(usize::MAX)
            .min(max_page_size);

        Ok(Self {
            page: usize::try_from(page).unwrap_or(usize::MAX),
            page_size,
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of rows to skip before the window starts.
    pub fn offset(&self) -> i64 {
        let offset = (self.page - 1).saturating_mul(self.page_size);
        i64::try_from(offset).unwrap_or(i64::MAX)
    }

    /// Maximum number of rows in the window.
    pub fn limit(&self) -> i64 {
        i64::try_from(self.page_size).unwrap_or(i64::MAX)
    }
}

/// `ceil(total_count / page_size)`.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size.max(1))
}

/// The 1-indexed number of the last page, 0 when there are no rows.
pub fn last_page(total_count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    if total_count % page_size == 0 {
        total_count / page_size
    } else {
        total_count / page_size + 1
    }
}

/// Wire envelope returned by every list endpoint.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub last_page: usize,
}

impl<T> PagedResponse<T> {
    pub fn new(data: Vec<T>, page: &PageRequest, total_count: usize) -> Self {
        Self {
            data,
            page_number: page.page(),
            page_size: page.page_size(),
            total_count,
            total_pages: total_pages(total_count, page.page_size()),
            last_page: last_page(total_count, page.page_size()),
        }
    }
}
