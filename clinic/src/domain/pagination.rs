//! Pagination primitives shared by the list queries
//!
//! Page indexes are zero-based everywhere inside the crate. Callers that
//! count pages from one convert with [`PageRequest::from_page_number`].

use serde::Serialize;

/// A request for one page of results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u64,
    /// Maximum number of items per page (at least 1)
    pub size: u64,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.max(1),
        }
    }

    /// Build a request from a one-based page number.
    ///
    /// Page number 0 is treated as the first page.
    pub fn from_page_number(page_number: u64, size: u64) -> Self {
        Self::new(page_number.saturating_sub(1), size)
    }

    /// Number of items to skip
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    /// Offset to fetch from, or `None` when the page starts past `total`
    pub fn offset_within(&self, total: u64) -> Option<u64> {
        let offset = self.offset();
        (offset < total).then_some(offset)
    }
}

/// One page of results plus the metadata needed to request others
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based page index
    pub page_number: u64,
    pub page_size: u64,
    /// Number of items across all pages
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page_number: request.page,
            page_size: request.size,
            total_elements,
        }
    }

    /// Slice an in-memory result set
    pub fn from_all(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len() as u64;
        let content = all
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.size as usize)
            .collect();
        Self::new(content, request, total)
    }

    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(self.page_size)
    }

    /// One-based page number, as shown to users
    pub fn current_page_number(&self) -> u64 {
        self.page_number.saturating_add(1)
    }

    /// True when this page holds no items
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
        }
    }
}
