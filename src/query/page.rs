use std::num::NonZeroUsize;

use super::error::QueryError;

pub const DEFAULT_PAGE_SIZE: usize = DEFAULT_NONZERO_PAGE_SIZE.get();

const DEFAULT_NONZERO_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

/// A validated, zero-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: NonZeroUsize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_NONZERO_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Validates the raw `page` and `pageSize` parameters.
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidArgument`] when `page` is negative or
    /// `page_size` is not positive.
    pub fn new(page: i64, page_size: i64) -> Result<Self, QueryError> {
        let page = usize::try_from(page).map_err(|_| {
            QueryError::InvalidArgument(format!("page must not be negative, got {page}"))
        })?;
        let page_size = usize::try_from(page_size)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| {
                QueryError::InvalidArgument(format!("page size must be positive, got {page_size}"))
            })?;
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// `ceil(total_items / page_size)`.
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size.get())
    }

    /// Returns the `[from, to)` window of this page, empty once past the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let from = self.page.saturating_mul(self.page_size.get());
        if from >= items.len() {
            return &[];
        }
        let to = from.saturating_add(self.page_size.get()).min(items.len());
        items.get(from..to).unwrap_or(&[])
    }
}
