//! Fixed-size, 1-indexed pagination over any countable, sliceable source.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PagingError {
    #[error("there must be at least one result per page")]
    InvalidPageSize,
}

/// A data source that can report its size and be sliced by offset and limit.
pub trait PageSource {
    type Item;

    fn count(&self) -> usize;

    /// Items in `[offset, offset + limit)`, clipped to the source's length.
    fn slice(&self, offset: usize, limit: usize) -> Vec<Self::Item>;
}

impl<T: Clone> PageSource for [T] {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn slice(&self, offset: usize, limit: usize) -> Vec<T> {
        let start = offset.min(self.len());
        let end = offset.saturating_add(limit).min(self.len());
        self[start..end].to_vec()
    }
}

/// Splits a [`PageSource`] into 1-indexed pages of `per_page` items.
#[derive(Debug)]
pub struct Paginator<'a, S: PageSource + ?Sized> {
    source: &'a S,
    per_page: usize,
    count: usize,
}

impl<'a, S: PageSource + ?Sized> Paginator<'a, S> {
    pub fn new(source: &'a S, per_page: usize) -> Result<Self, PagingError> {
        if per_page < 1 {
            return Err(PagingError::InvalidPageSize);
        }
        let count = source.count();
        Ok(Self {
            source,
            per_page,
            count,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages. An empty source still has one empty page.
    pub fn page_count(&self) -> usize {
        if self.count == 0 {
            1
        } else {
            self.count.div_ceil(self.per_page)
        }
    }

    /// The 1-based page `number`, or `None` when it is out of range.
    /// Asking for a page past the end is an expected caller situation, not
    /// an error.
    pub fn page(&self, number: usize) -> Option<Page<'_, S>> {
        if number < 1 || number > self.page_count() {
            return None;
        }
        Some(Page {
            source: self.source,
            per_page: self.per_page,
            page_count: self.page_count(),
            index: number - 1,
        })
    }
}

/// One page view into a [`Paginator`]'s source.
pub struct Page<'a, S: PageSource + ?Sized> {
    source: &'a S,
    per_page: usize,
    page_count: usize,
    index: usize,
}

impl<S: PageSource + ?Sized> Page<'_, S> {
    /// The 1-based page number.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn has_next(&self) -> bool {
        self.number() < self.page_count
    }

    pub fn has_previous(&self) -> bool {
        self.number() > 1
    }

    pub fn next_number(&self) -> usize {
        self.number() + 1
    }

    pub fn previous_number(&self) -> usize {
        self.number() - 1
    }

    /// Fetches the items on this page from the source.
    pub fn fetch(&self) -> Vec<S::Item> {
        self.source.slice(self.index * self.per_page, self.per_page)
    }
}
