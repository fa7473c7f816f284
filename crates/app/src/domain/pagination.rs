//! Offset pagination

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Largest page a caller may request; larger limits are clamped.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Offset/limit window over an ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    skip: u32,
    limit: u32,
}

impl Pagination {
    /// Window starting at `skip` (default 0) holding `limit` rows (default
    /// [`DEFAULT_PAGE_SIZE`]).
    ///
    /// `limit` is clamped to `1..=MAX_PAGE_SIZE`, so a limit of zero is raised
    /// to one row rather than producing an empty page.
    #[must_use]
    pub fn new(skip: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            skip: skip.unwrap_or(0),
            limit: limit
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }

    #[must_use]
    pub const fn skip(&self) -> u32 {
        self.skip
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    pub(crate) fn offset_i64(&self) -> i64 {
        i64::from(self.skip)
    }

    pub(crate) fn limit_i64(&self) -> i64 {
        i64::from(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_hundred() {
        let page = Pagination::default();

        assert_eq!(page.skip(), 0);
        assert_eq!(page.limit(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn oversized_limit_is_clamped() {
        assert_eq!(Pagination::new(None, Some(10_000)).limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn zero_limit_returns_at_least_one_row() {
        assert_eq!(Pagination::new(Some(5), Some(0)).limit(), 1);
    }
}
