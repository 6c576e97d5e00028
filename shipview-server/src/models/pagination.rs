//! Pagination window and paginated response

use serde::Serialize;

/// Maximum rows per request
pub const MAX_LIMIT: i64 = 50_000;

/// Rows returned when no usable limit is given
pub const DEFAULT_LIMIT: i64 = 10_000;

/// Pagination window applied to the row fetch only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    limit: i64,
    offset: i64,
}

impl PageWindow {
    /// Create a window with clamping.
    ///
    /// - Limit is clamped to 0..=50000
    /// - Negative offsets become 0
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(0, MAX_LIMIT),
            offset: offset.max(0),
        }
    }

    /// Build a window from raw query-string values.
    ///
    /// Missing or non-numeric values fall back to the defaults; nothing
    /// here is ever an error.
    pub fn from_raw(limit: Option<&str>, offset: Option<&str>) -> Self {
        Self::new(
            parse_int(limit).unwrap_or(DEFAULT_LIMIT),
            parse_int(offset).unwrap_or(0),
        )
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

fn parse_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
}

/// One page of rows plus the unpaginated total
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    /// Rows in the window
    pub data: Vec<T>,
    /// Rows matching the filter, ignoring the window
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: i64, window: PageWindow) -> Self {
        Self {
            data,
            total,
            limit: window.limit(),
            offset: window.offset(),
        }
    }
}
