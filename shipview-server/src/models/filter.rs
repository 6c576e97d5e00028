//! Request parameters, filter criteria and dropdown options

use serde::Serialize;

use super::pagination::PageWindow;

/// Query parameters accepted by `GET /api/orders`
///
/// Everything arrives as a string. Unknown keys are ignored.
#[derive(Debug, Clone, Default)]
pub struct OrdersParams {
    pub status: Option<String>,
    pub business_unit: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub state: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl OrdersParams {
    /// Collect recognized keys from decoded query-string pairs.
    ///
    /// The first occurrence of a key wins, so a repeated parameter is
    /// never a reason to reject the request.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "status" => &mut params.status,
                "business_unit" => &mut params.business_unit,
                "from_date" => &mut params.from_date,
                "to_date" => &mut params.to_date,
                "state" => &mut params.state,
                "limit" => &mut params.limit,
                "offset" => &mut params.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Filter criteria carried by the request.
    pub fn filter(&self) -> OrderFilter {
        OrderFilter {
            status: non_empty(&self.status),
            business_unit: non_empty(&self.business_unit),
            from_date: non_empty(&self.from_date),
            to_date: non_empty(&self.to_date),
            state: non_empty(&self.state),
        }
    }

    /// Pagination window, with defaults and clamping applied.
    pub fn window(&self) -> PageWindow {
        PageWindow::from_raw(self.limit.as_deref(), self.offset.as_deref())
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Conjunctive filter over orders. `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    /// Order status equals
    pub status: Option<String>,
    /// Business unit equals
    pub business_unit: Option<String>,
    /// Ship date on or after
    pub from_date: Option<String>,
    /// Ship date on or before
    pub to_date: Option<String>,
    /// Ship-to state equals
    pub state: Option<String>,
}

impl OrderFilter {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Distinct values for the dashboard's filter dropdowns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub statuses: Vec<String>,
    pub business_units: Vec<String>,
    pub carriers: Vec<String>,
}
