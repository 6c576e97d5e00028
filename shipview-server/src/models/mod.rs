//! Domain models
//!
//! Request values are turned into these types at the HTTP edge; nothing
//! past this point sees raw query strings.

pub mod filter;
pub mod order;
pub mod pagination;

pub use filter::{FilterOptions, OrderFilter, OrdersParams};
pub use order::{export_projection, OrderColumn, OrderRecord, SqlType, ORDERS_TABLE};
pub use pagination::{PageWindow, Paginated, DEFAULT_LIMIT, MAX_LIMIT};
