//! Route handlers organized by resource

pub mod filters;
pub mod health;
pub mod orders;
