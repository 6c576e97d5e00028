//! Command implementations for the shipview CLI

pub mod check;
pub mod serve;

pub use check::run_check;
pub use serve::run_serve;
