//! Catalog operations, one per HTTP endpoint
//!
//! Every public operation follows the same lifecycle:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure

pub mod categories;
pub mod questions;
pub mod quiz;
pub mod requests;
pub mod responses;
