//! Subnet allocation logic.
//!
//! This module contains the allocation core and its helpers:
//! - [`allocator`] - Assigning subnets to requests
//! - [`validate`] - Request validation
//! - [`free_space`] - Finding unused space after a run

mod allocator;
mod free_space;
mod validate;

// Re-export public functions
pub use allocator::{assign_subnets, find_free_subnet};
pub use free_space::free_blocks;
pub use validate::validate_requests;
