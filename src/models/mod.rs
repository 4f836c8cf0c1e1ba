//! Domain models for subnet assignment.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 network with CIDR notation support
//! - [`SubnetRequest`] - one requested network
//! - [`AssignedSubnet`] and [`AllocationSet`] - allocation results

mod allocation;
mod ipv4;
mod request;
mod subnet;

// Re-export public types
pub use allocation::AllocationSet;
pub use ipv4::{
    block_size, lo_mask, num_hosts, CidrError, Ipv4, Subnets, MAX_LENGTH,
};
pub use request::{SubnetRequest, MAX_VLAN_ID};
pub use subnet::{AssignedSubnet, FIELD_NAMES};
