//! Result of one allocation run.

use super::{AssignedSubnet, Ipv4};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Every subnet assigned in one run, carved from `base`.
///
/// `subnets` keeps request (input) order. No two members overlap.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AllocationSet {
    /// The network all subnets were carved from.
    pub base: Ipv4,
    /// Assigned subnets, in request order.
    pub subnets: Vec<AssignedSubnet>,
}

impl AllocationSet {
    pub fn len(&self) -> usize {
        self.subnets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subnets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssignedSubnet> {
        self.subnets.iter()
    }

    /// Subnets in processing order: ascending prefix length, ties in request order.
    pub fn by_prefix(&self) -> Vec<&AssignedSubnet> {
        self.subnets
            .iter()
            .sorted_by_key(|s| s.prefix_length())
            .collect()
    }

    /// Assigned networks sorted by address.
    pub fn used_blocks(&self) -> Vec<Ipv4> {
        self.subnets.iter().map(|s| s.network).sorted().collect()
    }

    /// Unused space left in the base network after this run.
    pub fn free_blocks(&self) -> Vec<Ipv4> {
        crate::processing::free_blocks(self.base, &self.used_blocks())
    }

    /// Look up an assigned subnet by request name.
    pub fn get(&self, name: &str) -> Option<&AssignedSubnet> {
        self.subnets.iter().find(|s| s.name == name)
    }
}

impl<'a> IntoIterator for &'a AllocationSet {
    type Item = &'a AssignedSubnet;
    type IntoIter = std::slice::Iter<'a, AssignedSubnet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
