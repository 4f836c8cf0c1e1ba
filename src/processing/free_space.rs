//! Free space finding.
//!
//! Identifies the unused address ranges left in a base network between
//! assigned subnets, expressed as the largest aligned CIDR blocks.

use crate::models::{block_size, lo_mask, Ipv4};
use std::net::Ipv4Addr;

/// List the free blocks of `base` not covered by `used`.
///
/// Used blocks outside `base` are ignored. The result is in ascending address
/// order and, together with `used`, tiles `base` exactly.
pub fn free_blocks(base: Ipv4, used: &[Ipv4]) -> Vec<Ipv4> {
    let mut used: Vec<Ipv4> = used.iter().filter(|u| base.overlaps(u)).copied().collect();
    used.sort();

    let mut free = Vec::new();
    let mut next_ip = u32::from(base.lo()) as u64;
    let end = next_ip + base.size();

    for block in &used {
        let block_lo = u32::from(block.lo()) as u64;
        fill_gap(next_ip, block_lo, base.mask, &mut free);
        next_ip = next_ip.max(u32::from(block.hi()) as u64 + 1);
    }
    fill_gap(next_ip, end, base.mask, &mut free);

    log::debug!(
        "Found {} free blocks in {base} around {} used",
        free.len(),
        used.len()
    );
    free
}

/// Cover `[start, stop)` with the biggest aligned blocks, lowest first.
fn fill_gap(mut start: u64, stop: u64, start_mask: u8, free: &mut Vec<Ipv4>) {
    while start < stop {
        let mask = find_biggest_subnet(start, start_mask, stop);
        free.push(Ipv4 {
            addr: Ipv4Addr::from(start as u32),
            mask,
        });
        start += block_size(mask);
    }
}

/// Find the biggest subnet that starts at `start_ip` and ends before `stop`.
///
/// The returned mask is constrained by:
/// 1. The `start_mask` parameter (won't return a smaller mask)
/// 2. The IP alignment - `start_ip` must be a valid network address for the mask
/// 3. The subnet must end before `stop`
fn find_biggest_subnet(start_ip: u64, start_mask: u8, stop: u64) -> u8 {
    let min_mask_for_alignment = lo_mask(Ipv4Addr::from(start_ip as u32));
    let mut next_mask = start_mask.max(min_mask_for_alignment);

    while start_ip + block_size(next_mask) > stop {
        next_mask += 1;
    }

    assert!(
        next_mask <= 32,
        "next_mask[{next_mask}] > 32 should never happen."
    );
    next_mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> Ipv4 {
        Ipv4::network(s).unwrap()
    }

    fn nets(list: &[&str]) -> Vec<Ipv4> {
        list.iter().map(|s| net(s)).collect()
    }

    #[test]
    fn test_free_blocks_empty_and_full() {
        let base = net("10.0.0.0/24");
        assert_eq!(free_blocks(base, &[]), vec![base]);
        assert!(free_blocks(base, &[base]).is_empty());
        assert_eq!(free_blocks(net("0.0.0.0/0"), &[]), vec![net("0.0.0.0/0")]);
    }

    #[test]
    fn test_free_blocks_around_used() {
        let base = net("10.0.0.0/24");
        assert_eq!(
            free_blocks(base, &nets(&["10.0.0.0/26"])),
            nets(&["10.0.0.64/26", "10.0.0.128/25"])
        );
        assert_eq!(
            free_blocks(base, &nets(&["10.0.0.64/26"])),
            nets(&["10.0.0.0/26", "10.0.0.128/25"])
        );
        // Unsorted input and blocks outside the base.
        assert_eq!(
            free_blocks(base, &nets(&["10.0.0.128/25", "10.9.0.0/16", "10.0.0.0/26"])),
            nets(&["10.0.0.64/26"])
        );
    }

    #[test]
    fn test_free_blocks_alignment() {
        // 10.6.2.80 can only start a /28, then blocks grow as alignment allows.
        let base = net("10.6.0.0/20");
        let used = nets(&[
            "10.6.0.0/23",
            "10.6.2.0/26",
            "10.6.2.64/28",
            "10.6.8.0/21",
        ]);
        assert_eq!(
            free_blocks(base, &used),
            nets(&[
                "10.6.2.80/28",
                "10.6.2.96/27",
                "10.6.2.128/25",
                "10.6.3.0/24",
                "10.6.4.0/22",
            ])
        );
    }

    #[test]
    fn test_free_blocks_tile_base() {
        let base = net("172.16.0.0/16");
        let used = nets(&["172.16.0.0/20", "172.16.77.0/24", "172.16.200.16/28"]);
        let free = free_blocks(base, &used);

        let total: u64 = free.iter().chain(used.iter()).map(|b| b.size()).sum();
        assert_eq!(total, base.size());
        for f in &free {
            assert!(f.is_network(), "{f} is not aligned");
            assert!(base.contains_subnet(f));
            assert!(used.iter().all(|u| !u.overlaps(f)), "{f} overlaps used");
        }
    }

    #[test]
    fn test_find_biggest_subnet() {
        let start = u32::from(Ipv4Addr::new(10, 0, 0, 0)) as u64;
        let stop = u32::from(Ipv4Addr::new(10, 0, 1, 0)) as u64;
        assert_eq!(24, find_biggest_subnet(start, 8, stop));
        assert_eq!(28, find_biggest_subnet(start, 28, stop));

        let stop = u32::from(Ipv4Addr::new(10, 11, 16, 0)) as u64;
        assert_eq!(13, find_biggest_subnet(start, 8, stop));
    }
}
