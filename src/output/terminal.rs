//! Terminal output utilities.
//!
//! Provides formatting helpers and console printing of allocation results.

use crate::models::{num_hosts, AllocationSet, Ipv4};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// One line per subnet, in processing order (largest block first).
pub fn allocation_lines(set: &AllocationSet) -> Vec<String> {
    set.by_prefix()
        .into_iter()
        .map(|s| {
            format!(
                "{network},{hosts},{broadcast},{company},{location}",
                network = format_field(s.network, 20),
                hosts = format_field(
                    format!("{}_hosts", num_hosts(s.prefix_length()).unwrap_or(0)),
                    14
                ),
                broadcast = format_field(format!("{}_br", s.network.hi()), 20),
                company = format_field(&s.company_description, 30),
                location = format_field(&s.location_description, 24),
            )
        })
        .collect()
}

/// One line per free block.
pub fn free_block_lines(blocks: &[Ipv4]) -> Vec<String> {
    blocks
        .iter()
        .map(|b| {
            format!(
                "{network},{size}",
                network = format_field(b, 20),
                size = format_field(format!("{}_addrs", b.size()), 16),
            )
        })
        .collect()
}

/// Print the allocation set to stdout.
pub fn print_allocations(set: &AllocationSet) {
    println!(
        "{} {} subnets from {}",
        "#Assigned".green(),
        set.len(),
        set.base
    );
    println!(
        r#"           "network",       "hosts",           "broadcast",                 "company",              "location""#
    );
    for line in allocation_lines(set) {
        println!("{line}");
    }
}

/// Print the free blocks left in the base network to stdout.
pub fn print_free_blocks(blocks: &[Ipv4]) {
    if blocks.is_empty() {
        println!("#{}# base network fully allocated", "NOTE".on_red());
        return;
    }
    let free: u64 = blocks.iter().map(|b| b.size()).sum();
    println!(
        "{} {} blocks, {} addresses",
        "#Free".yellow(),
        blocks.len(),
        free
    );
    for line in free_block_lines(blocks) {
        println!("{line}");
    }
}
