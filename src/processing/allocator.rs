//! Subnet assignment.
//!
//! Requests are served largest block first (ascending prefix length, ties in
//! request order). Each request takes the lowest-addressed block of its size
//! that does not overlap anything already committed.

use crate::error::AllocationError;
use crate::models::{AllocationSet, AssignedSubnet, Ipv4, SubnetRequest};
use crate::processing::validate_requests;

/// Assign a subnet of the requested size to every request.
///
/// # Arguments
/// * `base` - The network to carve subnets from
/// * `requests` - Requested networks, in input order
/// * `location_code` - Prefix for each `location_description`
/// * `company_name` - Prefix for each `company_description`
///
/// # Returns
/// * `Ok(AllocationSet)` - One assigned subnet per request, in request order
/// * `Err(AllocationError)` - The first request that could not be satisfied
pub fn assign_subnets(
    base: Ipv4,
    requests: &[SubnetRequest],
    location_code: &str,
    company_name: &str,
) -> Result<AllocationSet, AllocationError> {
    log::info!(
        "#Start assign_subnets() base={base} requests={}",
        requests.len()
    );
    validate_requests(base, requests)?;

    let mut order: Vec<usize> = (0..requests.len()).collect();
    order.sort_by_key(|&i| requests[i].prefix_length);

    let mut used: Vec<Ipv4> = Vec::with_capacity(requests.len());
    let mut assigned: Vec<Option<AssignedSubnet>> = vec![None; requests.len()];

    for i in order {
        let request = &requests[i];
        let network = find_free_subnet(base, request.prefix_length, &used)?.ok_or_else(|| {
            log::warn!(
                "No room left in {base} for /{} request '{}'",
                request.prefix_length,
                request.name
            );
            AllocationError::Exhausted {
                name: request.name.clone(),
                requested_prefix_length: request.prefix_length,
                base,
            }
        })?;
        log::debug!("Assigned {network} to '{}'", request.name);

        used.push(network);
        assigned[i] = Some(AssignedSubnet::new(
            request,
            network,
            location_code,
            company_name,
        ));
    }

    let subnets: Vec<AssignedSubnet> = assigned.into_iter().flatten().collect();
    log::info!("Assigned {} subnets from {base}", subnets.len());
    Ok(AllocationSet { base, subnets })
}

/// Find the lowest-addressed block of size `mask` in `base` that overlaps
/// none of `used`.
///
/// Candidates are generated lazily. A candidate that hits a used block moves
/// the scan past the end of that block, since every candidate in between
/// overlaps it too.
pub fn find_free_subnet(
    base: Ipv4,
    mask: u8,
    used: &[Ipv4],
) -> Result<Option<Ipv4>, AllocationError> {
    let mut candidates = base
        .subnets(mask)
        .map_err(|e| AllocationError::InvalidRequest {
            name: format!("/{mask}"),
            reason: e.to_string(),
        })?;

    while let Some(candidate) = candidates.next() {
        match used.iter().find(|u| u.overlaps(&candidate)) {
            None => return Ok(Some(candidate)),
            Some(blocking) => {
                log::trace!("{candidate} overlaps {blocking}");
                candidates.skip_past(blocking.hi());
            }
        }
    }
    Ok(None)
}
