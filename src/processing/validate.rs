//! Request validation.
//!
//! Rejects input the allocator cannot give a well-defined answer for, before
//! any subnet is committed.

use crate::error::AllocationError;
use crate::models::{Ipv4, SubnetRequest, MAX_LENGTH, MAX_VLAN_ID};
use std::collections::HashSet;

/// Check the base network and every request against it.
///
/// # Returns
/// * `Ok(())` - every request can be attempted
/// * `Err(AllocationError)` - the first problem found, in request order
pub fn validate_requests(base: Ipv4, requests: &[SubnetRequest]) -> Result<(), AllocationError> {
    if !base.is_network() {
        return Err(AllocationError::InvalidBaseNetwork(base));
    }
    if requests.is_empty() {
        return Err(AllocationError::NoRequests);
    }

    let mut seen = HashSet::new();
    for request in requests {
        let invalid = |reason: String| AllocationError::InvalidRequest {
            name: request.name.clone(),
            reason,
        };

        if request.name.trim().is_empty() {
            return Err(invalid("name must not be empty".to_string()));
        }
        if !seen.insert(request.name.as_str()) {
            return Err(invalid("duplicate name".to_string()));
        }
        if request.prefix_length < base.mask || request.prefix_length > MAX_LENGTH {
            return Err(invalid(format!(
                "prefix length /{} must be between /{} and /{MAX_LENGTH} for base {base}",
                request.prefix_length, base.mask
            )));
        }
        if let Some(vid) = request.vlan_id {
            if vid > MAX_VLAN_ID {
                return Err(invalid(format!(
                    "vlan id {vid} is above the maximum of {MAX_VLAN_ID}"
                )));
            }
        }
    }
    log::debug!("Validated {} subnet requests against {base}", requests.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Ipv4 {
        Ipv4::network("10.0.0.0/16").unwrap()
    }

    #[test]
    fn test_valid_requests() {
        let requests = vec![
            SubnetRequest::new("Core", 16, None),
            SubnetRequest::new("Mgmt", 32, Some(MAX_VLAN_ID)),
        ];
        assert_eq!(validate_requests(base(), &requests), Ok(()));
    }

    #[test]
    fn test_host_bits_in_base() {
        let base = Ipv4::new("10.0.0.1/16").unwrap();
        let requests = vec![SubnetRequest::new("Core", 24, None)];
        assert_eq!(
            validate_requests(base, &requests),
            Err(AllocationError::InvalidBaseNetwork(base))
        );
    }

    #[test]
    fn test_no_requests() {
        assert_eq!(
            validate_requests(base(), &[]),
            Err(AllocationError::NoRequests)
        );
    }

    #[test]
    fn test_prefix_out_of_range() {
        let requests = vec![SubnetRequest::new("Huge", 15, None)];
        let err = validate_requests(base(), &requests).unwrap_err();
        assert!(matches!(
            err,
            AllocationError::InvalidRequest { ref name, .. } if name == "Huge"
        ));

        let requests = vec![SubnetRequest::new("Tiny", 33, None)];
        assert!(validate_requests(base(), &requests).is_err());
    }

    #[test]
    fn test_duplicate_and_empty_names() {
        let requests = vec![
            SubnetRequest::new("Core", 24, None),
            SubnetRequest::new("Core", 28, None),
        ];
        assert_eq!(
            validate_requests(base(), &requests),
            Err(AllocationError::InvalidRequest {
                name: "Core".to_string(),
                reason: "duplicate name".to_string()
            })
        );

        let requests = vec![SubnetRequest::new("  ", 24, None)];
        assert!(matches!(
            validate_requests(base(), &requests),
            Err(AllocationError::InvalidRequest { .. })
        ));
    }

    #[test]
    fn test_vlan_id_range() {
        let requests = vec![SubnetRequest::new("Voice", 24, Some(4096))];
        assert!(matches!(
            validate_requests(base(), &requests),
            Err(AllocationError::InvalidRequest { ref reason, .. }) if reason.contains("4096")
        ));
    }
}
