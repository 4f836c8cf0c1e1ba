//! Subnet request data model.

use serde::{Deserialize, Serialize};

/// Highest VLAN id that fits the 12-bit 802.1Q VID field.
pub const MAX_VLAN_ID: u16 = 4095;

/// One requested network, as read from the request file.
///
/// JSON shape: `{ "name": "Core", "cidr": 24, "vid": 10 }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetRequest {
    /// Name of the network, unique within a run.
    pub name: String,
    /// Requested prefix length.
    #[serde(rename = "cidr")]
    pub prefix_length: u8,
    /// Optional VLAN id.
    #[serde(default, rename = "vid", skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<u16>,
}

impl SubnetRequest {
    pub fn new(name: &str, prefix_length: u8, vlan_id: Option<u16>) -> Self {
        SubnetRequest {
            name: name.to_string(),
            prefix_length,
            vlan_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_json() {
        let json = r#"[{"name":"Core","cidr":24,"vid":10},{"name":"Mgmt","cidr":28,"extra":"x"}]"#;
        let requests: Vec<SubnetRequest> = serde_json::from_str(json).unwrap();
        assert_eq!(requests[0], SubnetRequest::new("Core", 24, Some(10)));
        assert_eq!(requests[1], SubnetRequest::new("Mgmt", 28, None));
    }

    #[test]
    fn test_request_rejects_non_numeric_cidr() {
        let json = r#"{"name":"Core","cidr":"24"}"#;
        assert!(serde_json::from_str::<SubnetRequest>(json).is_err());
        let json = r#"{"name":"Core","cidr":300}"#;
        assert!(serde_json::from_str::<SubnetRequest>(json).is_err());
    }
}
