//! Reading subnet requests from JSON.

use crate::error::ConfigError;
use crate::models::SubnetRequest;
use std::path::Path;

/// Parse a JSON array of subnet requests.
///
/// Errors carry the JSON path of the offending value, e.g. `[2].cidr`.
pub fn parse_requests(
    json: &str,
) -> Result<Vec<SubnetRequest>, serde_path_to_error::Error<serde_json::Error>> {
    let mut json_deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut json_deserializer)
}

/// Read subnet requests from a JSON file.
///
/// # Arguments
/// * `path` - The request file
///
/// # Returns
/// * `Ok(Vec<SubnetRequest>)` - Requests in file order
/// * `Err` - If the file does not exist, can't be read or is not valid
pub fn read_requests(path: &Path) -> Result<Vec<SubnetRequest>, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::MissingInputFile(path.to_path_buf()));
    }
    log::info!("Reading subnet requests from: {}", path.display());

    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let requests = parse_requests(&json).map_err(|e| {
        log::error!("Error parsing {} at {}", path.display(), e.path());
        ConfigError::ParseInput {
            path: path.to_path_buf(),
            json_path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    })?;

    log::info!("Loaded {} subnet requests", requests.len());
    Ok(requests)
}
