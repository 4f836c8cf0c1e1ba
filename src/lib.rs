//! Assign non-overlapping IPv4 subnets, carved from one base network, to a
//! list of requested networks.
//!
//! The allocation core ([`assign_subnets`]) is a pure function; loading,
//! printing and exporting live in [`input`], [`output`] and [`config`].

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use config::{Args, RunConfig};
pub use error::{AllocationError, ConfigError, Error, ExportError};
pub use models::{AllocationSet, AssignedSubnet, Ipv4, SubnetRequest};
pub use processing::assign_subnets;

/// Load requests, allocate, print and export, as configured.
///
/// Export files are written only after every request has been satisfied.
pub fn run(config: &RunConfig) -> Result<AllocationSet, Error> {
    log::info!(
        "#Start run() base={} location={} company='{}'",
        config.base_cidr,
        config.location_code,
        config.company_name
    );
    let requests = input::read_requests(&config.json_file)?;
    let set = assign_subnets(
        config.base_cidr,
        &requests,
        &config.location_code,
        &config.company_name,
    )?;

    output::print_allocations(&set);
    if config.show_free {
        output::print_free_blocks(&set.free_blocks());
    }

    if let Some(path) = &config.output_csv {
        output::write_csv(&set, path)?;
    }
    if let Some(path) = &config.output_json {
        output::write_json(&set, path)?;
    }
    Ok(set)
}
