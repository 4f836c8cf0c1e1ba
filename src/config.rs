//! Command-line configuration.
//!
//! Every required argument can also come from the environment, and a `.env`
//! file in the working directory is loaded before parsing.

use crate::error::ConfigError;
use crate::models::Ipv4;
use clap::Parser;
use std::path::PathBuf;

/// Required length of the location code.
pub const LOCATION_CODE_LEN: usize = 3;

/// Assign subnets to requested networks based on a base CIDR network.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The base CIDR network to use
    #[arg(short = 's', long, value_name = "BASE_CIDR", env = "SUBNET_BASE_CIDR")]
    pub base_cidr: String,

    /// The JSON file containing the network definitions
    #[arg(short = 'j', long, value_name = "JSON_FILE", env = "SUBNET_JSON_FILE")]
    pub json_file: PathBuf,

    /// The location code to use (exactly 3 characters)
    #[arg(
        short = 'l',
        long,
        value_name = "LOCATION_CODE",
        env = "SUBNET_LOCATION_CODE"
    )]
    pub location_code: String,

    /// The company name to use
    #[arg(
        short = 'c',
        long,
        value_name = "COMPANY_NAME",
        env = "SUBNET_COMPANY_NAME"
    )]
    pub company_name: String,

    /// The file path for CSV output
    #[arg(short = 'o', long, value_name = "OUTPUT_CSV")]
    pub output_csv: Option<PathBuf>,

    /// The file path for JSON output
    #[arg(long, value_name = "OUTPUT_JSON")]
    pub output_json: Option<PathBuf>,

    /// Print the free blocks left in the base network
    #[arg(long)]
    pub show_free: bool,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub base_cidr: Ipv4,
    pub json_file: PathBuf,
    pub location_code: String,
    pub company_name: String,
    pub output_csv: Option<PathBuf>,
    pub output_json: Option<PathBuf>,
    pub show_free: bool,
}

impl TryFrom<Args> for RunConfig {
    type Error = ConfigError;

    /// Checks run in a fixed order: base CIDR, input file, location code,
    /// company name. The first failure is returned.
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let base_cidr =
            Ipv4::network(&args.base_cidr).map_err(|source| ConfigError::InvalidBaseNetwork {
                input: args.base_cidr.clone(),
                source,
            })?;

        if !args.json_file.is_file() {
            return Err(ConfigError::MissingInputFile(args.json_file));
        }

        if args.location_code.chars().count() != LOCATION_CODE_LEN {
            return Err(ConfigError::InvalidLocationCode(args.location_code));
        }

        if args.company_name.trim().is_empty() {
            return Err(ConfigError::EmptyCompanyName);
        }

        Ok(RunConfig {
            base_cidr,
            json_file: args.json_file,
            location_code: args.location_code,
            company_name: args.company_name,
            output_csv: args.output_csv,
            output_json: args.output_json,
            show_free: args.show_free,
        })
    }
}
