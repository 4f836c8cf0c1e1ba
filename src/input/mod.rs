//! Request file loading.
//!
//! - [`requests`] - Reading subnet requests from a JSON file

mod requests;

pub use requests::{parse_requests, read_requests};
