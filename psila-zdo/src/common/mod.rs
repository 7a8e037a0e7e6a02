//! # Common structs and functions
//!
//! Addresses, capability information and the server mask.

pub mod address;
pub mod capability_information;
pub mod server_mask;
