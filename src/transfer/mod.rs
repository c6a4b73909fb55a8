//! Artifact transfer
//!
//! Packages a finalized audio artifact as a multipart upload and maps the
//! transport outcome to a typed result.

mod client;

pub use client::{TransferClient, TransferError};
