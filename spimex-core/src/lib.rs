#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for the trading results service.
///
/// This module contains the trading result record, the fixed-length codes
/// that identify an instrument, the request-scoped filter sets and the
/// limits that govern how those filters are validated.
///
/// The models carry no I/O. Validation lives next to the data it checks so
/// that an invalid filter cannot reach a repository.
pub mod models;

/// Interface traits for the trading results service.
///
/// This module contains the "ports" in the hexagonal architecture pattern:
/// the read-only repository the HTTP layer queries, the response cache it
/// consults, and the application trait that bundles them together.
pub mod ports;
