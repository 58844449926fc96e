//! Conversion Library
//!
//! Unit taxonomy and conversion engine behind a single-screen conversion form,
//! plus the MCP tools that drive it.

pub mod build_info;
pub mod conversion;
pub mod form;
pub mod mcp;
pub mod tools;
pub mod units;
