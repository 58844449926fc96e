//! Conversion Tools module
//!
//! MCP tool implementations for the conversion service.

pub mod conversion;
pub mod status;
