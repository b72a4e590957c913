//! Tool implementations
//!
//! Handler logic for the MCP tools, kept independent of the rmcp layer so
//! it can be exercised directly in tests.

pub mod foods;
pub mod reference;
pub mod status;
