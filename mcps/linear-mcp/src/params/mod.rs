//! Parameter types for Linear MCP tools

mod issue;

pub use issue::*;
