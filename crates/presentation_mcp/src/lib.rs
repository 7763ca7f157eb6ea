//! Auckland Transport MCP server library.
//!
//! Provides the [`AucklandTransportServer`] MCP handler and its tool parameter
//! types. Used by the `auckland-transport-mcp` binary and by protocol tests.

pub mod params;
pub mod server;

pub use server::AucklandTransportServer;
