//! Model Context Protocol (MCP) server.
//!
//! Exposes catalog listing, checks and lookups to AI assistants over stdio.
//!
//! - `server`: tool implementations
//! - `types`: tool parameters and result DTOs

mod server;
pub mod types;

pub use server::{TsCatMcpServer, run_server};
