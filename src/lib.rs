//! tscat - Qt Linguist catalog toolkit
//!
//! tscat is a CLI tool and library for working with Qt Linguist `.ts`
//! translation catalogs. It parses catalogs into a typed model, resolves
//! translations the way the Qt runtime does, checks catalogs for integrity
//! problems and rewrites them in canonical layout.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog model, XML reader/writer, lookup and plural rules
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Check context shared by commands and the MCP server
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Integrity checks over parsed catalogs

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
