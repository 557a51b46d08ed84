//! importcheck - Static import/export cross-checker for JavaScript and
//! TypeScript projects
//!
//! This crate parses every module source file in a project through a chain
//! of progressively more tolerant backends, builds a graph of exported
//! symbols and import requests, and reports every import of a symbol its
//! target module does not export.

pub mod analysis;
pub mod export;
pub mod graph;
pub mod parser;
pub mod project;
pub mod report;
