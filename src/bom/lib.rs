//! # Bom Architecture
//!
//! Bom is a **UI-agnostic bill-of-materials library**. It models products as trees of
//! parts, where every part name is deduplicated into one canonical, shared record.
//! The `bom` binary is one thin client on top of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the session's ComponentCatalog                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Builds assemblies from part specifications               │
//! │  - Returns structured `CmdResult` values, never prints      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (catalog.rs, tree.rs, assembly.rs)                    │
//! │  - ComponentCatalog: name → canonical shared record         │
//! │  - ComponentTree: arena of nodes, children are handles      │
//! │  - Assembly: labelled set of top-level nodes                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sharing Model
//!
//! Records are shared, nodes are not. Resolving `"Door"` twice through the catalog
//! yields the same `Rc<ComponentRecord>`, but attaching it twice by name creates two
//! independent nodes, each able to carry its own children. A caller who wants one
//! node to appear in several places attaches its [`tree::NodeId`] explicitly; the
//! tree refuses any attachment that would make a node its own descendant, so
//! recursive cost and render always terminate.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Build, catalog listing and config operations
//! - [`catalog`]: The flyweight registry
//! - [`tree`]: Arena-backed component tree with cost aggregation and rendering
//! - [`assembly`]: Top-level product facade
//! - [`model`]: `ComponentRecord`
//! - [`part_spec`]: `Door/Window=120` style part specifications
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod assembly;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod part_spec;
pub mod tree;
