//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for UI clients.
//!
//! ## Session Catalog
//!
//! `BomApi` owns one [`ComponentCatalog`] for its whole lifetime. Every build goes
//! through it, so a part catalogued by one build keeps its cost in the next. Nothing
//! is persisted: a new `BomApi` starts with an empty catalog.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout or stderr; config files are touched only by
//!   the config command
//! - **Presentation concerns**: Returns data structures, not formatted text

use crate::catalog::ComponentCatalog;
use crate::commands;
use crate::config::BomConfig;
use crate::error::Result;
use crate::part_spec::PartSpec;
use std::path::{Path, PathBuf};

pub struct BomApi {
    catalog: ComponentCatalog,
    config_dir: PathBuf,
}

impl BomApi {
    pub fn new(config_dir: PathBuf) -> Self {
        Self {
            catalog: ComponentCatalog::new(),
            config_dir,
        }
    }

    pub fn build(&mut self, label: &str, parts: &[PartSpec]) -> Result<commands::CmdResult> {
        commands::build::run(&mut self.catalog, label, parts)
    }

    pub fn demo(&mut self) -> Result<commands::CmdResult> {
        commands::demo::run(&mut self.catalog)
    }

    pub fn catalog(&self) -> Result<commands::CmdResult> {
        commands::catalog::run(&self.catalog)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn load_config(&self) -> Result<BomConfig> {
        BomConfig::load(&self.config_dir)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> (tempfile::TempDir, BomApi) {
        let dir = tempfile::tempdir().unwrap();
        let api = BomApi::new(dir.path().to_path_buf());
        (dir, api)
    }

    #[test]
    fn demo_then_catalog_lists_sedan_parts() {
        let (_dir, mut api) = api();
        api.demo().unwrap();

        let listed = api.catalog().unwrap();
        assert_eq!(listed.catalog.len(), 4);
    }

    #[test]
    fn builds_share_the_session_catalog() {
        let (_dir, mut api) = api();
        api.build("First", &["Door=800".parse::<PartSpec>().unwrap()]).unwrap();

        let second = api.build("Second", &["Door=1".parse::<PartSpec>().unwrap()]).unwrap();
        assert_eq!(second.total_cost, Some(800.0));
        assert_eq!(second.messages.len(), 1);
    }

    #[test]
    fn config_round_trips_through_dir() {
        let (_dir, api) = api();
        api.config(ConfigAction::Set("show-catalog".into(), "true".into()))
            .unwrap();

        assert!(api.load_config().unwrap().show_catalog);
    }
}
