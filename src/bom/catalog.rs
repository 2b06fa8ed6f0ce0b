//! # Component Catalog
//!
//! The catalog is the flyweight registry: it maps a component name to the one
//! canonical [`ComponentRecord`] for that name and hands out shared `Rc` handles to it.
//!
//! ## First Writer Wins
//!
//! The cost given on the first `resolve` of a name is the cost forever. Later calls
//! with the same name return the existing record untouched, whatever cost they pass.
//! Conflicting costs are logged, never applied.
//!
//! ## Lifecycle
//!
//! The catalog only grows. There is no removal and no global instance: callers own
//! a catalog and pass it by `&mut` wherever records may be created.

use crate::error::{BomError, Result};
use crate::model::ComponentRecord;
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct ComponentCatalog {
    records: Vec<Rc<ComponentRecord>>,
    by_name: HashMap<String, usize>,
}

impl ComponentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical record for `name`, creating it with `unit_cost` if absent.
    ///
    /// The cost is validated on every call, hit or miss. A cost of `-0.0` is stored as `0`.
    pub fn resolve(&mut self, name: &str, unit_cost: f64) -> Result<Rc<ComponentRecord>> {
        validate(name, unit_cost)?;
        let unit_cost = unit_cost + 0.0;

        if let Some(&slot) = self.by_name.get(name) {
            let existing = Rc::clone(&self.records[slot]);
            if existing.unit_cost() != unit_cost {
                warn!(
                    "component '{}' already catalogued at ${}; ignoring ${}",
                    name,
                    existing.unit_cost(),
                    unit_cost
                );
            } else {
                trace!("catalog hit for '{}'", name);
            }
            return Ok(existing);
        }

        let record = Rc::new(ComponentRecord::new(name.to_string(), unit_cost));
        self.by_name.insert(name.to_string(), self.records.len());
        self.records.push(Rc::clone(&record));
        debug!("catalogued '{}' at ${}", name, unit_cost);
        Ok(record)
    }

    pub fn get(&self, name: &str) -> Option<Rc<ComponentRecord>> {
        self.by_name
            .get(name)
            .map(|&slot| Rc::clone(&self.records[slot]))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Snapshot of every record, in registration order.
    pub fn list_all(&self) -> Vec<Rc<ComponentRecord>> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate(name: &str, unit_cost: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(BomError::Validation(
            "Component name cannot be empty".to_string(),
        ));
    }
    if !unit_cost.is_finite() {
        return Err(BomError::Validation(format!(
            "Cost for '{}' must be a finite number, got {}",
            name, unit_cost
        )));
    }
    if unit_cost < 0.0 {
        return Err(BomError::Validation(format!(
            "Cost for '{}' cannot be negative, got {}",
            name, unit_cost
        )));
    }
    Ok(())
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct CatalogFixture {
        pub catalog: ComponentCatalog,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                catalog: ComponentCatalog::new(),
            }
        }

        pub fn with_part(mut self, name: &str, unit_cost: f64) -> Self {
            self.catalog.resolve(name, unit_cost).unwrap();
            self
        }

        /// Door, Wheels, Window and Hinge at their sedan prices.
        pub fn with_sedan_parts(self) -> Self {
            self.with_part("Door", 800.0)
                .with_part("Wheels", 400.0)
                .with_part("Window", 120.0)
                .with_part("Hinge", 15.0)
        }
    }
}
