use std::fmt;

/// One canonical, reusable part.
///
/// Records are created only by [`crate::catalog::ComponentCatalog`] and never change
/// afterwards; everything else holds them through an `Rc`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRecord {
    name: String,
    unit_cost: f64,
}

impl ComponentRecord {
    pub(crate) fn new(name: String, unit_cost: f64) -> Self {
        Self { name, unit_cost }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }
}

impl fmt::Display for ComponentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${})", self.name, self.unit_cost)
    }
}
