use crate::catalog::ComponentCatalog;
use crate::commands::{build, CmdResult};
use crate::error::Result;
use crate::part_spec::PartSpec;

pub const SEDAN_LABEL: &str = "Sedan";

/// The sample sedan: two doors, two wheel sets, and a window and hinge on the first door.
pub fn sedan_parts() -> Vec<PartSpec> {
    vec![
        PartSpec::new(&["Door"], 800.0),
        PartSpec::new(&["Door"], 800.0),
        PartSpec::new(&["Wheels"], 400.0),
        PartSpec::new(&["Wheels"], 400.0),
        PartSpec::new(&["Door", "Window"], 120.0),
        PartSpec::new(&["Door", "Hinge"], 15.0),
    ]
}

pub fn run(catalog: &mut ComponentCatalog) -> Result<CmdResult> {
    build::run(catalog, SEDAN_LABEL, &sedan_parts())
}
