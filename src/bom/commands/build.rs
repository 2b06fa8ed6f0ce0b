use crate::assembly::Assembly;
use crate::catalog::ComponentCatalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BomError, Result};
use crate::part_spec::PartSpec;
use log::info;

/// Builds an assembly from `parts` in order and reports its rendering and total cost.
///
/// Any failing part aborts the whole build; records catalogued by earlier parts stay
/// in the catalog, since it only grows.
pub fn run(catalog: &mut ComponentCatalog, label: &str, parts: &[PartSpec]) -> Result<CmdResult> {
    let (assembly, messages) = assemble(catalog, label, parts)?;

    let mut result = CmdResult::default()
        .with_lines(assembly.render())
        .with_total_cost(assembly.total_cost());
    for message in messages {
        result.add_message(message);
    }

    info!(
        "built '{}': {} parts, total ${}",
        assembly.label(),
        parts.len(),
        assembly.total_cost()
    );
    Ok(result)
}

/// Builds the assembly without rendering it.
pub fn assemble(
    catalog: &mut ComponentCatalog,
    label: &str,
    parts: &[PartSpec],
) -> Result<(Assembly, Vec<CmdMessage>)> {
    let mut assembly = Assembly::new(label);
    let mut messages = Vec::new();

    for part in parts {
        if let Some(existing) = catalog.get(part.name()) {
            if existing.unit_cost() != part.unit_cost {
                messages.push(CmdMessage::warning(format!(
                    "{} is already catalogued at ${}; ignoring ${}",
                    existing.name(),
                    existing.unit_cost(),
                    part.unit_cost
                )));
            }
        }

        let parent_path = part.parent();
        if parent_path.is_empty() {
            assembly.add_by_name(catalog, part.name(), part.unit_cost)?;
        } else {
            let parent = assembly.find_path(&parent_path).ok_or_else(|| {
                BomError::InvalidArgument(format!(
                    "Cannot place '{}': no component at '{}' in '{}'",
                    part,
                    parent_path.join("/"),
                    label
                ))
            })?;
            assembly.attach_child_by_name(catalog, parent, part.name(), part.unit_cost)?;
        }
    }

    Ok((assembly, messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::CatalogFixture;
    use crate::commands::MessageLevel;

    fn parts(specs: &[&str]) -> Vec<PartSpec> {
        specs.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn builds_nested_parts_under_first_match() {
        let mut catalog = ComponentCatalog::new();
        let result = run(
            &mut catalog,
            "Cart",
            &parts(&["Wheel=10", "Wheel=10", "Wheel/Bearing=2"]),
        )
        .unwrap();

        assert_eq!(
            result.lines,
            vec![
                "Assembly: Cart",
                " - Wheel ($10)",
                "   - Bearing ($2)",
                " - Wheel ($10)",
            ]
        );
        assert_eq!(result.total_cost, Some(22.0));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn warns_when_cost_is_ignored() {
        let mut catalog = CatalogFixture::new().with_part("Door", 800.0).catalog;
        let result = run(&mut catalog, "Coupe", &parts(&["Door=900"])).unwrap();

        assert_eq!(result.total_cost, Some(800.0));
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("ignoring $900"));
    }

    #[test]
    fn missing_parent_aborts_build() {
        let mut catalog = ComponentCatalog::new();
        let err = run(&mut catalog, "Cart", &parts(&["Door/Window=120"])).unwrap_err();

        assert!(matches!(err, BomError::InvalidArgument(_)));
        assert!(err.to_string().contains("no component at 'Door'"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn invalid_cost_aborts_build() {
        let mut catalog = ComponentCatalog::new();
        let err = run(&mut catalog, "Cart", &parts(&["Wheel=10", "Axle=-3"])).unwrap_err();

        assert!(matches!(err, BomError::Validation(_)));
        assert!(catalog.contains("Wheel"));
        assert!(!catalog.contains("Axle"));
    }

    #[test]
    fn empty_build_has_header_and_zero_total() {
        let mut catalog = ComponentCatalog::new();
        let result = run(&mut catalog, "Nothing", &[]).unwrap();

        assert_eq!(result.lines, vec!["Assembly: Nothing"]);
        assert_eq!(result.total_cost, Some(0.0));
    }
}
