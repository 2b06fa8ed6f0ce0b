use crate::catalog::ComponentCatalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &ComponentCatalog) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_catalog(catalog.list_all());
    if catalog.is_empty() {
        result.add_message(CmdMessage::info("Catalog is empty."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::CatalogFixture;

    #[test]
    fn lists_records_in_registration_order() {
        let catalog = CatalogFixture::new().with_sedan_parts().catalog;
        let result = run(&catalog).unwrap();

        let names: Vec<_> = result.catalog.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Door", "Wheels", "Window", "Hinge"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_catalog_says_so() {
        let catalog = ComponentCatalog::new();
        let result = run(&catalog).unwrap();

        assert!(result.catalog.is_empty());
        assert_eq!(result.messages[0].content, "Catalog is empty.");
    }
}
