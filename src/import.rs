//! Module import insertion for wrapper components.
//!
//! A wrapper that is a component has to be imported before the document can
//! reference it. [`add_import`] reuses an existing import of the same binding
//! when the document already has one, and otherwise prepends a new import
//! declaration to the root.

use crate::node::{Esm, ImportDeclaration, ImportSpecifier, Node};

/// Make `item` from module `path` available in `tree`.
///
/// - `default_import`: import the module's default export instead of the
///   named export `item`.
/// - `local`: preferred local name; defaults to `item`.
///
/// Only root-level import declarations of `path` are considered. Returns the
/// name the document must use to reference the item, which is the existing
/// local binding when the item was already imported.
pub fn add_import(
    tree: &mut Node,
    path: &str,
    item: &str,
    default_import: bool,
    local: Option<&str>,
) -> String {
    let local = local.unwrap_or(item);

    if let Some(existing) = find_binding(tree, path, item, default_import) {
        tracing::debug!(path, item, local = existing.as_str(), "import already present");
        return existing;
    }

    let Some(children) = tree.children_mut() else {
        return local.to_string();
    };

    let decl = if default_import {
        ImportDeclaration::default_import(path, local)
    } else {
        ImportDeclaration::named(path, item, local)
    };
    tracing::debug!(source = decl.to_source(), "inserting import");
    children.insert(0, Esm::import(decl).into());

    local.to_string()
}

/// Local name of an existing binding for `item` imported from `path`.
fn find_binding(tree: &Node, path: &str, item: &str, default_import: bool) -> Option<String> {
    tree.children()?
        .iter()
        .filter_map(Node::as_esm)
        .flat_map(|esm| &esm.imports)
        .filter(|decl| decl.source == path)
        .flat_map(|decl| &decl.specifiers)
        .find_map(|spec| match spec {
            ImportSpecifier::Default { local } if default_import => Some(local.to_string()),
            ImportSpecifier::Named { imported, local } if !default_import && imported == item => {
                Some(local.to_string())
            }
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Element;
    use pretty_assertions::assert_eq;

    const PATH: &str = "@dummy/import";

    fn empty_doc() -> Node {
        Node::root([Element::new("h1").text("Title").into()])
    }

    fn first_source(tree: &Node) -> &str {
        &tree.children().unwrap()[0].as_esm().unwrap().value
    }

    #[test]
    fn test_adds_named_import() {
        let mut tree = empty_doc();
        let name = add_import(&mut tree, PATH, "Wrapper", false, None);

        assert_eq!(name, "Wrapper");
        assert_eq!(first_source(&tree), "import { Wrapper } from '@dummy/import'");
        assert_eq!(tree.children().unwrap().len(), 2);
    }

    #[test]
    fn test_adds_renamed_import() {
        let mut tree = empty_doc();
        let name = add_import(&mut tree, PATH, "OriginalWrapperName", false, Some("Wrapper"));

        assert_eq!(name, "Wrapper");
        assert_eq!(
            first_source(&tree),
            "import { OriginalWrapperName as Wrapper } from '@dummy/import'"
        );
    }

    #[test]
    fn test_adds_default_import() {
        let mut tree = empty_doc();
        let name = add_import(&mut tree, PATH, "Wrapper", true, None);

        assert_eq!(name, "Wrapper");
        assert_eq!(first_source(&tree), "import Wrapper from '@dummy/import'");
    }

    #[test]
    fn test_reuses_existing_named_import() {
        let existing = ImportDeclaration::named(PATH, "OriginalWrapperName", "MyWrapper");
        let mut tree = Node::root([Esm::import(existing).into(), Element::new("p").into()]);
        let before = tree.clone();

        let name = add_import(&mut tree, PATH, "OriginalWrapperName", false, Some("Wrapper"));

        assert_eq!(name, "MyWrapper");
        assert_eq!(tree, before);
    }

    #[test]
    fn test_reuses_existing_default_import() {
        let existing = ImportDeclaration::default_import(PATH, "DefaultWrapper");
        let mut tree = Node::root([Esm::import(existing).into()]);

        let name = add_import(&mut tree, PATH, "Wrapper", true, None);

        assert_eq!(name, "DefaultWrapper");
        assert_eq!(tree.children().unwrap().len(), 1);
    }

    #[test]
    fn test_ignores_other_modules_and_nested_esm() {
        let other = ImportDeclaration::named("other/module", "Wrapper", "Wrapper");
        let nested = Element::new("div")
            .child(Esm::import(ImportDeclaration::named(PATH, "Wrapper", "Nested")))
            .into();
        let mut tree = Node::root([Esm::import(other).into(), nested]);

        let name = add_import(&mut tree, PATH, "Wrapper", false, None);

        assert_eq!(name, "Wrapper");
        assert_eq!(first_source(&tree), "import { Wrapper } from '@dummy/import'");
        assert_eq!(tree.children().unwrap().len(), 3);
    }

    #[test]
    fn test_default_does_not_match_named() {
        let existing = ImportDeclaration::named(PATH, "Wrapper", "Wrapper");
        let mut tree = Node::root([Esm::import(existing).into()]);

        let name = add_import(&mut tree, PATH, "Wrapper", true, Some("Slide"));

        assert_eq!(name, "Slide");
        assert_eq!(first_source(&tree), "import Slide from '@dummy/import'");
    }
}
