//! Module preamble nodes (`import` / `export` statements in MDX)
//!
//! The statement source is kept verbatim for the serializer. Import
//! declarations are kept in structured form so plugins can look up existing
//! bindings without re-parsing the source.

use compact_str::CompactString;

/// ESM block: module statements with their parsed import declarations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Esm {
    /// Statement source
    pub value: String,
    /// Import declarations found in `value`
    pub imports: Vec<ImportDeclaration>,
}

impl Esm {
    /// Create an ESM block without import declarations
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            imports: Vec::new(),
        }
    }

    /// Create an ESM block holding a single import declaration.
    ///
    /// The source text is generated from the declaration.
    pub fn import(decl: ImportDeclaration) -> Self {
        Self {
            value: decl.to_source(),
            imports: vec![decl],
        }
    }
}

/// `import ... from 'source'`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    /// Module path
    pub source: String,
    pub specifiers: Vec<ImportSpecifier>,
}

/// One binding introduced by an import declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSpecifier {
    /// `import Local from '...'`
    Default { local: CompactString },
    /// `import { Imported as Local } from '...'`
    Named { imported: CompactString, local: CompactString },
    /// `import * as Local from '...'`
    Namespace { local: CompactString },
}

impl ImportSpecifier {
    /// Name bound in the importing module
    pub fn local(&self) -> &str {
        match self {
            ImportSpecifier::Default { local }
            | ImportSpecifier::Named { local, .. }
            | ImportSpecifier::Namespace { local } => local,
        }
    }
}

impl ImportDeclaration {
    pub fn new(source: impl Into<String>, specifiers: Vec<ImportSpecifier>) -> Self {
        Self {
            source: source.into(),
            specifiers,
        }
    }

    /// `import Local from 'source'`
    pub fn default_import(source: impl Into<String>, local: impl Into<CompactString>) -> Self {
        Self::new(source, vec![ImportSpecifier::Default { local: local.into() }])
    }

    /// `import { Imported as Local } from 'source'`
    pub fn named(
        source: impl Into<String>,
        imported: impl Into<CompactString>,
        local: impl Into<CompactString>,
    ) -> Self {
        Self::new(
            source,
            vec![ImportSpecifier::Named {
                imported: imported.into(),
                local: local.into(),
            }],
        )
    }

    /// Render the declaration as module source
    pub fn to_source(&self) -> String {
        let mut default = None;
        let mut namespace = None;
        let mut named = Vec::new();
        for spec in &self.specifiers {
            match spec {
                ImportSpecifier::Default { local } => default = Some(local.as_str()),
                ImportSpecifier::Namespace { local } => namespace = Some(local.as_str()),
                ImportSpecifier::Named { imported, local } if imported == local => {
                    named.push(imported.to_string());
                }
                ImportSpecifier::Named { imported, local } => {
                    named.push(format!("{imported} as {local}"));
                }
            }
        }

        let mut clauses = Vec::new();
        if let Some(local) = default {
            clauses.push(local.to_string());
        }
        if let Some(local) = namespace {
            clauses.push(format!("* as {local}"));
        }
        if !named.is_empty() {
            clauses.push(format!("{{ {} }}", named.join(", ")));
        }

        if clauses.is_empty() {
            format!("import '{}'", self.source)
        } else {
            format!("import {} from '{}'", clauses.join(", "), self.source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_source() {
        let decl = ImportDeclaration::default_import("@dummy/import", "Wrapper");
        assert_eq!(decl.to_source(), "import Wrapper from '@dummy/import'");

        let decl = ImportDeclaration::named("@dummy/import", "Wrapper", "Wrapper");
        assert_eq!(decl.to_source(), "import { Wrapper } from '@dummy/import'");

        let decl = ImportDeclaration::named("@dummy/import", "OriginalWrapperName", "Wrapper");
        assert_eq!(
            decl.to_source(),
            "import { OriginalWrapperName as Wrapper } from '@dummy/import'"
        );

        let decl = ImportDeclaration::new("./side-effect.css", Vec::new());
        assert_eq!(decl.to_source(), "import './side-effect.css'");
    }

    #[test]
    fn test_mixed_specifiers() {
        let decl = ImportDeclaration::new(
            "lib",
            vec![
                ImportSpecifier::Default { local: "Lib".into() },
                ImportSpecifier::Named { imported: "a".into(), local: "b".into() },
            ],
        );
        assert_eq!(decl.to_source(), "import Lib, { a as b } from 'lib'");
        assert_eq!(decl.specifiers[1].local(), "b");
    }
}
