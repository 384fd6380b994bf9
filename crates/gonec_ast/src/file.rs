use crate::{
    decl::Decl,
    expr::{BasicLit, Expr, Ident},
};
use gonec_span::Span;
use indexmap::IndexMap;

/// A parameter or struct field: `names ty tag`
#[derive(Clone, Debug)]
pub struct Field {
    pub names: Vec<Ident>,
    pub ty: Expr,
    pub tag: Option<BasicLit>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct FieldList {
    pub fields: Vec<Field>,
    pub span: Span,
}

/// A single source unit: `Пакет name` followed by its declarations.
#[derive(Clone, Debug)]
pub struct File {
    pub package: Ident,
    pub decls: Vec<Decl>,
    pub span: Span,
}

/// Source units that share a package name, keyed by file name in the order they were added.
#[derive(Clone, Debug, Default)]
pub struct Package {
    pub name: String,
    pub files: IndexMap<String, File>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), files: IndexMap::new() }
    }

    /// Adds `file` under `file_name`, returning the file it replaced.
    pub fn insert(&mut self, file_name: impl Into<String>, file: File) -> Option<File> {
        self.files.insert(file_name.into(), file)
    }

    /// Always [`Span::DUMMY`]: file spans index different source units and cannot be merged.
    pub fn span(&self) -> Span {
        Span::DUMMY
    }
}
