use crate::{
    expr::{BasicLit, Expr, FuncType, Ident},
    stmts::BlockStmt,
};
use gonec_span::Span;
use std::fmt::{self, Display};

#[derive(Clone, Debug)]
pub enum Decl {
    Gen(GenDecl),
    Func(FuncDecl),
    /// Placeholder for a declaration the parser could not make sense of.
    Bad(BadDecl),
}

impl Decl {
    pub fn span(&self) -> Span {
        match self {
            Decl::Gen(d) => d.span,
            Decl::Func(d) => d.span,
            Decl::Bad(d) => d.span,
        }
    }
}

#[derive(Clone, Debug)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
}

impl Spec {
    pub fn span(&self) -> Span {
        match self {
            Spec::Import(s) => s.span,
            Spec::Value(s) => s.span,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ImportSpec {
    pub alias: Option<Ident>,
    pub path: BasicLit,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct ValueSpec {
    pub names: Vec<Ident>,
    pub ty: Option<Expr>,
    pub values: Vec<Expr>,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclKeyword {
    Import,
    Var,
    Const,
}

impl Display for DeclKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclKeyword::Import => write!(f, "Импорт"),
            DeclKeyword::Var => write!(f, "Перем"),
            DeclKeyword::Const => write!(f, "Конст"),
        }
    }
}

/// A keyword followed by one or more specs, eg. `Перем а, б;`
#[derive(Clone, Debug)]
pub struct GenDecl {
    pub keyword: DeclKeyword,
    pub specs: Vec<Spec>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct FuncDecl {
    pub name: Ident,
    pub ty: FuncType,
    /// `None` for forward and external declarations
    pub body: Option<BlockStmt>,
    /// Declared with `Экспорт`
    pub export: bool,
    pub span: Span,
}

impl FuncDecl {
    pub fn is_forward(&self) -> bool {
        self.body.is_none()
    }
}

#[derive(Clone, Debug)]
pub struct BadDecl {
    pub span: Span,
}
