//! The closed set of node kinds, viewed uniformly.
//!
//! Owned nodes live in family enums ([`Expr`], [`Stmt`], [`Decl`], [`Spec`]) and aggregate
//! structs. [`Node`] is a cheap borrowed view with exactly one variant per concrete kind, which
//! is what passes and the walker hand around.

use crate::{decl::*, expr::*, file::*, stmts::*};
use gonec_span::Span;
use std::fmt::{self, Display};

/// The four groups every concrete kind belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeFamily {
    Expression,
    Statement,
    /// Declarations and the specs grouped inside them
    Declaration,
    Aggregate,
}

/// Anything that knows where it came from in the source.
pub trait Spanned {
    fn span(&self) -> Span;
}

macro_rules! impl_spanned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Spanned for $ty {
                #[inline]
                fn span(&self) -> Span {
                    self.span
                }
            }
        )*
    };
}

impl_spanned! {
    Ident, BasicLit, ParenExpr, TernaryExpr, SelectorExpr, IndexExpr, SliceExpr, TypeAssertExpr,
    CallExpr, UnaryExpr, BinaryExpr, KeyValueExpr, CompositeLit, FuncLit, FuncType, BadExpr,
    BlockStmt, ExprStmt, IncDecStmt, AssignStmt, LabeledStmt, BranchStmt, ReturnStmt, DeclStmt,
    EmptyStmt, GoStmt, DeferStmt, IfStmt, TryStmt, ForStmt, WhileStmt, BadStmt,
    ImportSpec, ValueSpec, GenDecl, FuncDecl, BadDecl,
    Field, FieldList, File,
}

impl Spanned for Package {
    fn span(&self) -> Span {
        Package::span(self)
    }
}

macro_rules! define_nodes {
    (
        $(
            $family:ident {
                $( $variant:ident($ty:ty) => $name:literal ),* $(,)?
            }
        )*
    ) => {
        /// Borrowed view of any node in the tree.
        #[derive(Clone, Copy, Debug)]
        pub enum Node<'ast> {
            $( $( $variant(&'ast $ty), )* )*
        }

        /// Identity of a concrete node kind, without the node.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $( $( $variant, )* )*
        }

        impl NodeKind {
            pub const ALL: &'static [NodeKind] = &[ $( $( NodeKind::$variant, )* )* ];

            pub fn family(self) -> NodeFamily {
                match self {
                    $( $( NodeKind::$variant => NodeFamily::$family, )* )*
                }
            }

            /// Human readable name used in diagnostics.
            pub fn name(self) -> &'static str {
                match self {
                    $( $( NodeKind::$variant => $name, )* )*
                }
            }
        }

        impl<'ast> Node<'ast> {
            pub fn kind(self) -> NodeKind {
                match self {
                    $( $( Node::$variant(_) => NodeKind::$variant, )* )*
                }
            }

            pub fn span(self) -> Span {
                match self {
                    $( $( Node::$variant(n) => Spanned::span(n), )* )*
                }
            }
        }

        $( $(
            impl<'ast> From<&'ast $ty> for Node<'ast> {
                #[inline]
                fn from(node: &'ast $ty) -> Self {
                    Node::$variant(node)
                }
            }
        )* )*
    };
}

define_nodes! {
    Expression {
        Ident(Ident) => "identifier",
        BasicLit(BasicLit) => "literal",
        Paren(ParenExpr) => "parenthesized expression",
        Ternary(TernaryExpr) => "ternary expression",
        Selector(SelectorExpr) => "selector expression",
        Index(IndexExpr) => "index expression",
        Slice(SliceExpr) => "slice expression",
        TypeAssert(TypeAssertExpr) => "type assertion",
        Call(CallExpr) => "call expression",
        Unary(UnaryExpr) => "unary expression",
        Binary(BinaryExpr) => "binary expression",
        KeyValue(KeyValueExpr) => "key-value pair",
        CompositeLit(CompositeLit) => "composite literal",
        FuncLit(FuncLit) => "function literal",
        FuncType(FuncType) => "function type",
        BadExpr(BadExpr) => "malformed expression",
    }
    Statement {
        Block(BlockStmt) => "block",
        ExprStmt(ExprStmt) => "expression statement",
        IncDec(IncDecStmt) => "increment/decrement statement",
        Assign(AssignStmt) => "assignment",
        Labeled(LabeledStmt) => "labeled statement",
        Branch(BranchStmt) => "branch statement",
        Return(ReturnStmt) => "return statement",
        DeclStmt(DeclStmt) => "declaration statement",
        Empty(EmptyStmt) => "empty statement",
        Go(GoStmt) => "go statement",
        Defer(DeferStmt) => "defer statement",
        If(IfStmt) => "if statement",
        Try(TryStmt) => "try statement",
        For(ForStmt) => "for loop",
        While(WhileStmt) => "while loop",
        BadStmt(BadStmt) => "malformed statement",
    }
    Declaration {
        ImportSpec(ImportSpec) => "import spec",
        ValueSpec(ValueSpec) => "value spec",
        GenDecl(GenDecl) => "generic declaration",
        FuncDecl(FuncDecl) => "function declaration",
        BadDecl(BadDecl) => "malformed declaration",
    }
    Aggregate {
        Field(Field) => "field",
        FieldList(FieldList) => "field list",
        File(File) => "file",
        Package(Package) => "package",
    }
}

impl NodeKind {
    /// Kinds the parser produces in place of input it could not understand.
    pub fn is_placeholder(self) -> bool {
        matches!(self, NodeKind::BadExpr | NodeKind::BadStmt | NodeKind::BadDecl)
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Ident(ident) => write!(f, "{} `{}` at {}", self.kind(), ident.name, ident.span),
            _ => write!(f, "{} at {}", self.kind(), self.span()),
        }
    }
}

impl<'ast> From<&'ast Expr> for Node<'ast> {
    fn from(expr: &'ast Expr) -> Self {
        match expr {
            Expr::Ident(e) => Node::Ident(e),
            Expr::BasicLit(e) => Node::BasicLit(e),
            Expr::Paren(e) => Node::Paren(e),
            Expr::Ternary(e) => Node::Ternary(e),
            Expr::Selector(e) => Node::Selector(e),
            Expr::Index(e) => Node::Index(e),
            Expr::Slice(e) => Node::Slice(e),
            Expr::TypeAssert(e) => Node::TypeAssert(e),
            Expr::Call(e) => Node::Call(e),
            Expr::Unary(e) => Node::Unary(e),
            Expr::Binary(e) => Node::Binary(e),
            Expr::KeyValue(e) => Node::KeyValue(e),
            Expr::CompositeLit(e) => Node::CompositeLit(e),
            Expr::FuncLit(e) => Node::FuncLit(e),
            Expr::FuncType(e) => Node::FuncType(e),
            Expr::Bad(e) => Node::BadExpr(e),
        }
    }
}

impl<'ast> From<&'ast Stmt> for Node<'ast> {
    fn from(stmt: &'ast Stmt) -> Self {
        match stmt {
            Stmt::Block(s) => Node::Block(s),
            Stmt::Expr(s) => Node::ExprStmt(s),
            Stmt::IncDec(s) => Node::IncDec(s),
            Stmt::Assign(s) => Node::Assign(s),
            Stmt::Labeled(s) => Node::Labeled(s),
            Stmt::Branch(s) => Node::Branch(s),
            Stmt::Return(s) => Node::Return(s),
            Stmt::Decl(s) => Node::DeclStmt(s),
            Stmt::Empty(s) => Node::Empty(s),
            Stmt::Go(s) => Node::Go(s),
            Stmt::Defer(s) => Node::Defer(s),
            Stmt::If(s) => Node::If(s),
            Stmt::Try(s) => Node::Try(s),
            Stmt::For(s) => Node::For(s),
            Stmt::While(s) => Node::While(s),
            Stmt::Bad(s) => Node::BadStmt(s),
        }
    }
}

impl<'ast> From<&'ast Decl> for Node<'ast> {
    fn from(decl: &'ast Decl) -> Self {
        match decl {
            Decl::Gen(d) => Node::GenDecl(d),
            Decl::Func(d) => Node::FuncDecl(d),
            Decl::Bad(d) => Node::BadDecl(d),
        }
    }
}

impl<'ast> From<&'ast Spec> for Node<'ast> {
    fn from(spec: &'ast Spec) -> Self {
        match spec {
            Spec::Import(s) => Node::ImportSpec(s),
            Spec::Value(s) => Node::ValueSpec(s),
        }
    }
}
