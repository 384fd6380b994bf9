use crate::{file::FieldList, stmts::BlockStmt};
use gonec_span::Span;
use std::fmt::{self, Display};

#[derive(Clone, Debug)]
pub enum Expr {
    Ident(Ident),
    BasicLit(BasicLit),
    Paren(ParenExpr),
    Ternary(TernaryExpr),
    Selector(SelectorExpr),
    Index(IndexExpr),
    Slice(SliceExpr),
    TypeAssert(TypeAssertExpr),
    Call(CallExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    KeyValue(KeyValueExpr),
    CompositeLit(CompositeLit),
    FuncLit(FuncLit),
    FuncType(FuncType),
    /// Placeholder for an expression the parser could not make sense of.
    Bad(BadExpr),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Ident(e) => e.span,
            Expr::BasicLit(e) => e.span,
            Expr::Paren(e) => e.span,
            Expr::Ternary(e) => e.span,
            Expr::Selector(e) => e.span,
            Expr::Index(e) => e.span,
            Expr::Slice(e) => e.span,
            Expr::TypeAssert(e) => e.span,
            Expr::Call(e) => e.span,
            Expr::Unary(e) => e.span,
            Expr::Binary(e) => e.span,
            Expr::KeyValue(e) => e.span,
            Expr::CompositeLit(e) => e.span,
            Expr::FuncLit(e) => e.span,
            Expr::FuncType(e) => e.span,
            Expr::Bad(e) => e.span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self { name: name.into(), span }
    }
}

impl Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LitKind {
    Number,
    Str,
    /// Date literal eg. `'20240131'`
    Date,
    Bool,
    /// `Неопределено` / `Null`
    Undefined,
}

#[derive(Clone, Debug)]
pub struct BasicLit {
    pub kind: LitKind,
    /// Literal text as it appeared in the source, quotes included.
    pub value: String,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct ParenExpr {
    pub inner: Box<Expr>,
    pub span: Span,
}

/// `?(cond, then, else)`
#[derive(Clone, Debug)]
pub struct TernaryExpr {
    pub cond: Box<Expr>,
    pub then: Box<Expr>,
    pub els: Box<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct SelectorExpr {
    pub object: Box<Expr>,
    pub sel: Ident,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct IndexExpr {
    pub object: Box<Expr>,
    pub index: Box<Expr>,
    pub span: Span,
}

/// `object[low:high]`, either bound may be omitted.
#[derive(Clone, Debug)]
pub struct SliceExpr {
    pub object: Box<Expr>,
    pub low: Option<Box<Expr>>,
    pub high: Option<Box<Expr>>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct TypeAssertExpr {
    pub object: Box<Expr>,
    /// `None` for the type-switch form `x.(type)`
    pub ty: Option<Box<Expr>>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Plus,
    Not,
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Neg => write!(f, "-"),
            UnaryOp::Plus => write!(f, "+"),
            UnaryOp::Not => write!(f, "НЕ"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expr>,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

impl BinaryOp {
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Eq | BinaryOp::NotEq | BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq
        )
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Eq => "=",
            BinaryOp::NotEq => "<>",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "И",
            BinaryOp::Or => "ИЛИ",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug)]
pub struct BinaryExpr {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct KeyValueExpr {
    pub key: Box<Expr>,
    pub value: Box<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct CompositeLit {
    pub elems: Vec<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct FuncLit {
    pub ty: FuncType,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct FuncType {
    pub params: Option<FieldList>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct BadExpr {
    pub span: Span,
}
