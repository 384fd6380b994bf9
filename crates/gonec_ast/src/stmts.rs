use crate::{
    decl::Decl,
    expr::{CallExpr, Expr, Ident},
};
use gonec_span::Span;
use std::fmt::{self, Display};

#[derive(Clone, Debug)]
pub enum Stmt {
    Block(BlockStmt),
    Expr(ExprStmt),
    IncDec(IncDecStmt),
    Assign(AssignStmt),
    Labeled(LabeledStmt),
    Branch(BranchStmt),
    Return(ReturnStmt),
    Decl(DeclStmt),
    Empty(EmptyStmt),
    Go(GoStmt),
    Defer(DeferStmt),
    If(IfStmt),
    Try(TryStmt),
    For(ForStmt),
    While(WhileStmt),
    /// Placeholder for a statement the parser could not make sense of.
    Bad(BadStmt),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Block(s) => s.span,
            Stmt::Expr(s) => s.span,
            Stmt::IncDec(s) => s.span,
            Stmt::Assign(s) => s.span,
            Stmt::Labeled(s) => s.span,
            Stmt::Branch(s) => s.span,
            Stmt::Return(s) => s.span,
            Stmt::Decl(s) => s.span,
            Stmt::Empty(s) => s.span,
            Stmt::Go(s) => s.span,
            Stmt::Defer(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::Try(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::Bad(s) => s.span,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BlockStmt {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct ExprStmt {
    pub expr: Expr,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncDec {
    Inc,
    Dec,
}

impl Display for IncDec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncDec::Inc => write!(f, "++"),
            IncDec::Dec => write!(f, "--"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct IncDecStmt {
    pub operand: Expr,
    pub tok: IncDec,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `:=`
    Define,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssignOp::Assign => "=",
            AssignOp::Define => ":=",
            AssignOp::Add => "+=",
            AssignOp::Sub => "-=",
            AssignOp::Mul => "*=",
            AssignOp::Div => "/=",
            AssignOp::Rem => "%=",
        };
        f.write_str(s)
    }
}

/// `a, b = c, d`
#[derive(Clone, Debug)]
pub struct AssignStmt {
    pub lhs: Vec<Expr>,
    pub op: AssignOp,
    pub rhs: Vec<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct LabeledStmt {
    pub label: Ident,
    pub stmt: Box<Stmt>,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchKind {
    Break,
    Continue,
    Goto,
}

impl Display for BranchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchKind::Break => write!(f, "Прервать"),
            BranchKind::Continue => write!(f, "Продолжить"),
            BranchKind::Goto => write!(f, "Перейти"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct BranchStmt {
    pub kind: BranchKind,
    pub label: Option<Ident>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct ReturnStmt {
    pub results: Vec<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct DeclStmt {
    pub decl: Box<Decl>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct EmptyStmt {
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct GoStmt {
    pub call: CallExpr,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct DeferStmt {
    pub call: CallExpr,
    pub span: Span,
}

/// `Если cond Тогда ... ИначеЕсли ... Иначе ... КонецЕсли`
///
/// Every entry of `else_ifs` is itself an [`IfStmt`] without else-ifs or an else clause of its own.
#[derive(Clone, Debug)]
pub struct IfStmt {
    pub cond: Expr,
    pub body: BlockStmt,
    pub else_ifs: Vec<IfStmt>,
    pub els: Option<Box<Stmt>>,
    pub span: Span,
}

/// `Попытка ... Исключение ... КонецПопытки`
#[derive(Clone, Debug)]
pub struct TryStmt {
    pub body: BlockStmt,
    pub except: Option<BlockStmt>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct ForStmt {
    pub cond: Option<Expr>,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct WhileStmt {
    pub cond: Option<Expr>,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct BadStmt {
    pub span: Span,
}
