pub mod decl;
pub mod expr;
pub mod file;
pub mod node;
pub mod stmts;

pub use decl::{BadDecl, Decl, DeclKeyword, FuncDecl, GenDecl, ImportSpec, Spec, ValueSpec};
pub use expr::{
    BadExpr, BasicLit, BinaryExpr, BinaryOp, CallExpr, CompositeLit, Expr, FuncLit, FuncType,
    Ident, IndexExpr, KeyValueExpr, LitKind, ParenExpr, SelectorExpr, SliceExpr, TernaryExpr,
    TypeAssertExpr, UnaryExpr, UnaryOp,
};
pub use file::{Field, FieldList, File, Package};
pub use node::{Node, NodeFamily, NodeKind, Spanned};
pub use stmts::{
    AssignOp, AssignStmt, BadStmt, BlockStmt, BranchKind, BranchStmt, DeclStmt, DeferStmt,
    EmptyStmt, ExprStmt, ForStmt, GoStmt, IfStmt, IncDec, IncDecStmt, LabeledStmt, ReturnStmt,
    Stmt, TryStmt, WhileStmt,
};
