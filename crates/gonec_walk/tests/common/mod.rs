#![allow(dead_code)]

use anyhow::{Result, bail};
use gonec_ast::*;
use gonec_span::Span;
use gonec_walk::{Continuation, Visitor};
use std::{io, sync::Once};
use tracing_subscriber::{fmt, fmt::time::ChronoLocal, prelude::*};

static TRACING: Once = Once::new();

/// Installs a stderr subscriber filtered by `GONEC_LOG`, once per test binary.
pub fn setup_tracing() {
    TRACING.call_once(|| {
        let env = tracing_subscriber::EnvFilter::from_env("GONEC_LOG");

        let console_layer = fmt::Layer::new()
            .with_writer(io::stderr)
            .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".into()))
            .with_ansi(false)
            .with_line_number(true)
            .with_file(true)
            .with_target(true);

        let subscriber = tracing_subscriber::Registry::default().with(env).with(console_layer);

        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Short label for a node: names for identifiers, source text for literals, the kind otherwise.
pub fn label(node: Node<'_>) -> String {
    match node {
        Node::Ident(ident) => ident.name.clone(),
        Node::BasicLit(lit) => lit.value.clone(),
        _ => node.kind().to_string(),
    }
}

/// Records every visit by label and every close as `/label`.
///
/// Prunes at the node labelled `prune_at` and fails at the node labelled `fail_at`.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<String>,
    stack: Vec<String>,
    pub prune_at: Option<String>,
    pub fail_at: Option<String>,
    pub fail_on_close: Option<String>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prune_at(label: &str) -> Self {
        Self { prune_at: Some(label.to_string()), ..Self::default() }
    }

    pub fn fail_at(label: &str) -> Self {
        Self { fail_at: Some(label.to_string()), ..Self::default() }
    }

    pub fn fail_on_close(label: &str) -> Self {
        Self { fail_on_close: Some(label.to_string()), ..Self::default() }
    }

    /// Takes over a node another visitor was handed, so its close is expected.
    pub fn handed(&mut self, node: Node<'_>) {
        self.stack.push(label(node));
    }

    pub fn visits(&self) -> usize {
        self.events.iter().filter(|e| !e.starts_with('/')).count()
    }

    pub fn closes(&self) -> usize {
        self.events.iter().filter(|e| e.starts_with('/')).count()
    }
}

impl<'ast> Visitor<'ast> for Recorder {
    type Error = anyhow::Error;

    fn visit(&mut self, node: Node<'ast>) -> Result<Continuation<'_, 'ast, anyhow::Error>> {
        let label = label(node);
        self.events.push(label.clone());

        if self.fail_at.as_deref() == Some(label.as_str()) {
            bail!("visitor failed at {label}");
        }
        if self.prune_at.as_deref() == Some(label.as_str()) {
            return Ok(None);
        }

        self.stack.push(label);
        Ok(Some(self))
    }

    fn close(&mut self) -> Result<()> {
        let Some(label) = self.stack.pop() else {
            bail!("close without a matching visit");
        };

        if self.fail_on_close.as_deref() == Some(label.as_str()) {
            bail!("visitor failed closing {label}");
        }

        self.events.push(format!("/{label}"));
        Ok(())
    }
}

/// Descends into the first node only, so the recorded labels are its direct children in order.
#[derive(Debug, Default)]
pub struct Children {
    pub root: Option<String>,
    pub children: Vec<String>,
    pub closed: usize,
}

impl<'ast> Visitor<'ast> for Children {
    type Error = anyhow::Error;

    fn visit(&mut self, node: Node<'ast>) -> Result<Continuation<'_, 'ast, anyhow::Error>> {
        if self.root.is_none() {
            self.root = Some(label(node));
            return Ok(Some(self));
        }

        self.children.push(label(node));
        Ok(None)
    }

    fn close(&mut self) -> Result<()> {
        self.closed += 1;
        Ok(())
    }
}

pub fn direct_children<'ast>(node: impl Into<Node<'ast>>) -> Vec<String> {
    let mut children = Children::default();
    gonec_walk::walk(&mut children, node).expect("walk failed");
    assert_eq!(children.closed, 1, "root must be closed exactly once");
    children.children
}

// Builders. Spans are irrelevant to ordering, so everything gets the dummy span.

pub const SP: Span = Span::DUMMY;

pub fn ident(name: &str) -> Ident {
    Ident::new(name, SP)
}

pub fn id(name: &str) -> Expr {
    Expr::Ident(ident(name))
}

pub fn lit(value: &str) -> BasicLit {
    let kind = if value.starts_with('"') { LitKind::Str } else { LitKind::Number };
    BasicLit { kind, value: value.to_string(), span: SP }
}

pub fn num(value: &str) -> Expr {
    Expr::BasicLit(lit(value))
}

pub fn bin(lhs: Expr, op: BinaryOp, rhs: Expr) -> Expr {
    Expr::Binary(BinaryExpr { lhs: Box::new(lhs), op, rhs: Box::new(rhs), span: SP })
}

pub fn call_expr(callee: Expr, args: Vec<Expr>) -> CallExpr {
    CallExpr { callee: Box::new(callee), args, span: SP }
}

pub fn call(callee: Expr, args: Vec<Expr>) -> Expr {
    Expr::Call(call_expr(callee, args))
}

pub fn block(stmts: Vec<Stmt>) -> BlockStmt {
    BlockStmt { stmts, span: SP }
}

pub fn assign(lhs: Vec<Expr>, rhs: Vec<Expr>) -> Stmt {
    Stmt::Assign(AssignStmt { lhs, op: AssignOp::Assign, rhs, span: SP })
}

pub fn expr_stmt(expr: Expr) -> Stmt {
    Stmt::Expr(ExprStmt { expr, span: SP })
}

pub fn ret(results: Vec<Expr>) -> Stmt {
    Stmt::Return(ReturnStmt { results, span: SP })
}

pub fn field(names: &[&str], ty: &str) -> Field {
    Field { names: names.iter().map(|n| ident(n)).collect(), ty: id(ty), tag: None, span: SP }
}

pub fn params(fields: Vec<Field>) -> FuncType {
    FuncType { params: Some(FieldList { fields, span: SP }), span: SP }
}

pub fn func(name: &str, ty: FuncType, body: Option<BlockStmt>) -> FuncDecl {
    FuncDecl { name: ident(name), ty, body, export: false, span: SP }
}

pub fn var(names: &[&str], values: Vec<Expr>) -> Decl {
    Decl::Gen(GenDecl {
        keyword: DeclKeyword::Var,
        specs: vec![Spec::Value(ValueSpec {
            names: names.iter().map(|n| ident(n)).collect(),
            ty: None,
            values,
            span: SP,
        })],
        span: SP,
    })
}

pub fn file(package: &str, decls: Vec<Decl>) -> File {
    File { package: ident(package), decls, span: SP }
}

/// The program from the interpreter's smoke test:
///
/// ```text
/// Пакет Основной
///
///     Функция а(б,в,г) Экспорт
///         Если б<>в Тогда
///             д=б
///             д=в
///         Иначе
///             д=0
///         КонецЕсли
///         Возврат д
///     КонецФункции
///
///     б = а(1,2,3)
///     Сообщить(б)
/// ```
///
/// Top level statements live in the `Основной` function the parser synthesizes for them.
pub fn sample_program() -> File {
    let if_stmt = Stmt::If(IfStmt {
        cond: bin(id("б"), BinaryOp::NotEq, id("в")),
        body: block(vec![assign(vec![id("д")], vec![id("б")]), assign(vec![id("д")], vec![id("в")])]),
        else_ifs: vec![],
        els: Some(Box::new(Stmt::Block(block(vec![assign(vec![id("д")], vec![num("0")])])))),
        span: SP,
    });

    let mut exported = func(
        "а",
        params(vec![field(&["б"], "Произвольный"), field(&["в"], "Произвольный"), field(&["г"], "Произвольный")]),
        Some(block(vec![if_stmt, ret(vec![id("д")])])),
    );
    exported.export = true;

    let main = func(
        "Основной",
        FuncType { params: None, span: SP },
        Some(block(vec![
            assign(vec![id("б")], vec![call(id("а"), vec![num("1"), num("2"), num("3")])]),
            expr_stmt(call(id("Сообщить"), vec![id("б")])),
        ])),
    );

    file("Основной", vec![Decl::Func(exported), Decl::Func(main)])
}
