use crate::{
    errors::WalkError,
    inspect::Inspector,
    visitor::Visitor,
};
use gonec_ast::Node;
use gonec_config::{WalkConfig, errors::ConfigError};
use tracing::{debug, trace};

/// Stack that must remain before the walker enters another level.
const RED_ZONE: usize = 128 * 1024;
/// Size of each segment allocated once the red zone is reached.
const STACK_SEGMENT: usize = 1024 * 1024;

/// Depth-first walker over the syntax tree.
///
/// Holds configuration only, so a single walker can be shared between passes and threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Walker {
    config: WalkConfig,
}

impl Walker {
    pub fn new(config: WalkConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Walks `node` and its subtree with `visitor`, stopping at the first error.
    pub fn walk<'ast, V>(&self, visitor: &mut V, node: impl Into<Node<'ast>>) -> Result<(), WalkError<V::Error>>
    where
        V: Visitor<'ast>,
    {
        let node = node.into();
        debug!("Walking {}", node);

        let result = Walk::new(self.config.max_depth).node(visitor, node);
        match result {
            Ok(()) => debug!("Finished walking {}", node.kind()),
            Err(_) => debug!("Walk from {} aborted", node.kind()),
        }

        result
    }

    /// Walks `node` calling `f` on every node; `f` returning `false` skips that node's children.
    pub fn inspect<'ast, F, E>(&self, node: impl Into<Node<'ast>>, f: F) -> Result<(), WalkError<E>>
    where
        F: FnMut(Node<'ast>) -> Result<bool, E>,
    {
        self.walk(&mut Inspector::new(f), node)
    }
}

/// State of a single walk.
struct Walk {
    max_depth: usize,
    depth: usize,
}

type VisitorRef<'v, 'ast, E> = &'v mut dyn Visitor<'ast, Error = E>;

impl Walk {
    fn new(max_depth: usize) -> Self {
        Self { max_depth, depth: 0 }
    }

    fn node<'ast, E>(&mut self, v: VisitorRef<'_, 'ast, E>, node: impl Into<Node<'ast>>) -> Result<(), WalkError<E>> {
        let node = node.into();

        if self.depth >= self.max_depth {
            debug!("{} is nested deeper than {} levels", node, self.max_depth);
            return Err(WalkError::TooDeep {
                kind: node.kind(),
                span: node.span(),
                limit: self.max_depth,
            });
        }

        // Grows onto the heap when the thread runs short, so only `max_depth` bounds the recursion
        stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || self.enter(v, node))
    }

    fn enter<'ast, E>(&mut self, v: VisitorRef<'_, 'ast, E>, node: Node<'ast>) -> Result<(), WalkError<E>> {
        self.depth += 1;
        trace!("Visiting {} at depth {}", node, self.depth);

        let next = v.visit(node).map_err(|err| {
            debug!("Visitor stopped the walk at {}", node);
            WalkError::Visitor(err)
        })?;

        if let Some(next) = next {
            self.children(next, node)?;
            next.close().map_err(|err| {
                debug!("Visitor stopped the walk while closing {}", node);
                WalkError::Visitor(err)
            })?;
        }

        self.depth -= 1;
        Ok(())
    }

    fn opt<'ast, T, E>(&mut self, v: VisitorRef<'_, 'ast, E>, node: Option<&'ast T>) -> Result<(), WalkError<E>>
    where
        &'ast T: Into<Node<'ast>>,
    {
        match node {
            Some(node) => self.node(v, node),
            None => Ok(()),
        }
    }

    /// Walks siblings in order. The first failing sibling stops the rest.
    fn list<'ast, T, E>(&mut self, v: VisitorRef<'_, 'ast, E>, nodes: &'ast [T]) -> Result<(), WalkError<E>>
    where
        &'ast T: Into<Node<'ast>>,
    {
        for node in nodes {
            self.node(v, node)?;
        }

        Ok(())
    }

    fn children<'ast, E>(&mut self, v: VisitorRef<'_, 'ast, E>, node: Node<'ast>) -> Result<(), WalkError<E>> {
        match node {
            // Aggregates
            Node::Field(field) => {
                self.list(v, &field.names)?;
                self.node(v, &field.ty)?;
                self.opt(v, field.tag.as_ref())?;
            }
            Node::FieldList(list) => self.list(v, &list.fields)?,
            Node::File(file) => {
                self.node(v, &file.package)?;
                self.list(v, &file.decls)?;
            }
            Node::Package(package) => {
                for file in package.files.values() {
                    self.node(v, file)?;
                }
            }

            // Expressions
            Node::Ident(_) | Node::BasicLit(_) | Node::BadExpr(_) => {}
            Node::FuncLit(lit) => {
                self.node(v, &lit.ty)?;
                self.node(v, &lit.body)?;
            }
            Node::CompositeLit(lit) => self.list(v, &lit.elems)?,
            Node::Paren(paren) => self.node(v, &*paren.inner)?,
            Node::Ternary(ternary) => {
                self.node(v, &*ternary.cond)?;
                self.node(v, &*ternary.then)?;
                self.node(v, &*ternary.els)?;
            }
            Node::Selector(selector) => {
                self.node(v, &*selector.object)?;
                self.node(v, &selector.sel)?;
            }
            Node::Index(index) => {
                self.node(v, &*index.object)?;
                self.node(v, &*index.index)?;
            }
            Node::Slice(slice) => {
                self.node(v, &*slice.object)?;
                self.opt(v, slice.low.as_deref())?;
                self.opt(v, slice.high.as_deref())?;
            }
            Node::TypeAssert(assert) => {
                self.node(v, &*assert.object)?;
                self.opt(v, assert.ty.as_deref())?;
            }
            Node::Call(call) => {
                self.node(v, &*call.callee)?;
                self.list(v, &call.args)?;
            }
            Node::Unary(unary) => self.node(v, &*unary.operand)?,
            Node::Binary(binary) => {
                self.node(v, &*binary.lhs)?;
                self.node(v, &*binary.rhs)?;
            }
            Node::KeyValue(kv) => {
                self.node(v, &*kv.key)?;
                self.node(v, &*kv.value)?;
            }
            Node::FuncType(ty) => self.opt(v, ty.params.as_ref())?,

            // Statements
            Node::DeclStmt(stmt) => self.node(v, &*stmt.decl)?,
            Node::Labeled(stmt) => {
                self.node(v, &stmt.label)?;
                self.node(v, &*stmt.stmt)?;
            }
            Node::ExprStmt(stmt) => self.node(v, &stmt.expr)?,
            Node::IncDec(stmt) => self.node(v, &stmt.operand)?,
            Node::Assign(stmt) => {
                self.list(v, &stmt.lhs)?;
                self.list(v, &stmt.rhs)?;
            }
            Node::Go(stmt) => self.node(v, &stmt.call)?,
            Node::Defer(stmt) => self.node(v, &stmt.call)?,
            Node::Return(stmt) => self.list(v, &stmt.results)?,
            Node::Branch(stmt) => self.opt(v, stmt.label.as_ref())?,
            Node::Block(block) => self.list(v, &block.stmts)?,
            Node::If(stmt) => {
                self.node(v, &stmt.cond)?;
                self.node(v, &stmt.body)?;
                self.list(v, &stmt.else_ifs)?;
                self.opt(v, stmt.els.as_deref())?;
            }
            Node::Try(stmt) => {
                self.node(v, &stmt.body)?;
                self.opt(v, stmt.except.as_ref())?;
            }
            Node::For(stmt) => {
                self.opt(v, stmt.cond.as_ref())?;
                self.node(v, &stmt.body)?;
            }
            Node::While(stmt) => {
                self.opt(v, stmt.cond.as_ref())?;
                self.node(v, &stmt.body)?;
            }

            // Declarations
            Node::ImportSpec(spec) => {
                self.opt(v, spec.alias.as_ref())?;
                self.node(v, &spec.path)?;
            }
            Node::ValueSpec(spec) => {
                self.list(v, &spec.names)?;
                self.opt(v, spec.ty.as_ref())?;
                self.list(v, &spec.values)?;
            }
            Node::GenDecl(decl) => self.list(v, &decl.specs)?,
            Node::FuncDecl(decl) => {
                self.node(v, &decl.name)?;
                self.node(v, &decl.ty)?;
                self.opt(v, decl.body.as_ref())?;
            }

            // Empty statements and malformed placeholders have no child list
            Node::Empty(_) | Node::BadStmt(_) | Node::BadDecl(_) => {
                debug!("No child list for {}", node);
                return Err(WalkError::UnrecognizedKind {
                    kind: node.kind(),
                    span: node.span(),
                });
            }
        }

        Ok(())
    }
}

/// Walks `node` with the default [`Walker`].
pub fn walk<'ast, V>(visitor: &mut V, node: impl Into<Node<'ast>>) -> Result<(), WalkError<V::Error>>
where
    V: Visitor<'ast>,
{
    Walker::default().walk(visitor, node)
}

/// Calls `f` on every node under `node` with the default [`Walker`].
pub fn inspect<'ast, F, E>(node: impl Into<Node<'ast>>, f: F) -> Result<(), WalkError<E>>
where
    F: FnMut(Node<'ast>) -> Result<bool, E>,
{
    Walker::default().inspect(node, f)
}
