use crate::visitor::{Continuation, Visitor};
use gonec_ast::Node;

/// Turns a predicate into a [`Visitor`] that behaves the same at every level.
///
/// `true` descends into the node's children, `false` skips them.
pub struct Inspector<F> {
    f: F,
}

impl<F> Inspector<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }

    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<'ast, F, E> Visitor<'ast> for Inspector<F>
where
    F: FnMut(Node<'ast>) -> Result<bool, E>,
{
    type Error = E;

    fn visit(&mut self, node: Node<'ast>) -> Result<Continuation<'_, 'ast, E>, E> {
        if (self.f)(node)? { Ok(Some(self)) } else { Ok(None) }
    }
}
