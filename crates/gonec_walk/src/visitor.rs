use gonec_ast::Node;

/// Visitor that takes over a node's subtree, or `None` to skip it.
///
/// Returning `Some(self)` keeps the current visitor. A pass that wants different behavior below
/// a node (a nested scope, a function body) hands out a visitor it owns instead.
pub type Continuation<'v, 'ast, E> = Option<&'v mut dyn Visitor<'ast, Error = E>>;

/// Policy a pass supplies to the walker.
///
/// `visit` is called exactly once per node, before its children. When it returns a
/// continuation, the children are walked with that continuation and its `close` is called once
/// they are all done. Any error stops the whole walk: nothing else is visited or closed.
pub trait Visitor<'ast> {
    type Error;

    fn visit(&mut self, node: Node<'ast>) -> Result<Continuation<'_, 'ast, Self::Error>, Self::Error>;

    /// Called on the continuation after every child of the node it was returned for was walked.
    fn close(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
