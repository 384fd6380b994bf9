use gonec_ast::NodeKind;
use gonec_span::Span;

/// Why a walk stopped early.
#[derive(Debug, thiserror::Error)]
pub enum WalkError<E> {
    /// The walker reached a kind it has no child list for.
    #[error("unrecognized node kind `{kind}` at {span}")]
    UnrecognizedKind { kind: NodeKind, span: Span },

    #[error("traversal too deep: {kind} at {span} exceeds the maximum nesting depth of {limit}")]
    TooDeep { kind: NodeKind, span: Span, limit: usize },

    /// Error reported by the visitor itself, passed through untouched.
    #[error("{0}")]
    Visitor(E),
}

impl<E> WalkError<E> {
    pub fn visitor_error(&self) -> Option<&E> {
        match self {
            WalkError::Visitor(err) => Some(err),
            _ => None,
        }
    }

    pub fn into_visitor_error(self) -> Option<E> {
        match self {
            WalkError::Visitor(err) => Some(err),
            _ => None,
        }
    }

    /// Kind of the node the walker stopped at, when the walker itself stopped.
    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            WalkError::UnrecognizedKind { kind, .. } | WalkError::TooDeep { kind, .. } => Some(*kind),
            WalkError::Visitor(_) => None,
        }
    }
}
