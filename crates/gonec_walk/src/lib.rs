//! Depth-first traversal of the gonec syntax tree.
//!
//! Every pass (name resolution, checking, evaluation, printing) walks the tree through this
//! crate and only decides what to do at each node. The order children are visited in is fixed
//! per node kind and documented on [`Walker`]'s dispatch; a pass never re-derives it.
//!
//! ```rust
//! use gonec_ast::{Expr, Ident, Node};
//! use gonec_span::Span;
//! use gonec_walk::{Continuation, Visitor, walk};
//! use std::convert::Infallible;
//!
//! #[derive(Default)]
//! struct Names(Vec<String>);
//!
//! impl<'ast> Visitor<'ast> for Names {
//!     type Error = Infallible;
//!
//!     fn visit(&mut self, node: Node<'ast>) -> Result<Continuation<'_, 'ast, Infallible>, Infallible> {
//!         if let Node::Ident(ident) = node {
//!             self.0.push(ident.name.clone());
//!         }
//!         Ok(Some(self))
//!     }
//! }
//!
//! let expr = Expr::Ident(Ident::new("д", Span::DUMMY));
//! let mut names = Names::default();
//! walk(&mut names, &expr).unwrap();
//! assert_eq!(names.0, ["д"]);
//! ```

pub mod errors;
pub mod inspect;
pub mod visitor;
pub mod walker;

pub use errors::WalkError;
pub use gonec_config::WalkConfig;
pub use inspect::Inspector;
pub use visitor::{Continuation, Visitor};
pub use walker::{Walker, inspect, walk};
