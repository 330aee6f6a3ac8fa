use thiserror::Error;

/// Invariant violations found by [`RouteNode::validate`](crate::client::router::RouteNode::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("Route {parent:?} declares {count} index children, at most one is allowed")]
    MultipleIndexRoutes { parent: String, count: usize },
    #[error("Route {parent:?} declares the child path {path:?} more than once")]
    DuplicatePath { parent: String, path: String },
}
