//! Declarative route table for the user section.
//!
//! The table is plain data: a tree of [`RouteNode`]s mapping path patterns to [`View`]s.
//! It is rebuilt from scratch by [`user_routes`] every time the auth flag is evaluated, so
//! nothing in here holds state between renders. The Dioxus [`Route`](super::Route) enum
//! exposes the same path surface to the router; tests keep the two in agreement.

use std::collections::{BTreeMap, HashSet};

use dioxus_logger::tracing;

use crate::client::error::RouteTableError;

/// Every page or layout the route table can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    UserLayout,
    Dashboard,
    Customer,
    CreateCustomer,
    EditCustomer,
    UserCodes,
    ProfileEdit,
    AddAddress,
    Payment,
    HistoryClaim,
    ClaimRequest,
    CartHome,
    Cart,
    Tracking,
}

impl View {
    /// Document title shown while the view is mounted.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in | Palm",
            Self::UserLayout => "Palm",
            Self::Dashboard => "Dashboard | Palm",
            Self::Customer => "Customers | Palm",
            Self::CreateCustomer => "New customer | Palm",
            Self::EditCustomer => "Edit customer | Palm",
            Self::UserCodes => "My codes | Palm",
            Self::ProfileEdit => "Profile | Palm",
            Self::AddAddress => "Add address | Palm",
            Self::Payment => "Payment | Palm",
            Self::HistoryClaim => "Claim history | Palm",
            Self::ClaimRequest => "Claim request | Palm",
            Self::CartHome => "Shop | Palm",
            Self::Cart => "Cart | Palm",
            Self::Tracking => "Tracking | Palm",
        }
    }

    /// Whether the view is rendered behind the loading boundary.
    ///
    /// Only the layout wrapper is rendered eagerly; every page, the login page included,
    /// may suspend while its data loads.
    pub fn is_lazy(&self) -> bool {
        !matches!(self, Self::UserLayout)
    }
}

/// A single entry in the route tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNode {
    /// Path pattern, absolute (`/customer`) or relative (`edit/:id`). `None` for index routes.
    pub path: Option<&'static str>,
    /// View rendered when this node matches. Path-only branches have none.
    pub view: Option<View>,
    /// Marks the default child rendered when the parent path matches exactly.
    pub index: bool,
    pub children: Vec<RouteNode>,
}

/// Result of resolving a URL path against a route tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The innermost view, i.e. the page that ends up inside the layout outlet.
    pub view: View,
    /// Every view from the root down to `view`, root first.
    pub chain: Vec<View>,
    /// Values bound by `:name` segments.
    pub params: BTreeMap<String, String>,
}

impl RouteNode {
    /// Default child of its parent.
    pub fn index(view: View) -> Self {
        Self {
            path: None,
            view: Some(view),
            index: true,
            children: Vec::new(),
        }
    }

    pub fn leaf(path: &'static str, view: View) -> Self {
        Self {
            path: Some(path),
            view: Some(view),
            index: false,
            children: Vec::new(),
        }
    }

    /// Path-only grouping node whose children supply the views.
    pub fn branch(path: &'static str, children: Vec<RouteNode>) -> Self {
        Self {
            path: Some(path),
            view: None,
            index: false,
            children,
        }
    }

    /// Total number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(RouteNode::node_count).sum::<usize>()
    }

    /// Absolute paths of every node that renders a view, in declaration order.
    ///
    /// Index routes report their parent's path.
    pub fn paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths("", &mut paths);
        paths
    }

    fn collect_paths(&self, parent: &str, paths: &mut Vec<String>) {
        let full = match self.path {
            Some(path) => join_paths(parent, path),
            None => parent.to_string(),
        };

        if self.view.is_some() && (self.children.is_empty() || self.index) {
            let full = if full.is_empty() {
                "/".to_string()
            } else {
                full.clone()
            };
            if !paths.contains(&full) {
                paths.push(full);
            }
        }

        for child in &self.children {
            child.collect_paths(&full, paths);
        }
    }

    /// Checks the tree invariants: at most one index child per parent and unique paths
    /// among siblings.
    pub fn validate(&self) -> Result<(), RouteTableError> {
        let parent = self.path.unwrap_or("<index>");

        let index_count = self.children.iter().filter(|child| child.index).count();
        if index_count > 1 {
            return Err(RouteTableError::MultipleIndexRoutes {
                parent: parent.to_string(),
                count: index_count,
            });
        }

        let mut seen = HashSet::new();
        for child in &self.children {
            if let Some(path) = child.path {
                if !seen.insert(path) {
                    return Err(RouteTableError::DuplicatePath {
                        parent: parent.to_string(),
                        path: path.to_string(),
                    });
                }
            }
            child.validate()?;
        }

        Ok(())
    }

    /// Resolves a URL path to the view it would render.
    ///
    /// Query strings and fragments are ignored. Children are tried in declaration order and
    /// the first complete match wins.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = split_segments(path).collect();

        let mut chain = Vec::new();
        let mut params = BTreeMap::new();
        if !self.match_segments(&segments, &mut chain, &mut params) {
            return None;
        }

        let view = *chain.last()?;
        Some(RouteMatch {
            view,
            chain,
            params,
        })
    }

    fn match_segments(
        &self,
        segments: &[&str],
        chain: &mut Vec<View>,
        params: &mut BTreeMap<String, String>,
    ) -> bool {
        if self.index && !segments.is_empty() {
            return false;
        }

        let mut rest = segments;
        let mut bound = Vec::new();
        for pattern in split_segments(self.path.unwrap_or_default()) {
            let Some((segment, tail)) = rest.split_first() else {
                return false;
            };
            if let Some(name) = pattern.strip_prefix(':') {
                bound.push((name.to_string(), segment.to_string()));
            } else if pattern != *segment {
                return false;
            }
            rest = tail;
        }

        let chain_len = chain.len();
        if let Some(view) = self.view {
            chain.push(view);
        }

        for child in &self.children {
            let mut child_params = params.clone();
            child_params.extend(bound.iter().cloned());
            if child.match_segments(rest, chain, &mut child_params) {
                *params = child_params;
                return true;
            }
        }

        if rest.is_empty() && self.view.is_some() {
            params.extend(bound);
            return true;
        }

        chain.truncate(chain_len);
        false
    }
}

/// Builds the user section route tree.
///
/// The root renders the authenticated layout when `is_logged_in` is true and the login page
/// otherwise. The children are attached either way; only the root view changes.
pub fn user_routes(is_logged_in: bool) -> RouteNode {
    let root_view = if is_logged_in {
        View::UserLayout
    } else {
        View::Login
    };

    tracing::debug!(is_logged_in, root = ?root_view, "Building user route table");

    RouteNode {
        path: Some("/"),
        view: Some(root_view),
        index: false,
        children: vec![
            RouteNode::index(View::Dashboard),
            RouteNode::leaf("/dashboard", View::Dashboard),
            RouteNode::branch(
                "/customer",
                vec![
                    RouteNode::leaf("", View::Customer),
                    RouteNode::leaf("create", View::CreateCustomer),
                    RouteNode::leaf("edit/:id", View::EditCustomer),
                ],
            ),
            RouteNode::leaf("/code", View::UserCodes),
            RouteNode::branch(
                "/profile",
                vec![
                    RouteNode::leaf("", View::ProfileEdit),
                    RouteNode::leaf("address", View::AddAddress),
                ],
            ),
            RouteNode::leaf("/payment", View::Payment),
            RouteNode::leaf("/historyclaim", View::HistoryClaim),
            RouteNode::leaf("/claimrequest", View::ClaimRequest),
            RouteNode::leaf("/home", View::CartHome),
            RouteNode::leaf("/cart", View::Cart),
            RouteNode::leaf("/tracking", View::Tracking),
        ],
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn join_paths(parent: &str, path: &str) -> String {
    let mut joined = String::new();
    for segment in split_segments(parent).chain(split_segments(path)) {
        joined.push('/');
        joined.push_str(segment);
    }
    joined
}
