//! Tests for the user_routes table builder.

use crate::client::router::table::{user_routes, RouteNode, View};

/// Paths of the root's direct children, in declaration order. `None` marks the index child.
fn child_paths(root: &RouteNode) -> Vec<Option<&'static str>> {
    root.children.iter().map(|child| child.path).collect()
}

/// Tests the root element when signed out.
///
/// Expected: root renders the login page
#[test]
fn root_renders_login_when_logged_out() {
    let root = user_routes(false);

    assert_eq!(root.path, Some("/"));
    assert_eq!(root.view, Some(View::Login));
}

/// Tests the root element when signed in.
///
/// Expected: root renders the user layout
#[test]
fn root_renders_layout_when_logged_in() {
    let root = user_routes(true);

    assert_eq!(root.path, Some("/"));
    assert_eq!(root.view, Some(View::UserLayout));
}

/// Tests that the children do not depend on the auth flag.
///
/// Verifies that the signed-out tree still carries every child route, so only the root
/// view differs between the two trees.
///
/// Expected: identical children
#[test]
fn children_are_identical_regardless_of_flag() {
    let logged_out = user_routes(false);
    let logged_in = user_routes(true);

    assert_eq!(logged_out.children, logged_in.children);
    assert_eq!(logged_out.node_count(), logged_in.node_count());
}

/// Tests the fixed, ordered list of top level declarations.
///
/// Expected: index first, then the ten absolute paths in declaration order
#[test]
fn declares_fixed_child_list() {
    let root = user_routes(true);

    assert_eq!(
        child_paths(&root),
        vec![
            None,
            Some("/dashboard"),
            Some("/customer"),
            Some("/code"),
            Some("/profile"),
            Some("/payment"),
            Some("/historyclaim"),
            Some("/claimrequest"),
            Some("/home"),
            Some("/cart"),
            Some("/tracking"),
        ]
    );
}

/// Tests the size of the tree.
///
/// Expected: 17 nodes (root, 11 children, 5 nested)
#[test]
fn holds_seventeen_nodes() {
    assert_eq!(user_routes(false).node_count(), 17);
    assert_eq!(user_routes(true).node_count(), 17);
}

/// Tests the full path surface.
///
/// Expected: the 14 reachable absolute paths
#[test]
fn exposes_path_surface() {
    let paths = user_routes(true).paths();

    assert_eq!(
        paths,
        vec![
            "/",
            "/dashboard",
            "/customer",
            "/customer/create",
            "/customer/edit/:id",
            "/code",
            "/profile",
            "/profile/address",
            "/payment",
            "/historyclaim",
            "/claimrequest",
            "/home",
            "/cart",
            "/tracking",
        ]
    );
}

/// Tests the index marker.
///
/// Verifies that exactly one child is the default and that it renders the same view as
/// `/dashboard`.
///
/// Expected: one index child rendering View::Dashboard
#[test]
fn single_index_child_matches_dashboard() {
    let root = user_routes(true);

    let index: Vec<&RouteNode> = root.children.iter().filter(|child| child.index).collect();
    assert_eq!(index.len(), 1);

    let dashboard = root
        .children
        .iter()
        .find(|child| child.path == Some("/dashboard"))
        .unwrap();
    assert_eq!(index[0].view, dashboard.view);
    assert_eq!(index[0].view, Some(View::Dashboard));
}

/// Tests that every page except the index/dashboard pair is distinct.
///
/// Expected: 13 distinct page views, none of them a root view
#[test]
fn pages_are_distinct() {
    let root = user_routes(true);
    let mut views = Vec::new();
    collect_views(&root, &mut views);

    let mut distinct = views.clone();
    distinct.sort_by_key(|view| format!("{:?}", view));
    distinct.dedup();

    assert_eq!(views.len(), 14);
    assert_eq!(distinct.len(), 13);
    assert!(!views.contains(&View::Login));
    assert!(!views.contains(&View::UserLayout));
    assert!(views.iter().all(View::is_lazy));
}

fn collect_views(node: &RouteNode, views: &mut Vec<View>) {
    for child in &node.children {
        if let Some(view) = child.view {
            views.push(view);
        }
        collect_views(child, views);
    }
}
