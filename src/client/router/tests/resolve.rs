//! Tests for RouteNode::resolve.

use crate::client::router::table::{user_routes, View};

/// Tests resolving a route parameter.
///
/// Expected: edit customer page with id = "123"
#[test]
fn resolves_edit_customer_with_id() {
    let matched = user_routes(true).resolve("/customer/edit/123").unwrap();

    assert_eq!(matched.view, View::EditCustomer);
    assert_eq!(matched.params.get("id").map(String::as_str), Some("123"));
    assert_eq!(matched.chain, vec![View::UserLayout, View::EditCustomer]);
}

/// Tests that the root path renders the index child.
///
/// Expected: View::Dashboard inside the user layout
#[test]
fn resolves_root_to_index() {
    let matched = user_routes(true).resolve("/").unwrap();

    assert_eq!(matched.view, View::Dashboard);
    assert_eq!(matched.chain, vec![View::UserLayout, View::Dashboard]);
    assert!(matched.params.is_empty());
}

/// Tests that signed-out trees still resolve children under the login root.
///
/// Expected: chain starts with View::Login
#[test]
fn signed_out_chain_starts_with_login() {
    let matched = user_routes(false).resolve("/payment").unwrap();

    assert_eq!(matched.view, View::Payment);
    assert_eq!(matched.chain, vec![View::Login, View::Payment]);
}

/// Tests the empty child path under a path-only branch.
///
/// Expected: `/customer` and `/profile` resolve to their list and edit pages
#[test]
fn resolves_empty_child_path() {
    let root = user_routes(true);

    assert_eq!(root.resolve("/customer").unwrap().view, View::Customer);
    assert_eq!(root.resolve("/profile").unwrap().view, View::ProfileEdit);
    assert_eq!(
        root.resolve("/profile/address").unwrap().view,
        View::AddAddress
    );
}

/// Tests tolerance for trailing slashes, query strings and fragments.
///
/// Expected: same page as the bare path
#[test]
fn ignores_trailing_slash_query_and_fragment() {
    let root = user_routes(true);

    assert_eq!(root.resolve("/cart/").unwrap().view, View::Cart);
    assert_eq!(root.resolve("/home?page=2").unwrap().view, View::CartHome);
    assert_eq!(
        root.resolve("/tracking#latest").unwrap().view,
        View::Tracking
    );
}

/// Tests unknown paths.
///
/// Expected: None
#[test]
fn unknown_paths_do_not_resolve() {
    let root = user_routes(true);

    assert_eq!(root.resolve("/admin"), None);
    assert_eq!(root.resolve("/customer/edit"), None);
    assert_eq!(root.resolve("/customer/edit/1/extra"), None);
    assert_eq!(root.resolve("/dashboard/extra"), None);
}
