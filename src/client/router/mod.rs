pub mod table;

#[cfg(test)]
mod tests;

use dioxus::prelude::*;

use crate::client::{
    components::UserShell,
    routes::{
        cart::{Cart, CartHome},
        claim::{ClaimRequest, HistoryClaim},
        code::UserCodes,
        customer::{CreateCustomer, Customer, EditCustomer},
        dashboard::Dashboard,
        payment::Payment,
        profile::{AddAddress, ProfileEdit},
        tracking::Tracking,
        NotFound,
    },
};

pub use table::{user_routes, RouteMatch, RouteNode, View};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(UserShell)]

        #[route("/", Dashboard)]
        Index {},

        #[route("/dashboard")]
        Dashboard {},

        #[nest("/customer")]

            #[route("/")]
            Customer {},

            #[route("/create")]
            CreateCustomer {},

            #[route("/edit/:id")]
            EditCustomer { id: String },

        #[end_nest]

        #[route("/code")]
        UserCodes {},

        #[nest("/profile")]

            #[route("/")]
            ProfileEdit {},

            #[route("/address")]
            AddAddress {},

        #[end_nest]

        #[route("/payment")]
        Payment {},

        #[route("/historyclaim")]
        HistoryClaim {},

        #[route("/claimrequest")]
        ClaimRequest {},

        #[route("/home")]
        CartHome {},

        #[route("/cart")]
        Cart {},

        #[route("/tracking")]
        Tracking {},

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The route table view this route renders inside the layout, `None` for the fallback.
    pub fn view(&self) -> Option<View> {
        let view = match self {
            Self::Index {} | Self::Dashboard {} => View::Dashboard,
            Self::Customer {} => View::Customer,
            Self::CreateCustomer {} => View::CreateCustomer,
            Self::EditCustomer { .. } => View::EditCustomer,
            Self::UserCodes {} => View::UserCodes,
            Self::ProfileEdit {} => View::ProfileEdit,
            Self::AddAddress {} => View::AddAddress,
            Self::Payment {} => View::Payment,
            Self::HistoryClaim {} => View::HistoryClaim,
            Self::ClaimRequest {} => View::ClaimRequest,
            Self::CartHome {} => View::CartHome,
            Self::Cart {} => View::Cart,
            Self::Tracking {} => View::Tracking,
            Self::NotFound { .. } => return None,
        };

        Some(view)
    }
}
