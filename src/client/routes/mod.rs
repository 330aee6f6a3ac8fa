pub mod cart;
pub mod claim;
pub mod code;
pub mod customer;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod payment;
pub mod profile;
pub mod tracking;

pub use login::Login;
pub use not_found::NotFound;
