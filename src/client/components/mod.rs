pub mod alert;
pub mod field;
pub mod layout;
pub mod loadable;
pub mod navbar;
pub mod page;

pub use alert::ErrorAlert;
pub use field::TextField;
pub use layout::{UserLayout, UserShell};
pub use loadable::Loadable;
pub use navbar::UserNavbar;
pub use page::Page;
