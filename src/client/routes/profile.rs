use chrono::Utc;
use dioxus::prelude::*;

use crate::client::{
    components::{ErrorAlert, Page, TextField},
    config::Config,
    error::ApiError,
    router::{Route, View},
    routes::customer::CustomerForm,
    store::auth::AuthState,
    util::api,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub line: String,
    pub district: String,
    pub province: String,
    pub postal_code: String,
}

impl Address {
    /// Checks the fields a delivery address needs. Postal codes are five digits.
    pub fn validate(&self) -> Result<(), String> {
        if self.line.trim().is_empty() {
            return Err("Address line is required".to_string());
        }
        if self.province.trim().is_empty() {
            return Err("Province is required".to_string());
        }

        let postal_code = self.postal_code.trim();
        if postal_code.len() != 5 || !postal_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("{:?} is not a valid postal code", self.postal_code));
        }

        Ok(())
    }
}

/// Edits the signed-in user's own record.
#[component]
pub fn ProfileEdit() -> Element {
    let config = use_context::<Config>();
    let auth = use_context::<Store<AuthState>>();

    let profile = use_resource(move || {
        let config = config.clone();
        async move {
            let (user_id, authorization) = {
                let auth = auth.read();
                let session = auth.session(Utc::now()).ok_or(ApiError::Unauthorized)?;
                (session.user_id, session.authorization())
            };

            api::get_user(&config, Some(authorization), user_id).await
        }
    })
    .suspend()?;
    let profile = profile.read();

    rsx!(
        Page { view: View::ProfileEdit, heading: "Profile",
            {match &*profile {
                Ok(Some(user)) => rsx!(
                    CustomerForm { user: user.clone() }
                ),
                Ok(None) => rsx!(
                    ErrorAlert { message: "Your profile could not be found".to_string() }
                ),
                Err(err) => rsx!(
                    ErrorAlert { message: err.to_string() }
                ),
            }}
            Link { to: Route::AddAddress {}, class: "btn btn-outline self-start",
                "Add address"
            }
        }
    )
}

/// Collects delivery addresses for the current session.
#[component]
pub fn AddAddress() -> Element {
    let line = use_signal(String::new);
    let district = use_signal(String::new);
    let province = use_signal(String::new);
    let postal_code = use_signal(String::new);
    let mut addresses = use_signal(Vec::<Address>::new);
    let mut error = use_signal(|| None::<String>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let address = Address {
            line: line(),
            district: district(),
            province: province(),
            postal_code: postal_code(),
        };
        match address.validate() {
            Ok(()) => {
                error.set(None);
                addresses.write().push(address);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    rsx!(
        Page { view: View::AddAddress, heading: "Add address",
            form { class: "flex flex-col gap-3 max-w-xl",
                onsubmit: onsubmit,
                if let Some(message) = error() {
                    ErrorAlert { message }
                }
                TextField { label: "Address", value: line, required: true }
                TextField { label: "District", value: district }
                TextField { label: "Province", value: province, required: true }
                TextField { label: "Postal code", value: postal_code, required: true }
                div { class: "flex gap-2 justify-end",
                    Link { to: Route::ProfileEdit {}, class: "btn btn-ghost", "Back" }
                    button { class: "btn btn-primary", r#type: "submit", "Add" }
                }
            }
            ul { class: "list bg-base-200 rounded-box",
                for (i, address) in addresses.read().iter().enumerate() {
                    li { key: "{i}", class: "list-row",
                        "{address.line}, {address.district}, {address.province} {address.postal_code}"
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(postal_code: &str) -> Address {
        Address {
            line: "99 Moo 5".to_string(),
            district: "Mueang".to_string(),
            province: "Nakhon Ratchasima".to_string(),
            postal_code: postal_code.to_string(),
        }
    }

    /// Tests accepting a complete address.
    ///
    /// Expected: Ok
    #[test]
    fn accepts_complete_address() {
        assert_eq!(address("30000").validate(), Ok(()));
    }

    /// Tests rejecting malformed postal codes.
    ///
    /// Expected: Err for short, long and non-numeric codes
    #[test]
    fn rejects_bad_postal_code() {
        assert!(address("3000").validate().is_err());
        assert!(address("300000").validate().is_err());
        assert!(address("3O000").validate().is_err());
    }

    /// Tests rejecting an address without a street line.
    ///
    /// Expected: Err naming the missing field
    #[test]
    fn requires_address_line() {
        let mut address = address("30000");
        address.line = "  ".to_string();

        assert_eq!(
            address.validate(),
            Err("Address line is required".to_string())
        );
    }
}
