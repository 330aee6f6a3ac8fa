use chrono::{DateTime, NaiveDate, Utc};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ErrorAlert, Page, TextField},
        config::Config,
        router::{Route, View},
        store::auth::AuthState,
        util::api,
    },
    model::{
        auth::{Role, SignUpDto},
        user::UserDto,
    },
};

/// Parses the value of an `<input type="date">` into midnight UTC.
pub fn parse_birthday(value: &str) -> Result<DateTime<Utc>, String> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("{:?} is not a valid date, expected YYYY-MM-DD", value))?;

    date.and_hms_opt(0, 0, 0)
        .map(|datetime| datetime.and_utc())
        .ok_or_else(|| format!("{:?} is not a valid date", value))
}

/// Parses the `:id` segment of `/customer/edit/:id`.
pub fn parse_customer_id(id: &str) -> Result<u32, String> {
    id.parse::<u32>()
        .map_err(|_| format!("{:?} is not a valid customer id", id))
}

#[component]
fn CustomerTable(users: Vec<UserDto>, on_delete: EventHandler<u32>) -> Element {
    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Phone" }
                        th { "Role" }
                        th {}
                    }
                }
                tbody {
                    for user in users {
                        tr { key: "{user.id}",
                            td { {user.full_name()} }
                            td { "{user.email}" }
                            td { "{user.phone_number}" }
                            td { {user.role.label()} }
                            td { class: "flex gap-2 justify-end",
                                Link {
                                    to: Route::EditCustomer { id: user.id.to_string() },
                                    class: "btn btn-sm",
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-sm btn-error btn-outline",
                                    onclick: move |_| on_delete.call(user.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
pub fn Customer() -> Element {
    let config = use_context::<Config>();
    let auth = use_context::<Store<AuthState>>();
    let mut error = use_signal(|| None::<String>);
    let mut admins_only = use_signal(|| false);

    let resource_config = config.clone();
    let mut users = use_resource(move || {
        let config = resource_config.clone();
        let admins_only = admins_only();
        async move {
            let authorization = auth.read().authorization(Utc::now());
            if admins_only {
                api::get_admins(&config, authorization).await
            } else {
                api::get_users(&config, authorization).await
            }
        }
    });

    let on_delete = use_callback(move |id: u32| {
        let config = config.clone();
        let authorization = auth.read().authorization(Utc::now());

        spawn(async move {
            match api::delete_user(&config, authorization, id).await {
                Ok(()) => {
                    tracing::info!(user_id = id, "Deleted customer");

                    error.set(None);
                    users.restart();
                }
                Err(err) => {
                    tracing::error!(user_id = id, "Failed to delete customer: {}", err);

                    error.set(Some(err.to_string()));
                }
            }
        });
    });

    let users = users.suspend()?;
    let users = users.read();

    rsx!(
        Page { view: View::Customer, heading: "Customers",
            div { class: "flex justify-between items-center",
                label { class: "label",
                    input {
                        r#type: "checkbox",
                        class: "toggle",
                        checked: admins_only(),
                        onchange: move |e| admins_only.set(e.checked()),
                    }
                    "Admins only"
                }
                Link { to: Route::CreateCustomer {}, class: "btn btn-primary",
                    "New customer"
                }
            }
            if let Some(message) = error() {
                ErrorAlert { message }
            }
            {match &*users {
                Ok(list) if list.is_empty() => rsx!(
                    p { class: "opacity-70", "No customers yet." }
                ),
                Ok(list) => rsx!(
                    CustomerTable { users: list.clone(), on_delete }
                ),
                Err(err) => rsx!(
                    ErrorAlert { message: err.to_string() }
                ),
            }}
        }
    )
}

#[component]
pub fn CreateCustomer() -> Element {
    let config = use_context::<Config>();
    let auth = use_context::<Store<AuthState>>();
    let navigator = use_navigator();
    let can_grant_admin = auth
        .read()
        .session(Utc::now())
        .is_some_and(|session| session.role == Role::Admin);

    let first_name = use_signal(String::new);
    let last_name = use_signal(String::new);
    let email = use_signal(String::new);
    let phone_number = use_signal(String::new);
    let password = use_signal(String::new);
    let birthday = use_signal(String::new);
    let mut as_admin = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let birthday = match parse_birthday(&birthday()) {
            Ok(birthday) => birthday,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let account = SignUpDto {
            first_name: first_name(),
            last_name: last_name(),
            email: email(),
            phone_number: phone_number(),
            password: password(),
            birthday,
        };
        let config = config.clone();
        let as_admin = can_grant_admin && as_admin();

        pending.set(true);
        spawn(async move {
            let result = if as_admin {
                api::sign_up_admin(&config, &account).await
            } else {
                api::sign_up(&config, &account).await
            };
            match result {
                Ok(()) => {
                    tracing::info!(email = %account.email, as_admin, "Created customer");

                    navigator.push(Route::Customer {});
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                    pending.set(false);
                }
            }
        });
    };

    rsx!(
        Page { view: View::CreateCustomer, heading: "New customer",
            form { class: "flex flex-col gap-3 max-w-xl",
                onsubmit: onsubmit,
                if let Some(message) = error() {
                    ErrorAlert { message }
                }
                div { class: "flex gap-3",
                    TextField { label: "First name", value: first_name, required: true }
                    TextField { label: "Last name", value: last_name, required: true }
                }
                TextField { label: "Email", value: email, input_type: "email", required: true }
                TextField { label: "Phone number", value: phone_number, input_type: "tel" }
                TextField { label: "Birthday", value: birthday, input_type: "date", required: true }
                TextField { label: "Password", value: password, input_type: "password", required: true }
                if can_grant_admin {
                    label { class: "label",
                        input {
                            r#type: "checkbox",
                            class: "checkbox",
                            checked: as_admin(),
                            onchange: move |e| as_admin.set(e.checked()),
                        }
                        "Administrator account"
                    }
                }
                div { class: "flex gap-2 justify-end",
                    Link { to: Route::Customer {}, class: "btn btn-ghost", "Cancel" }
                    button { class: "btn btn-primary", r#type: "submit", disabled: pending(),
                        "Create"
                    }
                }
            }
        }
    )
}

/// Edits an existing user record. After saving it navigates to `return_to`, or shows a
/// confirmation in place when there is nowhere to go.
#[component]
pub fn CustomerForm(user: UserDto, return_to: Option<Route>) -> Element {
    let config = use_context::<Config>();
    let auth = use_context::<Store<AuthState>>();
    let navigator = use_navigator();

    let first_name = use_signal(|| user.first_name.clone());
    let last_name = use_signal(|| user.last_name.clone());
    let email = use_signal(|| user.email.clone());
    let phone_number = use_signal(|| user.phone_number.clone());
    let birthday = use_signal(|| user.birthday.format("%Y-%m-%d").to_string());
    let mut error = use_signal(|| None::<String>);
    let mut saved = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let birthday = match parse_birthday(&birthday()) {
            Ok(birthday) => birthday,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let updated = UserDto {
            first_name: first_name(),
            last_name: last_name(),
            email: email(),
            phone_number: phone_number(),
            birthday,
            ..user.clone()
        };
        let config = config.clone();
        let authorization = auth.read().authorization(Utc::now());
        let return_to = return_to.clone();

        spawn(async move {
            match api::update_user(&config, authorization, &updated).await {
                Ok(()) => {
                    tracing::info!(user_id = updated.id, "Updated customer");

                    match return_to {
                        Some(route) => {
                            navigator.push(route);
                        }
                        None => {
                            error.set(None);
                            saved.set(true);
                        }
                    }
                }
                Err(err) => {
                    tracing::error!(user_id = updated.id, "Failed to update customer: {}", err);

                    saved.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx!(
        form { class: "flex flex-col gap-3 max-w-xl",
            onsubmit: onsubmit,
            if let Some(message) = error() {
                ErrorAlert { message }
            }
            if saved() {
                div { role: "status", class: "alert alert-success", "Saved" }
            }
            div { class: "flex gap-3",
                TextField { label: "First name", value: first_name, required: true }
                TextField { label: "Last name", value: last_name, required: true }
            }
            TextField { label: "Email", value: email, input_type: "email", required: true }
            TextField { label: "Phone number", value: phone_number, input_type: "tel" }
            TextField { label: "Birthday", value: birthday, input_type: "date", required: true }
            div { class: "flex justify-end",
                button { class: "btn btn-primary", r#type: "submit", "Save" }
            }
        }
    )
}

#[component]
pub fn EditCustomer(id: String) -> Element {
    let config = use_context::<Config>();
    let auth = use_context::<Store<AuthState>>();

    let customer = use_resource(use_reactive((&id,), move |(id,)| {
        let config = config.clone();
        async move {
            let user_id = parse_customer_id(&id)?;
            let authorization = auth.read().authorization(Utc::now());

            api::get_user(&config, authorization, user_id)
                .await
                .map_err(|e| e.to_string())
        }
    }))
    .suspend()?;
    let customer = customer.read();

    rsx!(
        Page { view: View::EditCustomer, heading: "Edit customer",
            {match &*customer {
                Ok(Some(user)) => rsx!(
                    CustomerForm { user: user.clone(), return_to: Route::Customer {} }
                ),
                Ok(None) => rsx!(
                    ErrorAlert { message: format!("Customer {} was not found", id) }
                ),
                Err(message) => rsx!(
                    ErrorAlert { message: message.clone() }
                ),
            }}
            Link { to: Route::Customer {}, class: "btn btn-ghost self-start",
                "Back to customers"
            }
        }
    )
}
