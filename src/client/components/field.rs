use dioxus::prelude::*;

/// Labelled input bound to a string signal.
#[component]
pub fn TextField(
    label: &'static str,
    value: Signal<String>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] required: bool,
) -> Element {
    let mut value = value;

    rsx!(
        label { class: "floating-label w-full",
            span { "{label}" }
            input {
                class: "input w-full",
                r#type: input_type,
                placeholder: label,
                required: required,
                value: "{value}",
                oninput: move |e| value.set(e.value()),
            }
        }
    )
}
