use dioxus::prelude::*;

/// Suspense wrapper for lazily loaded pages.
///
/// Pages that read a resource with `.suspend()?` render the spinner until their data arrives.
#[component]
pub fn Loadable(children: Element) -> Element {
    rsx!(
        SuspenseBoundary {
            fallback: |_| rsx!(
                div { class: "flex w-full justify-center p-12",
                    span { class: "loading loading-spinner loading-lg" }
                }
            ),
            {children}
        }
    )
}
