//! Small pill label.

use leptos::prelude::*;

/// Badge styled by `variant` (`outline`, `secondary`, `destructive`).
#[component]
pub fn Badge(#[prop(default = "outline")] variant: &'static str, children: Children) -> impl IntoView {
    view! { <span class=format!("badge badge--{variant}")>{children()}</span> }
}
