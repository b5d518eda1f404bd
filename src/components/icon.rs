//! Fixed-size inline SVG glyph.

use leptos::prelude::*;

use crate::util::glyph::{IconName, IconSize};

#[component]
pub fn Icon(name: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    let px = size.px().to_string();
    let paths = name.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view();

    view! {
        <svg
            class=format!("icon icon--{}", name.as_str())
            width=px.clone()
            height=px
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths}
        </svg>
    }
}
