//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Understand Legal Documents in Plain Language"</h1>
            <p class="subtitle">
                "Upload a contract, lease, or agreement and get a clause-by-clause "
                "breakdown in plain language. PDF and DOCX supported."
            </p>
        </div>
    }
}
