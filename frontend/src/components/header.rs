use leptos::*;

use crate::services::theme::store_theme;
use crate::types::Theme;

#[component]
pub fn Header(theme: ReadSignal<Theme>, set_theme: WriteSignal<Theme>) -> impl IntoView {
    // Handler for the theme toggle
    let on_theme_click = move |_| {
        let next = theme.get_untracked().toggled();
        log::info!("🎨 Theme switched to {}", next.storage_value());
        set_theme.set(next);
        store_theme(next);
    };

    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">"ClauseEase"</a>
                <span class="badge">"Legal documents, in plain language"</span>
            </div>
            <div class="header-right">
                <button
                    class="theme-toggle"
                    class:dark=move || theme.get() == Theme::Dark
                    title="Switch theme"
                    on:click=on_theme_click
                >
                    {move || match theme.get() {
                        Theme::Light => "🌙",
                        Theme::Dark => "☀️",
                    }}
                </button>
            </div>
        </header>
    }
}
