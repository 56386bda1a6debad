use leptos::*;

use crate::APP_TITLE;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <nav class="header-nav">
                <a href="#" class="logo">{APP_TITLE}</a>
            </nav>
        </header>
    }
}
