use leptos::prelude::*;

#[component]
pub fn MfLogo() -> impl IntoView {
    view! {
        <img
            src="/img/logo-completa.svg"
            alt="Logo"
            width="250"
            height="150"
            style="height: auto"
            class="w-32 md:w-40"
        />
    }
}
