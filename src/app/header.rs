use leptos::prelude::*;

use super::{
    logo::MfLogo,
    scroll::{SmoothScroll, HISTORY_ANCHOR, HISTORY_SCROLL_DURATION},
};

const LINK_CLASS: &str = "hover:text-indigo-400 transition-colors relative group cursor-pointer";

#[component]
pub fn SiteHeader(compacted: Signal<bool>, smooth: SmoothScroll) -> impl IntoView {
    view! {
        <header class=move || {
            if compacted.get() {
                "fixed top-0 left-0 w-full z-50 transition-all duration-500 border-b bg-gray-900/5 backdrop-blur-md border-gray-800 py-2"
            } else {
                "fixed top-0 left-0 w-full z-50 transition-all duration-500 border-b bg-transparent border-transparent py-4"
            }
        }>
            <div class="flex justify-between items-center max-w-7xl w-full mx-auto px-6 h-16">
                <a href="/" class="relative w-[15%] flex items-center justify-center">
                    <Show when=move || compacted.get()>
                        <div class="animate-logo-in">
                            <MfLogo />
                        </div>
                    </Show>
                </a>
                <nav>
                    <ul class="flex gap-6 text-sm font-medium">
                        <li>
                            <a href="#" class=LINK_CLASS>
                                "Projetos"
                                <Underline />
                            </a>
                        </li>
                        <li>
                            <a
                                class=LINK_CLASS
                                on:click=move |_| {
                                    smooth.scroll_to(HISTORY_ANCHOR, HISTORY_SCROLL_DURATION)
                                }
                            >
                                "Sobre"
                                <Underline />
                            </a>
                        </li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}

#[component]
fn Underline() -> impl IntoView {
    view! {
        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-indigo-500 transition-all group-hover:w-full"></span>
    }
}
