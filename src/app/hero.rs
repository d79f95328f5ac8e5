use leptos::prelude::*;

use crate::icon::Icon;

use super::{icon::LucideIcon, logo::MfLogo};

#[component]
pub fn Hero(compacted: Signal<bool>) -> impl IntoView {
    view! {
        <section class="h-screen flex flex-col items-center justify-center relative px-4 overflow-hidden pt-16">
            <div class="absolute inset-0 bg-[linear-gradient(to_right,#80808012_1px,transparent_1px),linear-gradient(to_bottom,#80808012_1px,transparent_1px)] bg-[size:24px_24px]"></div>
            <div class="absolute top-0 left-0 w-full h-full bg-gradient-to-b from-black via-transparent to-black z-0"></div>

            <div class="z-10 text-center max-w-6xl mx-auto">
                <div class="h-32 mb-8 flex items-center justify-center">
                    <Show when=move || !compacted.get()>
                        <div class="animate-logo-in-lg">
                            <MfLogo />
                        </div>
                    </Show>
                </div>

                <h1 class="animate-rise [animation-delay:300ms] text-4xl md:text-7xl font-bold mb-4 bg-clip-text text-transparent bg-gradient-to-r from-white via-gray-200 to-gray-600">
                    "Desenvolvedor " <br />
                    <span class="text-indigo-400">"Full-Stack"</span>
                </h1>

                <p class="animate-rise [animation-delay:500ms] text-lg md:text-2xl text-gray-400 font-light leading-relaxed mb-12 max-w-2xl mx-auto">
                    "\"Eu sou " <strong class="text-white font-semibold">"Micael Farias"</strong>
                    ", apaixonado por tecnologia, com o sonho de um dia me tornar um grande desenvolvedor.\""
                </p>

                <div
                    id="history"
                    class="animate-fade-in [animation-delay:1s] absolute bottom-10 left-1/2 -translate-x-1/2 flex flex-col items-center gap-2"
                >
                    <span class="text-xs uppercase tracking-widest text-gray-500">"Minha História"</span>
                    <LucideIcon icon=Icon::ChevronDown class="animate-bounce text-indigo-500 w-6 h-6" />
                </div>
            </div>
        </section>
    }
}
