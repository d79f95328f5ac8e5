use leptos::prelude::*;

use crate::icon::Icon;

use super::{icon::LucideIcon, SITE_NAME};

const GITHUB_URL: &str = "https://github.com/micaelfariasdev";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/micaelfariasdev/";
const CONTACT_MAIL: &str = "mailto:micaelfarias.dev@gmail.com";
const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section class="py-24 bg-gradient-to-t from-gray-900 to-black text-center border-t border-gray-800">
            <div class="max-w-3xl mx-auto px-6">
                <h2 class="text-3xl md:text-4xl font-bold mb-8">"Vamos construir algo incrível?"</h2>
                <p class="text-gray-400 mb-10">"Estou sempre aberto a novos desafios e conexões."</p>

                <div class="flex justify-center gap-6">
                    <ContactLink href=GITHUB_URL icon=Icon::Github label="GitHub" hover="hover:bg-indigo-600" external=true />
                    <ContactLink href=LINKEDIN_URL icon=Icon::Linkedin label="LinkedIn" hover="hover:bg-blue-600" external=true />
                    <ContactLink href=CONTACT_MAIL icon=Icon::Mail label="E-mail" hover="hover:bg-green-600" />
                </div>

                <footer class="mt-16 text-sm text-gray-600">
                    {format!("© {BUILD_YEAR} {SITE_NAME}.")}
                </footer>
            </div>
        </section>
    }
}

#[component]
fn ContactLink(
    href: &'static str,
    icon: Icon,
    label: &'static str,
    hover: &'static str,
    #[prop(optional)] external: bool,
) -> impl IntoView {
    view! {
        <a
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            aria-label=label
            class=format!(
                "p-4 bg-gray-800 rounded-full {hover} hover:text-white transition-colors duration-300",
            )
        >
            <LucideIcon icon class="w-6 h-6" />
        </a>
    }
}
