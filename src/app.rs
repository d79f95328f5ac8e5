mod contact;
mod header;
mod hero;
mod homepage;
mod icon;
mod logo;
mod scroll;
mod timeline;

use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

pub const SITE_URL: &str = "https://micaelfarias.com";
pub const SITE_NAME: &str = "Micael Farias";
const SITE_TITLE: &str = "Micael Farias — Desenvolvedor Full-Stack";
const SITE_DESCRIPTION: &str = "Portfólio profissional de Micael Farias, desenvolvedor full-stack especializado em React, Next.js, Node.js, Python e Django. Projetos, soluções modernas e alta performance para web.";
const OG_DESCRIPTION: &str = "Conheça os projetos, habilidades e jornada de Micael Farias. Desenvolvimento full-stack com foco em qualidade, performance e inovação.";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-br">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="shortcut icon" href="/favicon.svg" />
                <link rel="apple-touch-icon" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/micael-portfolio.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta name="robots" content="index, follow" />
        <Meta name="googlebot" content="index, follow, imageindex" />
        <Link rel="canonical" href=SITE_URL />
        <Meta property="og:title" content=SITE_TITLE />
        <Meta property="og:description" content=OG_DESCRIPTION />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:site_name" content=SITE_NAME />
        <Meta property="og:type" content="website" />

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
