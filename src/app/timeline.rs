use leptos::{either::Either, html, prelude::*, server_fn::codec::GetUrl};
use leptos_use::use_element_visibility;

#[cfg(feature = "ssr")]
use crate::timeline::get_timeline;
use crate::{
    icon::{Icon, IconSlot},
    timeline::{TimelineEntry, GLOBAL_TIMELINE_CACHE, TIMELINE_FILE},
};

use super::{
    icon::{InvalidIcon, LucideIcon},
    scroll::use_progress_spring,
};

#[cfg(feature = "ssr")]
const TIMELINE_CACHE_CONTROL: &str = "public, max-age=3600";

/// `GET /api/timeline`
#[server(prefix = "/api", endpoint = "timeline", input = GetUrl)]
pub async fn get_timeline_server() -> Result<Vec<TimelineEntry>, ServerFnError> {
    use http::{header::CACHE_CONTROL, HeaderValue};

    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.insert_header(CACHE_CONTROL, HeaderValue::from_static(TIMELINE_CACHE_CONTROL));
    }
    get_timeline().map_err(|e| {
        tracing::error!("couldn't serve timeline: {e}");
        ServerFnError::new(e.to_string())
    })
}

async fn load_timeline() -> Result<Vec<TimelineEntry>, ServerFnError> {
    let cache = &*GLOBAL_TIMELINE_CACHE;
    if let Some(entries) = cache.get(TIMELINE_FILE) {
        return Ok(entries.clone());
    }
    // the server reads the embedded data directly, the browser asks the API
    #[cfg(feature = "ssr")]
    let entries = get_timeline().map_err(|e| ServerFnError::new(e.to_string()))?;
    #[cfg(not(feature = "ssr"))]
    let entries = {
        let entries = get_timeline_server().await?;
        cache.insert(TIMELINE_FILE.to_string(), entries.clone());
        entries
    };
    Ok(entries)
}

#[component]
pub fn TimelineSection(progress: Signal<f64>) -> impl IntoView {
    let scale = use_progress_spring(progress);
    let timeline = Resource::new(|| (), |_| load_timeline());

    view! {
        <section class="relative py-20 px-4 max-w-6xl mx-auto">
            <div class="absolute left-8 md:left-1/2 top-0 bottom-0 w-[2px] bg-gray-800 md:-translate-x-1/2 h-full z-0">
                <div
                    class="absolute top-0 left-0 w-full h-full origin-top bg-gradient-to-b from-indigo-500 via-purple-500 to-pink-500"
                    style=move || format!("transform: scaleY({})", scale.get())
                ></div>
            </div>

            <div class="relative z-10 pl-12 md:pl-0">
                <Transition fallback=move || {
                    view! {
                        <div class="space-y-8 md:w-5/12 px-4 md:px-8">
                            <div class="animate-pulse h-32 rounded-2xl bg-gray-900/80"></div>
                            <div class="animate-pulse h-32 rounded-2xl bg-gray-900/80"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        match timeline.await {
                            Ok(entries) => {
                                Either::Left(
                                    entries
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, entry)| view! { <TimelineItem entry index /> })
                                        .collect_view(),
                                )
                            }
                            Err(e) => {
                                log::error!("couldn't load timeline: {e}");
                                Either::Right(
                                    view! {
                                        <p class="text-center text-gray-500">
                                            "Não foi possível carregar a minha história agora."
                                        </p>
                                    },
                                )
                            }
                        }
                    })}
                </Transition>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(entry: TimelineEntry, index: usize) -> impl IntoView {
    match entry.icon_slot() {
        IconSlot::Symbol(icon) => Either::Left(view! { <TimelineCard entry icon index /> }),
        IconSlot::Invalid(name) => {
            log::error!("invalid timeline icon: {name}");
            Either::Right(view! { <InvalidIcon name /> })
        }
    }
}

#[component]
fn TimelineCard(entry: TimelineEntry, icon: Icon, index: usize) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);
    let (revealed, set_revealed) = signal(false);
    // reveal once, never hide again
    Effect::new(move |_| {
        if visible.get() {
            set_revealed(true);
        }
    });

    let row = if index % 2 == 0 { "md:flex-row-reverse" } else { "" };
    let TimelineEntry {
        year,
        title,
        description,
        color,
        ..
    } = entry;
    let dot_color = color.clone();

    view! {
        <div
            node_ref=el
            class=move || {
                format!(
                    "flex flex-col md:flex-row items-center w-full mb-16 md:mb-24 relative transition-all duration-700 ease-out {row} {}",
                    if revealed.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-12" },
                )
            }
            style=format!("transition-delay: {}ms", index * 200)
        >
            <div class="w-full md:w-5/12 px-4 md:px-8 group">
                <div class="p-6 rounded-2xl bg-gray-900/80 border border-gray-800 hover:border-gray-600 transition-all duration-300 shadow-xl hover:shadow-2xl hover:-translate-y-1 relative overflow-hidden">
                    <div class=format!(
                        "absolute top-0 left-0 w-1 h-full bg-gradient-to-b {color} opacity-70",
                    )></div>

                    <div class="flex items-center gap-3 mb-3">
                        <span class="p-2 rounded-lg bg-gray-800 text-white">
                            <LucideIcon icon class="w-6 h-6" />
                        </span>
                        <span class="text-sm font-mono text-gray-400">{year}</span>
                    </div>

                    <h3 class="text-xl md:text-2xl font-bold text-white mb-2">{title}</h3>
                    <p class="text-gray-400 leading-relaxed text-sm md:text-base">{description}</p>
                </div>
            </div>

            <div class="w-8 h-8 absolute left-1/2 -translate-x-1/2 hidden md:flex items-center justify-center z-10">
                <div class=move || {
                    format!(
                        "w-4 h-4 rounded-full bg-gradient-to-r {dot_color} shadow-[0_0_15px_rgba(255,255,255,0.5)] transition-transform duration-500 {}",
                        if revealed.get() { "scale-100" } else { "scale-0" },
                    )
                }></div>
            </div>

            <div class="w-full md:w-5/12"></div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn entry(icon: &str) -> TimelineEntry {
        TimelineEntry {
            year: "2024".to_string(),
            title: "Primeiro emprego".to_string(),
            description: "Front-end".to_string(),
            icon: icon.to_string(),
            color: "from-pink-500 to-rose-600".to_string(),
        }
    }

    #[test]
    fn test_invalid_icon_item_renders_marker() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <TimelineItem entry=entry("NotARealIcon") index=0 /> }.to_html());
        assert!(html.contains("Ícone inválido: NotARealIcon"));
        assert!(!html.contains("Primeiro emprego"));
    }

    #[test]
    fn test_item_layout_alternates() {
        let owner = Owner::new();
        let (even, odd) = owner.with(|| {
            (
                view! { <TimelineItem entry=entry("Briefcase") index=0 /> }.to_html(),
                view! { <TimelineItem entry=entry("Briefcase") index=1 /> }.to_html(),
            )
        });
        assert!(even.contains("md:flex-row-reverse"));
        assert!(!odd.contains("md:flex-row-reverse"));
        assert!(odd.contains("transition-delay: 200ms"));
        assert!(even.contains("Primeiro emprego"));
        assert!(even.contains("from-pink-500 to-rose-600"));
    }
}
