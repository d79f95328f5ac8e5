use leptos::prelude::*;

use super::{
    contact::ContactSection,
    header::SiteHeader,
    hero::Hero,
    scroll::{use_scroll_tracker, use_smooth_scroll},
    timeline::TimelineSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let tracker = use_scroll_tracker();
    let smooth = use_smooth_scroll();

    view! {
        <div class="min-h-screen bg-black text-white overflow-x-hidden selection:bg-purple-500/30 font-sans">
            <SiteHeader compacted=tracker.compacted smooth />
            <Hero compacted=tracker.compacted />
            <TimelineSection progress=tracker.progress />
            <ContactSection />
        </div>
    }
}
