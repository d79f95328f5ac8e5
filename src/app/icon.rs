use leptos::{either::*, prelude::*};

use crate::icon::{Icon, IconSlot, SvgNode};

/// Renders one of the page's line icons as inline SVG.
#[component]
pub fn LucideIcon(icon: Icon, #[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {icon
                .nodes()
                .iter()
                .map(|node| match *node {
                    SvgNode::Path(d) => EitherOf3::A(view! { <path d=d /> }),
                    SvgNode::Circle { cx, cy, r } => EitherOf3::B(view! { <circle cx=cx cy=cy r=r /> }),
                    SvgNode::Rect { x, y, width, height, rx } => {
                        EitherOf3::C(view! { <rect x=x y=y width=width height=height rx=rx /> })
                    }
                })
                .collect_view()}
        </svg>
    }
}

/// Stand-in for an icon name the page doesn't know.
#[component]
pub fn InvalidIcon(name: String) -> impl IntoView {
    view! { <span class="p-2 rounded-lg bg-red-600 text-white">{IconSlot::marker_text(&name)}</span> }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_invalid_icon_renders_marker() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <InvalidIcon name="NotARealIcon".to_string() /> }.to_html());
        assert!(html.contains("Ícone inválido: NotARealIcon"));
        assert!(html.contains("bg-red-600"));
    }

    #[test]
    fn test_icon_renders_svg_shapes() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <LucideIcon icon=Icon::Mail class="w-6 h-6" /> }.to_html());
        assert!(html.contains("<svg"));
        assert!(html.contains("class=\"w-6 h-6\""));
        assert!(html.contains("<rect"));
        assert!(html.contains("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"));
    }
}
