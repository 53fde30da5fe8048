use leptos::html;
use leptos::prelude::*;
use leptos_use::{UseIntersectionObserverReturn, use_intersection_observer};

/// Layout wrapper shared by every block below the hero: consistent
/// vertical rhythm, centered content column, and the in-page scroll
/// anchor the nav links point at.
#[component]
pub fn Section(
    id: &'static str,
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] extra: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=format!("py-20 px-6 md:px-12 lg:px-24 {extra}")>
            <div class="max-w-6xl mx-auto">
                {title.map(|text| view! { <SectionTitle text/> })}
                {children()}
            </div>
        </section>
    }
}

/// Heading that slides in the first time it enters the viewport and then
/// stays put; the observer is stopped after the first hit so the reveal
/// never replays.
#[component]
fn SectionTitle(text: &'static str) -> impl IntoView {
    let heading: NodeRef<html::H2> = NodeRef::new();
    let revealed = RwSignal::new(false);

    let UseIntersectionObserverReturn { stop, .. } =
        use_intersection_observer(heading, move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                revealed.set(true);
            }
        });

    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });

    view! {
        <h2
            node_ref=heading
            class=move || format!(
                "text-3xl md:text-4xl font-bold mb-12 text-slate-800 inline-block \
                 transition-all duration-700 {}",
                if revealed.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-5" },
            )
        >
            {text}
        </h2>
    }
}
