use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::{ProjectEntry, asset_path};

/// One project from the catalog as a self-contained card: image with a
/// silent placeholder fallback, hover overlay of external links,
/// description, detail bullets, and a tag row.
#[component]
pub fn ProjectCard(entry: &'static ProjectEntry) -> impl IntoView {
    // Set once by the img error event and never reset; a broken file
    // degrades to the placeholder glyph without surfacing anything.
    let image_broken = RwSignal::new(false);

    let image = move || match entry.image {
        Some(path) if !image_broken.get() => view! {
            <img
                src=asset_path(path)
                alt=entry.title
                class="w-full h-full object-contain transition-transform duration-500 group-hover:scale-105"
                on:error=move |_| image_broken.set(true)
            />
        }
        .into_any(),
        _ => view! {
            <div class="w-full h-full flex items-center justify-center bg-slate-100 text-slate-400">
                <Icon glyph=Glyph::Code size=48/>
            </div>
        }
        .into_any(),
    };

    view! {
        <article class="bg-white rounded-xl shadow-lg overflow-hidden border border-slate-100 hover:shadow-xl transition-all duration-300 flex flex-col h-full">
            <div class="h-64 overflow-hidden bg-slate-50 relative group flex items-center justify-center p-4">
                {image}

                // Overlay of external links; with no links this is just a
                // dimming layer with nothing interactive in it.
                <div class="absolute inset-0 bg-black/50 opacity-0 group-hover:opacity-100 group-focus-within:opacity-100 transition-opacity duration-300 flex items-center justify-center gap-4">
                    {entry.links.iter().map(|link| view! {
                        <a
                            href=link.url
                            target="_blank"
                            rel="noopener noreferrer"
                            title=link.kind.label()
                            class="p-2 bg-white rounded-full text-slate-900 hover:text-primary transition-colors"
                        >
                            <Icon glyph=link.kind.glyph() size=20/>
                        </a>
                    }).collect_view()}
                </div>
            </div>

            <div class="p-6 flex flex-col flex-grow">
                <h3 class="text-xl font-bold text-slate-800 mb-4">{entry.title}</h3>
                <p class="text-slate-600 mb-4 leading-relaxed text-sm">{entry.description}</p>

                <ul class="mb-6 space-y-2 text-sm text-slate-600 flex-grow">
                    {entry.details.iter().map(|detail| view! {
                        <li class="flex items-start">
                            <span class="mr-2 mt-1.5 w-1.5 h-1.5 bg-primary rounded-full flex-shrink-0"></span>
                            {*detail}
                        </li>
                    }).collect_view()}
                </ul>

                <div class="flex flex-wrap gap-2 mt-auto pt-4 border-t border-slate-100">
                    {entry.tags.iter().map(|tag| view! {
                        <span class="px-3 py-1 bg-slate-50 text-slate-600 text-xs font-medium rounded-full border border-slate-200">
                            {*tag}
                        </span>
                    }).collect_view()}
                </div>
            </div>
        </article>
    }
}
