use leptos::prelude::*;

use leptos_meta::Stylesheet;
use leptos_meta::Title;
use leptos_meta::provide_meta_context;

use crate::components::icons::{Glyph, Icon};
use crate::components::navbar::NavBar;
use crate::content;
use crate::pages::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/devshin.css"/>
        <Title text="Young Jae Shin - Developer"/>

        <div class="min-h-screen bg-slate-50 font-sans text-slate-900">
            <NavBar/>

            <main>
                <Home/>
            </main>

            <Footer/>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-900 text-slate-400 py-12 border-t border-slate-800">
            <div class="max-w-6xl mx-auto px-6 md:px-12 flex flex-col md:flex-row justify-between items-center">
                <div class="mb-4 md:mb-0">
                    <span class="text-xl font-bold text-white tracking-tight">"DevShin"</span>
                    <p class="text-sm mt-2">"Taking ownership of every line of code."</p>
                </div>
                <div class="flex space-x-6">
                    <a
                        href=format!("mailto:{}", content::CONTACT_EMAIL)
                        class="hover:text-white transition-colors"
                        aria-label="Email"
                    >
                        <Icon glyph=Glyph::Mail size=20/>
                    </a>
                </div>
            </div>
            <div class="max-w-6xl mx-auto px-6 md:px-12 mt-8 pt-8 border-t border-slate-800 text-center text-sm">
                "© 2026 Young Jae Shin. All rights reserved."
            </div>
        </footer>
    }
}
