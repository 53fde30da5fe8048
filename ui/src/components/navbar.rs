use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content;

/// The mobile menu is the only interactive state on the page. Closed on
/// mount, flipped by the menu button, forced back to Closed whenever a
/// link in the open panel is activated. Not persisted anywhere.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    view! {
        <nav class="fixed top-0 w-full bg-white/80 backdrop-blur-md z-50 border-b border-slate-100">
            <div class="max-w-7xl mx-auto px-6 md:px-12">
                <div class="flex justify-between items-center h-16">
                    <a href="#" class="text-xl font-bold text-primary tracking-tight">"DevShin"</a>

                    <div class="hidden md:flex space-x-8">
                        {content::NAV_LINKS.iter().map(|link| view! {
                            <a
                                href=link.anchor
                                class="text-sm font-medium text-slate-600 hover:text-primary transition-colors"
                            >
                                {link.label}
                            </a>
                        }).collect_view()}
                    </div>

                    <button
                        class="md:hidden text-slate-600"
                        aria-label="Toggle menu"
                        on:click=move |_| menu.update(|m| *m = m.toggled())
                    >
                        {move || {
                            let glyph = if menu.get().is_open() { Glyph::Close } else { Glyph::Menu };
                            view! { <Icon glyph/> }
                        }}
                    </button>
                </div>
            </div>

            {move || menu.get().is_open().then(|| view! {
                <div class="md:hidden bg-white border-b border-slate-100">
                    <div class="px-6 py-4 space-y-4">
                        {content::NAV_LINKS.iter().map(|link| view! {
                            <a
                                href=link.anchor
                                class="block text-slate-600 hover:text-primary font-medium"
                                on:click=move |_| menu.set(MenuState::Closed)
                            >
                                {link.label}
                            </a>
                        }).collect_view()}
                    </div>
                </div>
            })}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::MenuState;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
    }

    #[test]
    fn even_toggle_count_lands_closed_odd_lands_open() {
        let mut state = MenuState::default();
        for round in 1..=7 {
            state = state.toggled();
            if round % 2 == 0 {
                assert_eq!(state, MenuState::Closed, "after {round} toggles");
            } else {
                assert_eq!(state, MenuState::Open, "after {round} toggles");
            }
        }
    }
}
