mod browser;
mod components;
mod hooks;

use web_sys::window;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::{CardCategory, SiteContent};
use browser::{prefers_reduced_motion, scroll_to_top};
use components::{CardGrid, Hero, HoverButton, SiteHeader};
use hooks::{use_element_height, use_scroll_reveal, use_viewport_progress};

fn resolve_config() -> SiteConfig {
    let config = SiteConfig::default();
    if prefers_reduced_motion() {
        config.without_motion()
    } else {
        config
    }
}

fn resolve_content() -> SiteContent {
    SiteContent::load().unwrap_or_else(|err| {
        gloo_console::warn!("content: falling back to empty site content:", err.to_string());
        SiteContent::default()
    })
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| resolve_config());
    let content = use_memo((), |_| resolve_content());
    let header_ref = use_node_ref();

    use_effect_with((), |_| {
        scroll_to_top();
        || ()
    });

    let header_height = use_element_height(header_ref.clone());
    let tagline_visible = use_scroll_reveal();
    let progress = use_viewport_progress(&config);

    let render_cta = Callback::from(|hovered: bool| {
        if hovered {
            html! { <span>{"Let's talk water →"}</span> }
        } else {
            html! { <span>{"Talk to us"}</span> }
        }
    });

    let articles: Vec<_> = content.cards_in(CardCategory::Article).cloned().collect();
    let categories: Vec<_> = content.cards_in(CardCategory::Category).cloned().collect();
    let awards: Vec<_> = content.cards_in(CardCategory::Award).cloned().collect();

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <SiteHeader
                config={(*config).clone()}
                navigation={content.navigation.clone()}
                tagline_visible={tagline_visible}
                logo_opacity={progress.sticky_logo_opacity()}
                node={header_ref}
            />
            <main id="content" class="page-shell">
                <Hero
                    scale={progress.scale(config.hero_min_scale)}
                    fade={progress.progress()}
                    header_height={header_height}
                    title="Water reuse, engineered"
                    subtitle="Treatment systems that return wastewater to service."
                />
                <div class="hero-cta">
                    <HoverButton
                        label="Talk to us"
                        href="/contact"
                        transition_ms={config.hover_transition_ms}
                        icon_delay_ms={config.icon_fade_delay_ms}
                        render={render_cta}
                    />
                </div>
                <CardGrid heading="From the blog" cards={articles} config={(*config).clone()} />
                <CardGrid heading="Solutions" cards={categories} config={(*config).clone()} />
                <CardGrid heading="Awards" cards={awards} config={(*config).clone()} />
            </main>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
