use yew::prelude::*;

use super::hooks::{use_clock, use_menu_gate};
use crate::config::SiteConfig;
use crate::content::{Card, NavEntry};
use crate::controllers::{HoverFlag, HoverIcon, HoverPalette};

#[derive(Properties, PartialEq)]
pub struct HoverButtonProps {
    pub label: AttrValue,
    pub href: AttrValue,
    #[prop_or_default]
    pub palette: HoverPalette,
    #[prop_or_default]
    pub icon: HoverIcon,
    pub transition_ms: u32,
    pub icon_delay_ms: u32,
    /// Optional renderer for the button body, handed the current hover flag.
    #[prop_or_default]
    pub render: Option<Callback<bool, Html>>,
}

#[function_component(HoverButton)]
pub fn hover_button(props: &HoverButtonProps) -> Html {
    let flag = use_state(HoverFlag::new);
    let hovered = flag.hovered();

    let onmouseenter = {
        let flag = flag.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *flag;
            next.enter();
            flag.set(next);
        })
    };

    let onmouseleave = {
        let flag = flag.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *flag;
            next.leave();
            flag.set(next);
        })
    };

    let body = match props.render.as_ref() {
        Some(render) => render.emit(hovered),
        None => html! {
            <>
                <span class="hover-button-label">{props.label.clone()}</span>
                <span class="hover-button-icon" style={props.icon.style(props.icon_delay_ms)} aria-hidden="true">
                    {props.icon.glyph(hovered).to_string()}
                </span>
            </>
        },
    };

    html! {
        <a
            class={classes!("hover-button", hovered.then_some("is-hovered"))}
            href={props.href.clone()}
            style={props.palette.style(hovered, props.transition_ms)}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            {body}
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClockBadgeProps {
    pub config: SiteConfig,
    pub label: AttrValue,
}

#[function_component(ClockBadge)]
pub fn clock_badge(props: &ClockBadgeProps) -> Html {
    let time = use_clock(&props.config);

    html! {
        <p class="clock-badge">
            <span class="muted">{props.label.clone()}</span>
            <time>{time}</time>
        </p>
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub entries: Vec<NavEntry>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let menu = use_menu_gate();

    let on_toggle = {
        let toggle = menu.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let (label, icon) = if menu.open {
        ("Close menu", "✕")
    } else {
        ("Open menu", "☰")
    };

    html! {
        <>
            <button
                class="menu-toggle"
                type="button"
                aria-label={label}
                aria-expanded={menu.open.to_string()}
                onclick={on_toggle}
            >
                <span aria-hidden="true">{icon}</span>
            </button>
            if menu.open {
                <nav class="menu-overlay" aria-label="Mobile navigation">
                    <ul>
                        { for props.entries.iter().enumerate().map(|(index, entry)| {
                            let select = menu.select.clone();
                            html! {
                                <li key={entry.href.clone()}>
                                    <a
                                        href={entry.href.clone()}
                                        onclick={Callback::from(move |_: MouseEvent| select.emit(index))}
                                    >
                                        {entry.label.clone()}
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                </nav>
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub config: SiteConfig,
    pub navigation: Vec<NavEntry>,
    pub tagline_visible: bool,
    pub logo_opacity: f64,
    #[prop_or_default]
    pub node: NodeRef,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let logo_style = format!("opacity: {:.3};", props.logo_opacity);

    html! {
        <header class="site-header" ref={props.node.clone()}>
            <a class="sticky-logo" href="/" style={logo_style}>{"AquaCycle"}</a>
            <nav class="desktop-nav" aria-label="Primary">
                <ul>
                    { for props.navigation.iter().map(|entry| html! {
                        <li key={entry.href.clone()}>
                            <a href={entry.href.clone()}>{entry.label.clone()}</a>
                        </li>
                    }) }
                </ul>
            </nav>
            <ClockBadge config={props.config.clone()} label="India" />
            <MobileMenu entries={props.navigation.clone()} />
            <p class={classes!("tagline", props.tagline_visible.then_some("is-visible"))}>
                {"Every drop, used twice."}
            </p>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub scale: f64,
    pub fade: f64,
    pub header_height: f64,
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let style = format!(
        "padding-top: {:.0}px; --hero-scale: {:.4}; --hero-fade: {:.3};",
        props.header_height, props.scale, props.fade
    );

    html! {
        <section class="hero" style={style} aria-labelledby="hero-heading">
            <div class="hero-banner">
                <h1 id="hero-heading">{props.title.clone()}</h1>
                <p>{props.subtitle.clone()}</p>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    pub heading: AttrValue,
    pub cards: Vec<Card>,
    pub config: SiteConfig,
}

#[function_component(CardGrid)]
pub fn card_grid(props: &CardGridProps) -> Html {
    if props.cards.is_empty() {
        return html! {};
    }

    let palette = HoverPalette::inverted("#ffffff", "#0b3d5c");

    html! {
        <section class="section-block card-grid">
            <h2>{props.heading.clone()}</h2>
            <ul class="cards">
                { for props.cards.iter().map(|card| html! {
                    <li key={card.href.clone()} class={classes!("card", card.category.as_str())}>
                        <h3>{card.title.clone()}</h3>
                        <p class="muted">{card.summary.clone()}</p>
                        <HoverButton
                            label="Read more"
                            href={AttrValue::from(card.href.clone())}
                            palette={palette.clone()}
                            transition_ms={props.config.hover_transition_ms}
                            icon_delay_ms={props.config.icon_fade_delay_ms}
                        />
                    </li>
                }) }
            </ul>
        </section>
    }
}
