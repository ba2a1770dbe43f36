use log::debug;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub id: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Vision", id: "prototype" },
    NavLink { label: "Property", id: "property" },
    NavLink { label: "Serving Micron", id: "serving" },
    NavLink { label: "Living Lab", id: "serving-tesla" },
    NavLink { label: "Timeline", id: "timeline" },
];

/// Document offset that lands a section just below the fixed header.
pub fn scroll_target(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (element_top + scroll_y - header_offset).max(0.0)
}

fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_section(id: &str) {
    let Some(window) = window() else {
        return;
    };
    let Some(element) = window.document().and_then(|document| document.get_element_by_id(id)) else {
        debug!("no section #{} to scroll to", id);
        return;
    };
    let element_top = element.get_bounding_client_rect().top();
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    smooth_scroll_to(scroll_target(element_top, scroll_y, config::HEADER_OFFSET_PX));
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

/// Anchor click handler that scrolls instead of jumping.
pub fn section_link(id: &'static str, before: Option<Callback<()>>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(before) = &before {
            before.emit(());
        }
        scroll_to_section(id);
    })
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 10.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let to_top = {
        let close_menu = close_menu.clone();
        Callback::from(move |_: MouseEvent| {
            close_menu.emit(());
            scroll_to_top();
        })
    };

    let links = |class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|link| {
                html! {
                    <a
                        key={link.id}
                        class={class}
                        href={format!("#{}", link.id)}
                        onclick={section_link(link.id, Some(close_menu.clone()))}
                    >
                        {link.label}
                    </a>
                }
            })
            .collect::<Html>()
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(24px);
                        border-bottom: 1px solid #e4e4e7;
                        transition: box-shadow 0.3s;
                    }
                    .top-nav.scrolled { box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.25rem 3rem;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        color: #3b2a4a;
                        cursor: pointer;
                    }
                    .nav-right { display: flex; gap: 2rem; }
                    .nav-link {
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #71717a;
                        text-decoration: none;
                    }
                    .nav-link:hover { color: #6a9a3f; }
                    .burger-menu { display: none; background: none; border: none; padding: 0.5rem; }
                    .burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #27272a; }
                    .mobile-menu { display: none; }
                    @media (max-width: 768px) {
                        .nav-content { padding: 1.25rem 1rem; }
                        .nav-right { display: none; }
                        .burger-menu { display: block; }
                        .mobile-menu.open {
                            display: flex;
                            flex-direction: column;
                            gap: 1.5rem;
                            position: fixed;
                            inset: 0;
                            padding: 6rem 1.5rem 2.5rem;
                            background: #fff;
                            z-index: -1;
                        }
                        .mobile-menu .nav-link {
                            font-size: 1.25rem;
                            color: #27272a;
                            padding-bottom: 1rem;
                            border-bottom: 1px solid #f4f4f5;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-logo" onclick={to_top}>{"Micron House"}</div>
                <div class="nav-right">{ links("nav-link") }</div>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                { links("nav-link") }
            </div>
        </nav>
    }
}
