use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::{ModalCategory, ModalContent, ModalLayout, ModalTheme, ObjectFit};

/// Width the vanished scrollbar took, so locked content does not shift.
pub fn scrollbar_compensation(inner_width: f64, client_width: i32) -> f64 {
    (inner_width - f64::from(client_width)).max(0.0)
}

/// Body scroll lock for the lifetime of the value.
pub struct ScrollLock {
    body: HtmlElement,
    root: Option<HtmlElement>,
    nav: Option<HtmlElement>,
}

impl ScrollLock {
    pub fn engage() -> Option<Self> {
        let window = window()?;
        let document = window.document()?;
        let body = document.body()?;
        let root = document
            .document_element()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        let nav = document
            .query_selector("nav")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());

        let inner_width = window.inner_width().ok().and_then(|width| width.as_f64()).unwrap_or(0.0);
        let client_width = root.as_ref().map_or(0, |root| root.client_width());
        let padding = format!("{}px", scrollbar_compensation(inner_width, client_width));

        let _ = body.style().set_property("overflow", "hidden");
        let _ = body.style().set_property("padding-right", &padding);
        if let Some(root) = &root {
            let _ = root.style().set_property("overflow", "hidden");
        }
        if let Some(nav) = &nav {
            let _ = nav.style().set_property("padding-right", &padding);
        }
        debug!("body scroll locked");

        Some(Self { body, root, nav })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let _ = self.body.style().remove_property("overflow");
        let _ = self.body.style().remove_property("padding-right");
        if let Some(root) = &self.root {
            let _ = root.style().remove_property("overflow");
        }
        if let Some(nav) = &self.nav {
            let _ = nav.style().remove_property("padding-right");
        }
        debug!("body scroll released");
    }
}

pub fn layout_class(layout: ModalLayout) -> &'static str {
    match layout {
        ModalLayout::Default => "layout-row-reverse",
        ModalLayout::Reverse => "layout-row",
        ModalLayout::VerticalTextTop => "layout-column-reverse",
        ModalLayout::VerticalImageTop => "layout-column",
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub data: Option<Rc<ModalContent>>,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    use_effect_with_deps(
        move |open| {
            let lock = if *open { ScrollLock::engage() } else { None };
            move || drop(lock)
        },
        props.open,
    );

    {
        let on_close = props.on_close.clone();
        let open = props.open;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    let Some(data) = props.data.as_ref().filter(|_| props.open) else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let body = match data.category {
        ModalCategory::Cinematic => view_cinematic(data),
        ModalCategory::Showcase => view_showcase(data),
        ModalCategory::Gallery => view_gallery(data),
        ModalCategory::Reference => view_reference(data),
    };

    let overlay = html! {
        <div class="modal-root">
            <style>
                {r#"
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 99;
                        background: rgba(9, 9, 11, 0.8);
                        backdrop-filter: blur(4px);
                        animation: modalFade 0.3s ease;
                    }
                    .modal-stage {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        pointer-events: none;
                    }
                    .modal-panel {
                        pointer-events: auto;
                        position: relative;
                        width: 100%;
                        max-width: 72rem;
                        max-height: 90vh;
                        overflow: auto;
                        border-radius: 1.5rem;
                        animation: modalRise 0.35s cubic-bezier(0.16, 1, 0.3, 1);
                    }
                    .modal-panel.theme-dark { background: #09090b; color: #e4e4e7; }
                    .modal-panel.theme-light { background: #fafafa; color: #18181b; }
                    .modal-panel.layout-row { display: flex; flex-direction: row; }
                    .modal-panel.layout-row-reverse { display: flex; flex-direction: row-reverse; }
                    .modal-panel.layout-column { display: flex; flex-direction: column; }
                    .modal-panel.layout-column-reverse { display: flex; flex-direction: column-reverse; }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        z-index: 2;
                        border: 1px solid rgba(255,255,255,0.2);
                        border-radius: 9999px;
                        background: rgba(0,0,0,0.5);
                        color: #fff;
                        padding: 0.5rem 0.8rem;
                        cursor: pointer;
                    }
                    .modal-media { flex: 1; min-height: 30%; }
                    .modal-media img, .modal-media video { width: 100%; height: 100%; object-fit: cover; }
                    .modal-text { flex: 1; padding: 2.5rem; }
                    .modal-label { font-size: 0.75rem; letter-spacing: 0.2em; font-weight: 700; }
                    .modal-count { color: #a1a1aa; text-transform: uppercase; margin-top: 0.25rem; }
                    .modal-title { font-size: 2.5rem; font-weight: 700; text-transform: uppercase; }
                    .modal-panels { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 1rem; }
                    .modal-panel-card { padding: 1.25rem; border-radius: 0.75rem; background: #3f3f46; color: #fff; }
                    .modal-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; padding: 0; list-style: none; }
                    .modal-tags li { border: 1px solid #6a9a3f; border-radius: 9999px; padding: 0.25rem 0.75rem; }
                    .modal-gallery { display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.75rem; padding: 2.5rem; }
                    .modal-gallery img { width: 100%; height: 16rem; border-radius: 0.75rem; }
                    .modal-gallery .span-2 { grid-column: span 2; }
                    .modal-gallery .fit-cover { object-fit: cover; }
                    .modal-gallery .fit-contain { object-fit: contain; background: #18181b; }
                    @keyframes modalFade { from { opacity: 0; } to { opacity: 1; } }
                    @keyframes modalRise {
                        from { opacity: 0; transform: translateY(20px) scale(0.97); }
                        to { opacity: 1; transform: translateY(0) scale(1); }
                    }
                "#}
            </style>
            <div class="modal-backdrop" onclick={close.clone()} />
            <div class="modal-stage">
                <div
                    class={classes!(
                        "modal-panel",
                        theme_class(data.theme),
                        (data.category == ModalCategory::Cinematic).then(|| layout_class(data.layout))
                    )}
                    onclick={stop}
                >
                    <button class="modal-close" onclick={close} aria-label="Close">{"✕"}</button>
                    { body }
                </div>
            </div>
        </div>
    };

    match document_body() {
        Some(host) => yew::create_portal(overlay, host),
        None => overlay,
    }
}

fn document_body() -> Option<Element> {
    window()?.document()?.body().map(Element::from)
}

fn theme_class(theme: ModalTheme) -> &'static str {
    match theme {
        ModalTheme::Dark => "theme-dark",
        ModalTheme::Light => "theme-light",
    }
}

fn view_heading(data: &ModalContent) -> Html {
    html! {
        <>
            if let Some(label) = &data.label {
                <div class="modal-label">{label}</div>
            }
            <h2 class="modal-title">{&data.title}</h2>
            if let Some(subtitle) = &data.subtitle {
                <div class="modal-label">{subtitle}</div>
            }
        </>
    }
}

fn view_paragraphs(data: &ModalContent) -> Html {
    data.body.iter().map(|paragraph| html! { <p>{paragraph}</p> }).collect()
}

fn view_cinematic(data: &ModalContent) -> Html {
    let image = config::asset_url(data.image.as_deref().unwrap_or("cinematic-default.jpg"));
    html! {
        <>
            <div class="modal-media">
                <img src={image} alt={data.title.clone()} />
            </div>
            <div class="modal-text">
                { view_heading(data) }
                { view_paragraphs(data) }
            </div>
        </>
    }
}

fn view_showcase(data: &ModalContent) -> Html {
    html! {
        <div class="modal-text">
            { view_heading(data) }
            if let Some(video) = &data.video {
                <div class="modal-media">
                    <video src={config::asset_url(video)} autoplay=true loop=true muted=true playsinline=true />
                </div>
            }
            { view_paragraphs(data) }
            if !data.panels.is_empty() {
                <div class="modal-panels">
                    { for data.panels.iter().map(|panel| html! {
                        <div class="modal-panel-card">
                            <h4>{&panel.title}</h4>
                            <p>{&panel.body}</p>
                        </div>
                    }) }
                </div>
            }
            if !data.tags.is_empty() {
                <ul class="modal-tags">
                    { for data.tags.iter().map(|tag| html! { <li>{tag}</li> }) }
                </ul>
            }
        </div>
    }
}

pub fn photo_count(count: usize) -> String {
    format!("{} Photos", count)
}

fn view_gallery(data: &ModalContent) -> Html {
    html! {
        <>
            <div class="modal-text">
                { view_heading(data) }
                <div class="modal-label modal-count">{photo_count(data.gallery.len())}</div>
            </div>
            <div class="modal-gallery">
                { for data.gallery.iter().map(|item| html! {
                    <img
                        src={config::asset_url(&item.url)}
                        alt={data.title.clone()}
                        class={classes!(
                            (item.span > 1).then_some("span-2"),
                            match item.fit {
                                ObjectFit::Cover => "fit-cover",
                                ObjectFit::Contain => "fit-contain",
                            }
                        )}
                    />
                }) }
            </div>
        </>
    }
}

fn view_reference(data: &ModalContent) -> Html {
    html! {
        <div class="modal-text">
            { view_heading(data) }
            { view_paragraphs(data) }
        </div>
    }
}
