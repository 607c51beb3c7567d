use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::config;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#shop", "Shop"),
    ("#shipping", "Versand"),
    ("#agb", "AGB"),
    ("#widerruf", "Widerruf"),
    ("#blog", "Blog"),
    ("#about", "Über uns"),
    ("#impressum", "Impressum"),
    ("#datenschutz", "Datenschutz"),
    ("#cookies", "Cookies"),
];

/// Location hash with the page default filled in.
pub fn normalize_hash(hash: &str) -> String {
    if hash.is_empty() {
        "#home".to_string()
    } else {
        hash.to_string()
    }
}

/// Header hides on the way down and comes back on the way up. Near the top
/// of the page it always shows.
pub fn header_hidden(last_y: f64, current_y: f64) -> bool {
    current_y >= config::HEADER_PIN_OFFSET && current_y > last_y
}

fn current_hash() -> String {
    let hash = window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    normalize_hash(&hash)
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let active = use_state(current_hash);
    let hidden = use_state(|| false);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        active.set(current_hash());
                    });
                    let _ = window.add_event_listener_with_callback(
                        "hashchange",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "hashchange",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    {
        let hidden = hidden.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = window() {
                    let last_y = Rc::new(Cell::new(window.scroll_y().unwrap_or(0.0)));
                    let callback = Closure::<dyn Fn()>::new({
                        let last_y = last_y.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(current_y) = win.scroll_y() {
                                    hidden.set(header_hidden(last_y.get(), current_y));
                                    last_y.set(current_y);
                                }
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    html! {
        <header class={classes!((*hidden).then(|| "hidden"))}>
            <div class="nav">
                <img
                    src="/images/goldene-gerste-logo.png"
                    alt="Goldene Gerste Logo"
                    class="logo-small"
                />
                <div class="brand">
                    <b>{"Goldene Gerste"}</b>{" • Stuttgart"}
                </div>
                <nav aria-label="Hauptnavigation">
                    { for NAV_LINKS.iter().map(|(href, title)| html! {
                        <a
                            href={*href}
                            class={classes!((*active == *href).then(|| "active"))}
                        >
                            { *title }
                        </a>
                    }) }
                </nav>
            </div>
        </header>
    }
}
