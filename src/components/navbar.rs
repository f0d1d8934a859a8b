use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::scroll::scroll_to_section;

pub const NAVBAR_ID: &str = "navbar";

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#services", "Services"),
    ("#about", "About"),
    ("#why-us", "Why Us"),
    ("#contact", "Contact"),
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAVBAR_SCROLLED_AFTER
}

fn contains_target(node: &NodeRef, target: Option<&Node>) -> bool {
    match node.cast::<Element>() {
        Some(element) => element.contains(target),
        None => false,
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let (_, scroll_y) = use_window_scroll();
    let menu_ref = use_node_ref();
    let burger_ref = use_node_ref();

    // Close the menu on any click outside of it and the burger
    {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let burger_ref = burger_ref.clone();
        use_effect_with_deps(move |_| {
            let document = window().and_then(|w| w.document());

            let click_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside_menu = contains_target(&menu_ref, target.as_ref());
                let on_burger = contains_target(&burger_ref, target.as_ref());
                if !inside_menu && !on_burger {
                    menu_open.set(false);
                }
            }) as Box<dyn FnMut(MouseEvent)>);

            if let Some(document) = &document {
                let _ = document.add_event_listener_with_callback(
                    "click",
                    click_callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        click_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            menu_open.set(!*menu_open);
        })
    };

    let follow_link = |href: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(href, NAVBAR_ID);
        })
    };

    let icon = if *menu_open { "fa-times" } else { "fa-bars" };

    html! {
        <header id={NAVBAR_ID} class={classes!("header", is_scrolled(scroll_y).then(|| "scrolled"))}>
            <nav class="navbar container">
                <a href="#home" class="logo" onclick={follow_link("#home")}>
                    <i class="fas fa-shield-alt"></i>
                    <span>{config::BRAND_NAME}</span>
                </a>
                <ul class={classes!("nav-menu", (*menu_open).then(|| "active"))} ref={menu_ref}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li>
                            <a href={*href} onclick={follow_link(*href)}>{*label}</a>
                        </li>
                    }) }
                </ul>
                <div id="burger" class="burger" ref={burger_ref} onclick={toggle_menu}>
                    <i class={classes!("fas", icon)}></i>
                </div>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::anchor_target;

    #[test]
    fn scrolled_after_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn nav_links_point_at_sections() {
        for (href, _) in NAV_LINKS {
            assert!(anchor_target(href).is_some(), "{}", href);
        }
    }
}
