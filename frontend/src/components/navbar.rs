use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::NAV_ITEMS;
use crate::hooks::use_entered;
use crate::motion::style::Reveal;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let entered = use_entered();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let bar = Reveal::fade_up(-100.0).springy();
    let links = Reveal::slide_x(-20.0).duration(0.4).stagger(0.1);
    let menu = Reveal::expand(400.0);

    html! {
        <nav class="top-nav" style={bar.style(entered, 0)}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="nav-logo-icon">{"</>"}</span>
                    <span class="nav-logo-text">{"DASH"}</span>
                </a>

                <div class="nav-links">
                    { for NAV_ITEMS.iter().enumerate().map(|(index, item)| html! {
                        <a href={item.anchor} class="nav-link" style={links.style(entered, index)}>
                            {item.label}
                        </a>
                    }) }
                    <button class="nav-join-button">{"Join Us"}</button>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class="mobile-menu"
                style={menu.style(*menu_open, 0)}
                aria-hidden={(!*menu_open).to_string()}>
                <div class="mobile-menu-inner">
                    { for NAV_ITEMS.iter().enumerate().map(|(index, item)| html! {
                        <a href={item.anchor} class="mobile-link"
                            style={links.style(*menu_open, index)}
                            onclick={close_menu.clone()}>
                            {item.label}
                        </a>
                    }) }
                    <button class="nav-join-button mobile" onclick={close_menu.clone()}>
                        {"Join Us"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
