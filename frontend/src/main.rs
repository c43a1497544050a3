use yew::prelude::*;
use log::{info, Level};
use web_sys::window;

mod config;
mod enquiry;
mod pages {
    pub mod landing;
}
mod components {
    pub mod book_modal;
}

use pages::landing::Landing;
use components::book_modal::BookModal;


fn apply_theme(is_dark: bool) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force("dark", is_dark);
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub is_dark: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <button class="theme-toggle" {onclick} aria-label="Toggle theme">
            { if props.is_dark { "☀" } else { "☾" } }
        </button>
    }
}


#[function_component]
fn App() -> Html {
    let is_dark = use_state(|| true);
    let modal_open = use_state(|| false);

    use_effect_with_deps(|is_dark| {
        apply_theme(*is_dark);
        || ()
    }, *is_dark);

    let toggle_theme = {
        let is_dark = is_dark.clone();
        Callback::from(move |_| {
            info!("Switching to {} theme", if *is_dark { "light" } else { "dark" });
            is_dark.set(!*is_dark);
        })
    };

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(true))
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    html! {
        <>
            <style>
                {r#".theme-toggle {
                    position: fixed;
                    top: 1rem;
                    right: 1rem;
                    z-index: 50;
                    width: 2.75rem;
                    height: 2.75rem;
                    border: none;
                    border-radius: 9999px;
                    font-size: 1.25rem;
                    cursor: pointer;
                    color: inherit;
                    background: rgba(148, 163, 184, 0.2);
                    backdrop-filter: blur(4px);
                }
                body { margin: 0; }
                html.dark body { color: #fff; }"#}
            </style>
            <ThemeToggle is_dark={*is_dark} on_toggle={toggle_theme} />
            <Landing is_dark={*is_dark} on_book={open_modal} />
            if *modal_open {
                <BookModal is_open={true} on_close={close_modal} is_dark={*is_dark} />
            }
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
