use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod consent;
mod components {
    pub mod contact_form;
    pub mod cookie_banner;
    pub mod preferences_modal;
    pub mod site_header;
}
mod pages {
    pub mod catalog;
    pub mod home;
    pub mod legal;
    pub mod not_found;
}

use consent::ConsentProvider;
use pages::{
    home::Home,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    // The consent state lives above the router so the banner decision
    // survives route changes.
    html! {
        <ConsentProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ConsentProvider>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
