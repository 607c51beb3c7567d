use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main style="padding: 120px 24px; text-align: center;">
            <h1>{"Seite nicht gefunden"}</h1>
            <p class="muted">{"Diese Adresse gibt es bei uns nicht."}</p>
            <Link<Route> to={Route::Home} classes="btn primary">
                {"Zur Startseite"}
            </Link<Route>>
        </main>
    }
}
