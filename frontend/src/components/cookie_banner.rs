use yew::prelude::*;

use crate::consent::{use_consent, ConsentAction};

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let consent = use_consent();
    let Some(consent) = consent else {
        return html! {};
    };

    let on_action = |action: ConsentAction| {
        let consent = consent.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            consent.dispatch(action);
        })
    };

    html! {
        <div
            class={classes!("cookie", consent.view().banner_visible().then(|| "show"))}
            role="dialog"
            aria-live="polite"
            aria-label="Cookie-Hinweis"
        >
            <div>
                <p>
                    <b>{"Cookies & optionale Dienste"}</b>
                    {" – Wir verwenden technisch notwendige Cookies und, nach Ihrer Wahl, optionale Dienste (Statistik/Marketing). Details: "}
                    <a href="#cookies">{"Cookie-Infos"}</a>{"."}
                </p>
                <p class="muted">
                    {"Rechtsgrundlage für nicht notwendige Cookies: Einwilligung (§ 25 TDDDG, Art. 6 Abs. 1 lit. a DSGVO)."}
                </p>
            </div>
            <div class="actions">
                <button class="btn ghost" onclick={on_action(ConsentAction::DenyAll)}>
                    {"Alle ablehnen"}
                </button>
                <button class="btn ghost" onclick={on_action(ConsentAction::OpenPreferences)}>
                    {"Einstellungen"}
                </button>
                <button class="btn primary" onclick={on_action(ConsentAction::AcceptAll)}>
                    {"Alle akzeptieren"}
                </button>
            </div>
        </div>
    }
}
