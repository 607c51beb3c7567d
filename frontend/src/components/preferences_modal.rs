use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::consent::{use_consent, Category, ConsentAction, Draft};

fn category_description(category: Category) -> &'static str {
    match category {
        Category::Statistics => "Anonyme Reichweitenmessung (wird erst nach Einwilligung aktiviert).",
        Category::Marketing => "Werbliche Funktionen (werden erst nach Einwilligung aktiviert).",
    }
}

#[function_component(PreferencesModal)]
pub fn preferences_modal() -> Html {
    let consent = use_consent();
    let Some(consent) = consent else {
        return html! {};
    };
    let draft = consent.view().draft();
    let shown = draft.unwrap_or_else(Draft::default);

    let on_toggle = |category: Category| {
        let consent = consent.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            consent.dispatch(ConsentAction::SetDraft(category, input.checked()));
        })
    };

    let on_cancel = {
        let consent = consent.clone();
        Callback::from(move |_: MouseEvent| consent.dispatch(ConsentAction::Cancel))
    };

    let on_save = {
        let consent = consent.clone();
        Callback::from(move |_: MouseEvent| consent.dispatch(ConsentAction::SavePreferences))
    };

    html! {
        <div class={classes!("modal", draft.is_some().then(|| "show"))}>
            <div class="box" role="dialog" aria-modal="true" aria-labelledby="h-cookie-prefs">
                <h3 id="h-cookie-prefs">{"Cookie-Einstellungen"}</h3>
                <p class="muted">
                    {"Einzelne Kategorien aktivieren. „Speichern“ setzt Ihre Auswahl (jederzeit änderbar)."}
                </p>
                <table>
                    <tbody>
                        <tr>
                            <th>{"Kategorie"}</th>
                            <th>{"Beschreibung"}</th>
                            <th>{"Status"}</th>
                        </tr>
                        <tr>
                            <td>{"Notwendig"}</td>
                            <td>{"Grundfunktionen (z. B. Einwilligungs-Speicher). Keine Abwahl möglich."}</td>
                            <td><span class="pill">{"immer aktiv"}</span></td>
                        </tr>
                        { for Category::ALL.iter().map(|&category| html! {
                            <tr key={category.display_name()}>
                                <td>{ category.display_name() }</td>
                                <td>{ category_description(category) }</td>
                                <td>
                                    <input
                                        type="checkbox"
                                        checked={shown.get(category)}
                                        onchange={on_toggle(category)}
                                    />
                                </td>
                            </tr>
                        }) }
                    </tbody>
                </table>
                <div style="display: flex; gap: 10px; justify-content: flex-end; margin-top: 12px;">
                    <button class="btn ghost" onclick={on_cancel}>{"Abbrechen"}</button>
                    <button class="btn primary" onclick={on_save}>{"Speichern"}</button>
                </div>
            </div>
        </div>
    }
}
