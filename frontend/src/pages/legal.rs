use yew::prelude::*;

use crate::consent::{use_consent, ConsentAction};

const TERMS: &[(&str, &str)] = &[
    ("Geltungsbereich:", "Bestellungen auf goldenegerste.de."),
    ("Vertragspartner:", "Goldene Gerste GmbH, Reinsburgstraße 123, 70197 Stuttgart."),
    ("Vertragsschluss:", "Darstellung = kein Angebot; Annahme durch Bestätigung."),
    ("Preise:", "EUR inkl. USt, zzgl. Versand, zzgl. Mehrweg-Pfand."),
    ("Zahlung:", "Vorkasse/Karte/Pay-Dienst."),
    ("Lieferung:", "Nur DE; Zeiten siehe Produktseite."),
    ("Jugendschutz:", "Abgabe nur an Volljährige."),
    ("Gewährleistung:", "Gesetzliche Mängelrechte."),
    ("Haftung:", "Für Vorsatz/grobe Fahrlässigkeit unbegrenzt; im Übrigen nach Gesetz."),
    ("Streitbeilegung:", "Keine Teilnahme an Verbraucherschlichtung."),
];

const WITHDRAWAL_FORM: &str = "An: Goldene Gerste GmbH, Reinsburgstraße 123, 70197 Stuttgart, hallo@goldenegerste.de
Hiermit widerrufe(n) ich/wir den Vertrag über den Kauf der folgenden Waren:
Bestellt am: … / erhalten am: …
Name des/der Verbraucher(s): …
Anschrift des/der Verbraucher(s): …
Datum, Unterschrift (nur bei Papier)";

#[function_component(Terms)]
pub fn terms() -> Html {
    html! {
        <section id="agb" aria-labelledby="h-agb">
            <h2 id="h-agb">{"AGB – Kurzfassung"}</h2>
            <ol>
                { for TERMS.iter().map(|(title, text)| html! {
                    <li><b>{ *title }</b>{ format!(" {}", text) }</li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(Withdrawal)]
pub fn withdrawal() -> Html {
    html! {
        <section id="widerruf" aria-labelledby="h-wid">
            <h2 id="h-wid">{"Widerrufsbelehrung"}</h2>
            <p>
                {"Verbraucher können binnen 14 Tagen ohne Angabe von Gründen widerrufen. Fristbeginn mit Erhalt der Ware. \
                  Rücksendekosten trägt der Verbraucher. Ausgenommen sind versiegelte Waren, wenn die Versiegelung entfernt wurde."}
            </p>
            <details>
                <summary>{"Muster-Widerrufsformular"}</summary>
                <pre style="white-space: pre-wrap;">{ WITHDRAWAL_FORM }</pre>
            </details>
        </section>
    }
}

#[function_component(Imprint)]
pub fn imprint() -> Html {
    html! {
        <section id="impressum" aria-labelledby="h-imp">
            <h2 id="h-imp">{"Impressum (§ 5 DDG)"}</h2>
            <div class="grid">
                <div class="card">
                    <p>
                        <b>{"Goldene Gerste GmbH"}</b><br />
                        {"Reinsburgstraße 123, 70197 Stuttgart"}<br />
                        {"Tel.: +49 (0)711 123456-0 • E-Mail: hallo@goldenegerste.de"}<br />
                        {"Geschäftsführer: Jan Ramstetter, Anton von Forstner"}<br />
                        {"Registergericht: Amtsgericht Stuttgart, HRB 999999 • USt-IdNr.: DE999999999"}<br />
                        {"Verantwortlich i.S.d. § 18 Abs. 2 MStV: Jan Ramstetter (Anschrift wie oben)"}
                    </p>
                </div>
                <div class="card">
                    <h3>{"Erreichbarkeit & Kennzeichnung"}</h3>
                    <ul class="list-legal">
                        <li>{"Impressum jederzeit leicht erkennbar & unmittelbar erreichbar verlinkt."}</li>
                        <li>{"Herkunftslandprinzip: maßgeblich ist der Niederlassungsort (Deutschland)."}</li>
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[function_component(PrivacyNotice)]
pub fn privacy_notice() -> Html {
    html! {
        <section id="datenschutz" aria-labelledby="h-ds">
            <h2 id="h-ds">{"Datenschutzerklärung – Kurzfassung"}</h2>
            <div class="grid">
                <div class="card">
                    <h3>{"Verantwortlicher & Zwecke"}</h3>
                    <ul>
                        <li><b>{"Verantwortlicher:"}</b>{" Goldene Gerste GmbH (Adresse s. Impressum)"}</li>
                        <li>
                            <b>{"Zwecke:"}</b>
                            {" Betrieb der Website, Beantwortung von Anfragen; optionale Statistik/Marketing nur mit Einwilligung."}
                        </li>
                        <li><b>{"Rechtsgrundlagen:"}</b>{" Art. 6 Abs. 1 lit. b, f und a DSGVO."}</li>
                    </ul>
                </div>
                <div class="card">
                    <h3>{"Betroffenenrechte"}</h3>
                    <ul>
                        <li>{"Auskunft, Berichtigung, Löschung, Einschränkung, Datenübertragbarkeit (Art. 15–20 DSGVO)."}</li>
                        <li>{"Widerspruch (Art. 21) & Widerruf von Einwilligungen."}</li>
                        <li>{"Beschwerde bei einer Aufsichtsbehörde."}</li>
                    </ul>
                </div>
                <div class="card">
                    <h3>{"Auftragsverarbeitung"}</h3>
                    <p>{"Einsatz von Dienstleistern nur mit AVV; Drittlandübermittlungen nur mit geeigneten Garantien."}</p>
                </div>
            </div>
            <p class="muted">
                {"Diese Seite speichert Ihre Cookie-Entscheidung lokal ("}<code>{"localStorage"}</code>{")."}
            </p>
        </section>
    }
}

/// The standalone consent entry point: current status plus the buttons to
/// change or forget the decision.
#[function_component(CookieSettings)]
pub fn cookie_settings() -> Html {
    let consent = use_consent();

    let dispatch = |action: ConsentAction| {
        let consent = consent.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(consent) = &consent {
                consent.dispatch(action);
            }
        })
    };

    let status = consent
        .as_ref()
        .map_or_else(|| "–".to_string(), |c| c.label().to_string());

    html! {
        <section id="cookies" aria-labelledby="h-cookie">
            <h2 id="h-cookie">{"Cookies & Endgeräte-Speicherung (§ 25 TDDDG)"}</h2>
            <p>
                {"Optionale Kategorien (Statistik/Marketing) werden erst nach Einwilligung geladen. \
                  „Alle akzeptieren“ und „Alle ablehnen“ sind gleichwertig. Sie können Ihre Auswahl hier jederzeit ändern."}
            </p>
            <div class="card">
                <h3>{"Ihre Auswahl"}</h3>
                <p>{"Status: "}<span class="pill">{ status }</span></p>
                <button class="btn primary" onclick={dispatch(ConsentAction::OpenPreferences)}>
                    {"Cookie-Einstellungen öffnen"}
                </button>
                <button class="btn ghost" onclick={dispatch(ConsentAction::Reset)}>
                    {"Auswahl zurücksetzen"}
                </button>
            </div>
        </section>
    }
}
