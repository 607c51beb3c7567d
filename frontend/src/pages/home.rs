use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::cookie_banner::CookieBanner;
use crate::components::preferences_modal::PreferencesModal;
use crate::components::site_header::SiteHeader;
use crate::pages::catalog::{Catalog, Shipping};
use crate::pages::legal::{CookieSettings, Imprint, PrivacyNotice, Terms, Withdrawal};

const PAGE_STYLE: &str = r#"
    :root {
        --gold: #d4a72c;
        --ink: #f5f1e6;
        --muted: #b8b0a0;
        --panel: rgba(30, 26, 18, 0.8);
    }
    body {
        margin: 0;
        background: #14110b;
        color: var(--ink);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        background: rgba(20, 17, 11, 0.92);
        backdrop-filter: blur(10px);
        transition: transform 0.3s ease;
    }
    header.hidden {
        transform: translateY(-100%);
    }
    .nav {
        display: flex;
        align-items: center;
        gap: 14px;
        padding: 12px 24px;
        flex-wrap: wrap;
    }
    .nav nav a {
        color: var(--muted);
        text-decoration: none;
        margin-right: 12px;
    }
    .nav nav a.active {
        color: var(--gold);
    }
    .logo-small {
        width: 44px;
        height: 44px;
        border-radius: 50%;
        object-fit: cover;
    }
    .logo-large {
        width: 160px;
        height: 160px;
        margin: 12px 0;
        border-radius: 50%;
        object-fit: cover;
    }
    main {
        padding: 80px 24px 24px;
        max-width: 1100px;
        margin: 0 auto;
    }
    section {
        padding: 32px 0;
    }
    .hero, .grid {
        display: grid;
        gap: 16px;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    }
    .card {
        background: var(--panel);
        border: 1px solid rgba(212, 167, 44, 0.15);
        border-radius: 12px;
        padding: 18px;
    }
    .pill {
        display: inline-block;
        padding: 2px 10px;
        margin-right: 6px;
        border-radius: 999px;
        border: 1px solid var(--gold);
        font-size: 0.85rem;
    }
    .muted {
        color: var(--muted);
    }
    .btn {
        border-radius: 8px;
        padding: 8px 16px;
        margin-right: 8px;
        cursor: pointer;
        text-decoration: none;
        display: inline-block;
    }
    .btn.primary {
        background: var(--gold);
        color: #14110b;
        border: none;
    }
    .btn.ghost {
        background: transparent;
        color: var(--ink);
        border: 1px solid var(--muted);
    }
    .btn:disabled {
        opacity: 0.5;
        cursor: not-allowed;
    }
    .cookie {
        display: none;
        position: fixed;
        left: 16px;
        right: 16px;
        bottom: 16px;
        z-index: 60;
        gap: 16px;
        padding: 16px;
        border-radius: 12px;
        background: var(--panel);
        border: 1px solid var(--gold);
    }
    .cookie.show {
        display: flex;
        flex-wrap: wrap;
        justify-content: space-between;
    }
    .modal {
        display: none;
        position: fixed;
        inset: 0;
        z-index: 70;
        background: rgba(0, 0, 0, 0.6);
        align-items: center;
        justify-content: center;
    }
    .modal.show {
        display: flex;
    }
    .modal .box {
        background: #1e1a12;
        border-radius: 12px;
        padding: 24px;
        max-width: 640px;
    }
    .form-group {
        display: flex;
        flex-direction: column;
        margin-bottom: 12px;
    }
    .form-feedback {
        color: var(--gold);
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <style>{ PAGE_STYLE }</style>
            <SiteHeader />
            <main>
                <section id="home" aria-labelledby="h-home">
                    <h1 id="h-home">{"Goldene Gerste – Bier mit Charakter"}</h1>
                    <p class="lead">
                        {"Handwerklich gebraut in Stuttgart – klare Rezepte, ehrliche Zutaten und ein Einkaufserlebnis ohne Schnickschnack. "}
                        <span class="pill">{"ab 18"}</span>
                    </p>
                    <div class="hero">
                        <div>
                            <img src="/images/goldene-gerste-logo.png" alt="Goldene Gerste Logo" class="logo-large" />
                            <p class="muted" style="margin: 6px 0 14px;">
                                {"Transparenz bei Zutaten und Informationen, keine Dark Patterns – Humor bei den Namen, Ernst bei der Qualität."}
                            </p>
                            <div style="display: flex; gap: 10px; flex-wrap: wrap;">
                                <a class="btn primary" href="#shop">{"Zum Sortiment"}</a>
                                <a class="btn ghost" href="#about">{"Unsere Story"}</a>
                            </div>
                        </div>
                        <div class="card">
                            <h3>{"Werte & Versprechen"}</h3>
                            <ul class="list-legal">
                                <li>{"Regionale Rohstoffe, klare Zutatenlisten."}</li>
                                <li>{"Faire Kommunikation, transparente Pflichtangaben."}</li>
                                <li>{"Schonender Umgang mit Ressourcen."}</li>
                            </ul>
                        </div>
                    </div>
                </section>

                <Catalog />
                <Shipping />

                <section id="blog" aria-labelledby="h-blog">
                    <h2 id="h-blog">{"Blog – Brautipps & Wissen"}</h2>
                    <div class="grid">
                        <div class="card">
                            <h3>{"Hopfengabe in 3 Akten"}</h3>
                            <p>{"Vorderwürze → Whirlpool → Kalthopfung. Kleine Mengen, große Wirkung."}</p>
                        </div>
                        <div class="card">
                            <h3>{"Wasserprofil kompakt"}</h3>
                            <p>{"Weiches Wasser liebt Helles & Weizen; fürs Pils darf's härter sein."}</p>
                        </div>
                        <div class="card">
                            <h3>{"Hygiene ≠ optional"}</h3>
                            <p>{"Sauberkeit schlägt Rezept – Grundlage für konstante Qualität."}</p>
                        </div>
                    </div>
                </section>

                <section id="about" aria-labelledby="h-about">
                    <h2 id="h-about">{"Über uns"}</h2>
                    <div class="grid">
                        <div class="card">
                            <h3>{"Die Gründung"}</h3>
                            <p>
                                <b>{"Jan Ramstetter"}</b>{" & "}<b>{"Anton von Forstner"}</b>
                                {": Freunde, die Bier mögen – und Transparenz noch mehr. Aus der ersten Garagensudelei wurde „Goldene Gerste“."}
                            </p>
                        </div>
                        <div class="card">
                            <h3>{"Warenproben & Tastings"}</h3>
                            <p>
                                {"Für Gastronomie & Handel bieten wir Musterkisten und kleine Tastings an. "}
                                <a href="#kontakt">{"Kontakt"}</a>{"."}
                            </p>
                        </div>
                    </div>
                </section>

                <Terms />
                <Withdrawal />
                <Imprint />
                <PrivacyNotice />
                <CookieSettings />

                <section id="kontakt" aria-labelledby="h-kontakt">
                    <h2 id="h-kontakt">{"Kontakt"}</h2>
                    <div class="card">
                        <p>
                            <b>{"E-Mail:"}</b>{" hallo@goldenegerste.de • "}
                            <b>{"Telefon:"}</b>{" +49 (0)711 123456-0"}
                        </p>
                        <ContactForm />
                    </div>
                </section>
            </main>

            <footer>
                <p>{"© 2025 Goldene Gerste GmbH. Alle Rechte vorbehalten."}</p>
                <p class="muted">
                    {"UWG-Hinweis: Keine unerbetene Telefonwerbung. Werbliche E-Mails nur nach vorheriger Einwilligung."}
                </p>
            </footer>

            <CookieBanner />
            <PreferencesModal />
        </>
    }
}
