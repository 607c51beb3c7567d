use yew::prelude::*;

/// Deposit per 0.5 l returnable bottle, in euro cents.
pub const BOTTLE_DEPOSIT_CENTS: u32 = 8;
pub const BOTTLES_PER_CRATE: u32 = 6;

#[derive(Debug, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub style: &'static str,
    pub tagline: &'static str,
    pub abv: &'static str,
    pub ibu: u32,
    pub hops: &'static str,
    pub bottle_cents: u32,
    pub six_pack_cents: u32,
    pub delivery: &'static str,
    pub notes: &'static [&'static str],
}

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Pils mit Stil",
        style: "Pils",
        tagline: "Knackig herb, feine Bittere, klarer Ausklang.",
        abv: "4,9",
        ibu: 28,
        hops: "Hallertauer",
        bottle_cents: 220,
        six_pack_cents: 1190,
        delivery: "2–4 Werktage (DE)",
        notes: &[
            "Wasser, Gerstenmalz, Hopfen, Hefe • Enthält Gluten",
            "Abgabe nur an Volljährige • kühl & dunkel lagern",
        ],
    },
    Product {
        name: "Kellerkönig",
        style: "Kellerpils",
        tagline: "Naturtrüb, samtig und hopfig-frisch.",
        abv: "5,0",
        ibu: 26,
        hops: "Spalter/Saphir",
        bottle_cents: 240,
        six_pack_cents: 1290,
        delivery: "3–5 Werktage (DE)",
        notes: &[
            "Wasser, Gerstenmalz, Hopfen, Hefe • Enthält Gluten",
            "Unfiltriert • vor dem Öffnen nicht schütteln",
        ],
    },
    Product {
        name: "Wolkenweizen",
        style: "Hefeweizen",
        tagline: "Banane & Nelke in Balance, cremige Perlage.",
        abv: "5,3",
        ibu: 14,
        hops: "Weizenmalz hell",
        bottle_cents: 230,
        six_pack_cents: 1250,
        delivery: "2–4 Werktage (DE)",
        notes: &[
            "Wasser, Weizenmalz, Gerstenmalz, Hopfen, Hefe • Enthält Gluten",
            "Hefe-Sediment natürlich • leicht aufschwenken",
        ],
    },
    Product {
        name: "Goldlicht",
        style: "Helles",
        tagline: "Feinmalzig, mild und süffig – Münchner Stil.",
        abv: "4,8",
        ibu: 18,
        hops: "Tradition/Hersbrucker",
        bottle_cents: 220,
        six_pack_cents: 1190,
        delivery: "2–3 Werktage (DE)",
        notes: &[
            "Wasser, Gerstenmalz, Hopfen, Hefe • Enthält Gluten",
            "Vor Licht schützen • 6–9 °C genießen",
        ],
    },
];

const SHIPPING_RATES: &[(&str, &str, &str)] = &[
    ("DHL Paket (DE)", "2–4 Werktage", "5,90 €"),
    ("DHL Express (DE)", "1–2 Werktage", "12,90 €"),
    ("Ab 49 € Warenwert", "Standard", "Versandkostenfrei"),
];

/// German price notation, e.g. `2,20 €`.
pub fn format_euro(cents: u32) -> String {
    format!("{},{:02} €", cents / 100, cents % 100)
}

fn product_card(product: &Product) -> Html {
    html! {
        <div class="card" key={product.name}>
            <h3>{ format!("„{}“ – {}", product.name, product.style) }</h3>
            <p>{ product.tagline }</p>
            <p>
                <span class="pill">{ format!("{} % vol", product.abv) }</span>
                <span class="pill">{ format!("IBU {}", product.ibu) }</span>
                <span class="pill">{ product.hops }</span>
            </p>
            <p>
                <b>{"Preis:"}</b>
                { format!(
                    " {} / 0,5 l • {} / 6er \u{a0}|\u{a0} zzgl. Pfand {} je Flasche",
                    format_euro(product.bottle_cents),
                    format_euro(product.six_pack_cents),
                    format_euro(BOTTLE_DEPOSIT_CENTS),
                ) }
            </p>
            <p><b>{"Lieferzeit:"}</b>{ format!(" {}", product.delivery) }</p>
            <details>
                <summary>{"Produktsicherheit & Zutaten"}</summary>
                <ul class="list-legal">
                    { for product.notes.iter().map(|note| html! { <li>{ *note }</li> }) }
                </ul>
            </details>
            // No ordering yet; the button only marks the spot.
            <button class="btn primary" disabled=true>{"In Entwicklung"}</button>
        </div>
    }
}

#[function_component(Catalog)]
pub fn catalog() -> Html {
    html! {
        <section id="shop" aria-labelledby="h-shop">
            <h2 id="h-shop">{"Sortiment"}</h2>
            <p>{"Vier Sorten, vier Charaktere. Jeweils in der 0,5-l-Mehrwegflasche und als 6er-Träger."}</p>
            <div class="grid">
                { for PRODUCTS.iter().map(product_card) }
            </div>
        </section>
    }
}

#[function_component(Shipping)]
pub fn shipping() -> Html {
    html! {
        <section id="shipping" aria-labelledby="h-ship">
            <h2 id="h-ship">{"Versand & Lieferbedingungen"}</h2>
            <div class="grid">
                <div class="card">
                    <h3>{"Versandarten & Kosten"}</h3>
                    <table>
                        <tbody>
                            <tr>
                                <th>{"Art"}</th>
                                <th>{"Lieferzeit"}</th>
                                <th>{"Preis"}</th>
                            </tr>
                            { for SHIPPING_RATES.iter().map(|(method, time, price)| html! {
                                <tr>
                                    <td>{ *method }</td>
                                    <td>{ *time }</td>
                                    <td>{ *price }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                    <p class="muted">
                        {"Lieferung nur innerhalb Deutschlands. Jugendschutz: Altersprüfung bei Zustellung."}
                    </p>
                </div>
                <div class="card">
                    <h3>{"Pfand & Rückgabe"}</h3>
                    <p>
                        { format!(
                            "Mehrweg-Pfand: {} je 0,5-l-Flasche ({} pro 6er). Rückgabe deutschlandweit in teilnehmenden Märkten.",
                            format_euro(BOTTLE_DEPOSIT_CENTS),
                            format_euro(BOTTLE_DEPOSIT_CENTS * BOTTLES_PER_CRATE),
                        ) }
                    </p>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_use_german_notation() {
        assert_eq!(format_euro(220), "2,20 €");
        assert_eq!(format_euro(1290), "12,90 €");
        assert_eq!(format_euro(8), "0,08 €");
    }

    #[test]
    fn crate_deposit_matches_six_bottles() {
        assert_eq!(format_euro(BOTTLE_DEPOSIT_CENTS * BOTTLES_PER_CRATE), "0,48 €");
    }

    #[test]
    fn six_packs_are_cheaper_than_six_bottles() {
        for product in PRODUCTS {
            assert!(product.six_pack_cents < product.bottle_cents * BOTTLES_PER_CRATE, "{}", product.name);
        }
    }
}
