//! Home Page
//!
//! Static landing content explaining the product.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="pm-page">
            <header class="pm-header">
                <h1 class="pm-title">"PrijsMaatje 🛒"</h1>
                <p class="pm-subtitle">
                    "Vind automatisch de goedkoopste supermarkt voor jouw boodschappen."
                </p>
            </header>

            <section class="pm-section">
                <p class="pm-text">
                    "Met PrijsMaatje vul je één keer je boodschappenlijst in en zie je in een paar seconden:"
                </p>
                <ul class="pm-bullets">
                    <li>"welke supermarkt het goedkoopst is per product"</li>
                    <li>"wat je totaal betaalt per winkel"</li>
                    <li>"waar je het meest kunt besparen"</li>
                </ul>
                <div class="pm-cta-wrap">
                    <a class="pm-cta-btn" href="/vergelijken">
                        "➡️ Start met vergelijken"
                    </a>
                </div>
            </section>

            <div class="pm-sep"></div>

            <section class="pm-card">
                <h2 class="pm-h2">"🧾 Hoe werkt het?"</h2>
                <ol class="pm-steps">
                    <li>"Ga in het menu links naar Vergelijken."</li>
                    <li>"Kies de supermarkten die je wilt meenemen (bijv. AH, Jumbo, Dirk)."</li>
                    <li>"Vul je boodschappenlijst in, via de suggesties of eigen producten."</li>
                    <li>"Klik op \"Vergelijk prijzen\"."</li>
                    <li>"Bekijk de goedkoopste winkel per product en het totaalbedrag per winkel."</li>
                </ol>
                <p class="pm-caption">
                    "Tip: begin met 3 tot 5 producten die je vaak koopt en kijk hoeveel je zou besparen."
                </p>
            </section>

            <div class="pm-sep"></div>

            <section class="pm-card">
                <h2 class="pm-h2">"💡 Extra gemak met Premium"</h2>
                <ul class="pm-bullets">
                    <li>"wordt je vergelijkingsgeschiedenis bewaard (incl. kopiëren en hergebruik)"</li>
                    <li>"kun je vaste lijsten maken (bijv. Weekboodschappen / BBQ)"</li>
                    <li>"sla je vergelijkingen op en kijk ze later terug"</li>
                </ul>
                <p class="pm-hint">
                    "👉 Meer weten of even uitproberen? Ga in het menu naar 💎 Premium."
                </p>
            </section>
        </div>
    }
}
