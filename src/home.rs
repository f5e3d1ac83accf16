//! Landing page: hero, service cards, feature highlights.
use dioxus::prelude::*;

use crate::gui::Route;
use crate::lang;

#[component]
pub fn Home(lang: String) -> Element {
    let locale = lang::resolve_locale(&lang);
    let tr = move |k: &str| lang::tr(locale, k);

    rsx! {
        main { class: "page",
            section { class: "hero",
                h1 { {tr("home.hero.title")} }
                p { class: "hero-subtitle", {tr("home.hero.subtitle")} }
                div { class: "hero-actions",
                    button { class: "btn btn-primary", {tr("home.hero.cta")} }
                    Link {
                        class: "btn btn-outline",
                        to: Route::Contact { lang: locale.code().into() },
                        {tr("home.hero.cta_contact")}
                    }
                }
            }
            section { class: "section",
                div { class: "section-head",
                    h2 { {tr("home.services.title")} }
                    p { {tr("home.services.subtitle")} }
                }
                div { class: "card-grid",
                    div { class: "card",
                        div { class: "card-icon icon-blue", "💳" }
                        h3 { {tr("home.services.gift_cards.title")} }
                        p { {tr("home.services.gift_cards.description")} }
                    }
                    div { class: "card",
                        div { class: "card-icon icon-green", "🔁" }
                        h3 { {tr("home.services.subscriptions.title")} }
                        p { {tr("home.services.subscriptions.description")} }
                    }
                    div { class: "card",
                        div { class: "card-icon icon-purple", "🎓" }
                        h3 { {tr("home.services.university.title")} }
                        p { {tr("home.services.university.description")} }
                    }
                }
            }
            section { class: "section",
                div { class: "section-head",
                    h2 { {tr("home.features.title")} }
                }
                div { class: "feature-grid",
                    div { class: "feature",
                        div { class: "feature-icon icon-blue", "⚡" }
                        h3 { {tr("home.features.fast.title")} }
                        p { {tr("home.features.fast.description")} }
                    }
                    div { class: "feature",
                        div { class: "feature-icon icon-green", "🛡" }
                        h3 { {tr("home.features.secure.title")} }
                        p { {tr("home.features.secure.description")} }
                    }
                    div { class: "feature",
                        div { class: "feature-icon icon-purple", "🎧" }
                        h3 { {tr("home.features.support.title")} }
                        p { {tr("home.features.support.description")} }
                    }
                    div { class: "feature",
                        div { class: "feature-icon icon-yellow", "💰" }
                        h3 { {tr("home.features.prices.title")} }
                        p { {tr("home.features.prices.description")} }
                    }
                }
            }
        }
    }
}
