//! About page: company story, mission and vision.
use dioxus::prelude::*;

use crate::gui::Route;
use crate::lang;

#[component]
pub fn About(lang: String) -> Element {
    let locale = lang::resolve_locale(&lang);
    let tr = move |k: &str| lang::tr(locale, k);

    rsx! {
        main { class: "page page-narrow",
            div { class: "card",
                h1 { {tr("about.title")} }
                p { class: "about-lead", {tr("about.description")} }
                div { class: "about-grid",
                    div { class: "tile tile-blue",
                        h2 { {tr("about.mission.title")} }
                        p { {tr("about.mission.description")} }
                    }
                    div { class: "tile tile-green",
                        h2 { {tr("about.vision.title")} }
                        p { {tr("about.vision.description")} }
                    }
                }
                div { class: "about-cta",
                    Link {
                        class: "btn btn-primary",
                        to: Route::Contact { lang: locale.code().into() },
                        {tr("nav.contact")}
                    }
                }
            }
        }
    }
}
