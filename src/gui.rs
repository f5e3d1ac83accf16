//! Dioxus desktop shell: routes, header/footer chrome and theme.
use anyhow::Result;
use dioxus::prelude::*;

use crate::about::About;
use crate::contact::Contact;
use crate::home::Home;
use crate::lang;
use crate::types::Locale;

// Light flat theme CSS (design tokens, matches the original site's palette)
const GLOBAL_CSS: &str = r#":root {
    color-scheme: light;
    --color-bg: #eef2ff;
    --color-bg-accent: #eff6ff;
    --color-surface: #ffffff;
    --color-border: #e5e7eb;
    --color-text: #111827;
    --color-text-dim: #4b5563;
    --color-text-faint: #6b7280;
    --color-accent: #2563eb;
    --color-accent-hover: #1d4ed8;
    --color-accent-soft: #dbeafe;
    --color-ok: #15803d;
    --color-ok-soft: #dcfce7;
    --color-danger: #b91c1c;
    --color-danger-soft: #fee2e2;
    --color-footer: #1f2937;
    --radius-sm: 6px;
    --radius-md: 8px;
    --radius-lg: 12px;
    --shadow-card: 0 1px 3px rgba(17,24,39,0.1), 0 1px 2px rgba(17,24,39,0.06);
    --transition: .16s cubic-bezier(.4,0,.2,1);
}
html,body { margin:0; background:linear-gradient(135deg,var(--color-bg-accent),var(--color-bg)); color:var(--color-text); font-family:'Inter','Vazirmatn','Segoe UI',Tahoma,Arial,sans-serif; -webkit-font-smoothing:antialiased; }
body,div,span,label,input,textarea,button { box-sizing:border-box; }
.app-shell { min-height:100vh; display:flex; flex-direction:column; }
.site-header { background:var(--color-surface); box-shadow:var(--shadow-card); position:sticky; top:0; z-index:10; }
.nav { max-width:1100px; margin:0 auto; padding:0 24px; height:64px; display:flex; align-items:center; justify-content:space-between; gap:16px; }
.brand { font-size:22px; font-weight:700; color:var(--color-accent); text-decoration:none; }
.brand.light { color:#ffffff; }
.nav-links { display:flex; align-items:center; gap:4px; }
.nav-link { color:var(--color-text-dim); text-decoration:none; font-size:14px; font-weight:500; padding:8px 12px; border-radius:var(--radius-sm); transition:var(--transition); }
.nav-link:hover { color:var(--color-accent); }
.nav-link.active { color:var(--color-accent); background:var(--color-accent-soft); }
.lang-toggle { background:var(--color-accent); color:#fff; border:none; border-radius:var(--radius-sm); padding:6px 14px; font-size:13px; font-weight:500; font-family:inherit; cursor:pointer; transition:var(--transition); }
.lang-toggle:hover { background:var(--color-accent-hover); }
.page { flex:1; width:100%; max-width:1100px; margin:0 auto; padding:48px 24px; }
.page-narrow { max-width:860px; }
.page-head { text-align:center; margin-bottom:48px; }
.page-head h1 { font-size:36px; margin:0 0 12px 0; }
.page-head p { font-size:17px; color:var(--color-text-dim); margin:0; }
.hero { text-align:center; padding:32px 0 16px 0; }
.hero h1 { font-size:44px; margin:0 0 20px 0; }
.hero-subtitle { font-size:19px; color:var(--color-text-dim); max-width:720px; margin:0 auto 32px auto; line-height:1.6; }
.hero-actions { display:flex; justify-content:center; gap:14px; flex-wrap:wrap; }
.btn { display:inline-flex; align-items:center; justify-content:center; border-radius:var(--radius-md); padding:12px 30px; font-size:16px; font-weight:600; font-family:inherit; cursor:pointer; text-decoration:none; transition:var(--transition); border:1px solid transparent; }
.btn-primary { background:var(--color-accent); color:#fff; }
.btn-primary:hover { background:var(--color-accent-hover); }
.btn-primary:disabled { opacity:.55; cursor:not-allowed; }
.btn-outline { background:transparent; color:var(--color-accent); border-color:var(--color-accent); }
.btn-outline:hover { background:var(--color-accent-soft); }
.btn-block { width:100%; }
.section { margin-top:72px; }
.section-head { text-align:center; margin-bottom:40px; }
.section-head h2 { font-size:28px; margin:0 0 8px 0; }
.section-head p { font-size:16px; color:var(--color-text-dim); margin:0; }
.card { background:var(--color-surface); border-radius:var(--radius-lg); box-shadow:var(--shadow-card); padding:28px; }
.card-grid { display:grid; grid-template-columns:repeat(auto-fit,minmax(240px,1fr)); gap:24px; }
.card h3 { font-size:19px; margin:14px 0 8px 0; }
.card p { color:var(--color-text-dim); margin:0; line-height:1.6; }
.card-title { font-size:22px; margin:0 0 18px 0; }
.card-icon { width:48px; height:48px; border-radius:var(--radius-md); display:flex; align-items:center; justify-content:center; font-size:22px; }
.feature-grid { display:grid; grid-template-columns:repeat(auto-fit,minmax(200px,1fr)); gap:28px; text-align:center; }
.feature-icon { width:60px; height:60px; border-radius:50%; display:flex; align-items:center; justify-content:center; font-size:26px; margin:0 auto 14px auto; }
.feature h3 { font-size:17px; margin:0 0 6px 0; }
.feature p { color:var(--color-text-dim); font-size:14px; margin:0; line-height:1.6; }
.icon-blue { background:var(--color-accent-soft); }
.icon-green { background:#dcfce7; }
.icon-purple { background:#ede9fe; }
.icon-yellow { background:#fef9c3; }
.about-lead { font-size:17px; color:var(--color-text-dim); line-height:1.7; margin:0 0 32px 0; }
.about-grid { display:grid; grid-template-columns:repeat(auto-fit,minmax(280px,1fr)); gap:24px; }
.about-cta { text-align:center; margin-top:40px; }
.tile { border-radius:var(--radius-lg); padding:24px; }
.tile h2 { font-size:21px; margin:0 0 10px 0; }
.tile p { margin:0; line-height:1.7; }
.tile-blue { background:var(--color-accent-soft); }
.tile-blue h2, .tile-blue p { color:#1e3a8a; }
.tile-green { background:var(--color-ok-soft); }
.tile-green h2, .tile-green p { color:#14532d; }
.contact-grid { display:grid; grid-template-columns:repeat(auto-fit,minmax(320px,1fr)); gap:36px; align-items:start; }
.contact-side { display:flex; flex-direction:column; gap:28px; }
.field-label { display:block; font-size:14px; font-weight:500; color:var(--color-text-dim); margin:16px 0 6px 0; }
.field-label:first-child { margin-top:0; }
.field { width:100%; background:var(--color-surface); color:var(--color-text); border:1px solid var(--color-border); border-radius:var(--radius-sm); padding:10px 12px; font-size:14px; font-family:inherit; line-height:1.4; transition:var(--transition); resize:vertical; }
.field:focus { outline:none; border-color:var(--color-accent); box-shadow:0 0 0 2px rgba(37,99,235,0.25); }
.form-card .btn { margin-top:22px; }
.form-error { margin-top:16px; background:var(--color-danger-soft); color:var(--color-danger); border-radius:var(--radius-sm); padding:10px 12px; font-size:14px; }
.form-ok { margin-top:16px; background:var(--color-ok-soft); color:var(--color-ok); border-radius:var(--radius-sm); padding:10px 12px; font-size:14px; }
.info-row { display:flex; align-items:center; gap:14px; margin-top:18px; }
.info-row:first-of-type { margin-top:0; }
.info-icon { width:40px; height:40px; border-radius:var(--radius-md); display:flex; align-items:center; justify-content:center; font-size:18px; flex-shrink:0; }
.info-label { font-weight:600; margin:0; }
.info-value { color:var(--color-text-dim); margin:2px 0 0 0; font-size:14px; }
.gradient-card { background:linear-gradient(120deg,#3b82f6,#7c3aed); border-radius:var(--radius-lg); box-shadow:var(--shadow-card); padding:28px; color:#fff; }
.gradient-card h3 { font-size:19px; margin:0 0 10px 0; }
.gradient-card p { margin:0 0 10px 0; line-height:1.6; }
.gradient-card .muted { font-size:13px; opacity:.9; margin:0; }
.site-footer { background:var(--color-footer); color:#fff; margin-top:80px; }
.footer-grid { max-width:1100px; margin:0 auto; padding:48px 24px 0 24px; display:grid; grid-template-columns:2fr 1fr 1fr; gap:32px; }
.footer-brand p { color:#d1d5db; margin:14px 0 0 0; line-height:1.6; }
.footer-col h3 { font-size:16px; margin:0 0 14px 0; }
.footer-col ul { list-style:none; margin:0; padding:0; display:flex; flex-direction:column; gap:8px; }
.footer-col a { color:#d1d5db; text-decoration:none; transition:var(--transition); }
.footer-col a:hover { color:#fff; }
.footer-col p { color:#d1d5db; margin:0; }
.footer-bottom { max-width:1100px; margin:32px auto 0 auto; padding:24px; border-top:1px solid #374151; text-align:center; }
.footer-bottom p { color:#d1d5db; margin:0; font-size:14px; }
@media (max-width:720px) { .footer-grid { grid-template-columns:1fr; } .nav-links { display:none; } .hero h1 { font-size:32px; } }
"#;

/// Application routes. Every route carries the locale selector as a query
/// value, so switching language is an ordinary navigation and the whole
/// page re-renders under the new locale at once.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[layout(Shell)]
    #[route("/?:lang")]
    Home { lang: String },
    #[route("/about?:lang")]
    About { lang: String },
    #[route("/contact?:lang")]
    Contact { lang: String },
}

impl Route {
    /// Raw locale selector carried by the route. May be empty or unsupported.
    pub fn lang(&self) -> &str {
        match self {
            Route::Home { lang } | Route::About { lang } | Route::Contact { lang } => lang,
        }
    }

    /// Active locale for this route, after default fallback.
    pub fn locale(&self) -> Locale {
        lang::resolve_locale(self.lang())
    }

    /// The same route re-addressed under another locale.
    pub fn with_lang(&self, locale: Locale) -> Route {
        let lang = locale.code().to_string();
        match self {
            Route::Home { .. } => Route::Home { lang },
            Route::About { .. } => Route::About { lang },
            Route::Contact { .. } => Route::Contact { lang },
        }
    }

    /// Translation key for this route's window title.
    pub fn title_key(&self) -> &'static str {
        match self {
            Route::Home { .. } => "site.title",
            Route::About { .. } => "about.title",
            Route::Contact { .. } => "contact.title",
        }
    }
}

/// Launch the desktop application.
pub fn run() -> Result<()> {
    dioxus_desktop::launch::launch(
        app,
        vec![],
        vec![Box::new(dioxus_desktop::Config::default())],
    );
}

/// Root component: theme plus the router.
fn app() -> Element {
    rsx! {
        style { {GLOBAL_CSS} }
        Router::<Route> {}
    }
}

/// Shared page chrome: header with navigation and the language toggle, the
/// routed content region, and the footer. Text direction follows the locale.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();
    let locale = route.locale();
    let tr = move |k: &str| lang::tr(locale, k);
    let navigator = use_navigator();

    // Window title follows route and locale (the original site's per-page <title>).
    let window = dioxus_desktop::use_window();
    let title = tr(route.title_key());
    if window.title() != title {
        window.set_title(&title);
    }

    let home_class = if matches!(route, Route::Home { .. }) { "nav-link active" } else { "nav-link" };
    let about_class = if matches!(route, Route::About { .. }) { "nav-link active" } else { "nav-link" };
    let contact_class = if matches!(route, Route::Contact { .. }) { "nav-link active" } else { "nav-link" };

    // The toggle is labelled with the other language's native name.
    let toggle_label = lang::display_name(locale.toggle());
    let switch_to = route.with_lang(locale.toggle());

    rsx! {
        div { class: "app-shell", dir: locale.direction().attr(),
            header { class: "site-header",
                nav { class: "nav",
                    Link { class: "brand", to: Route::Home { lang: locale.code().into() }, "StudyPay" }
                    div { class: "nav-links",
                        Link { class: home_class, to: Route::Home { lang: locale.code().into() }, {tr("nav.home")} }
                        Link { class: about_class, to: Route::About { lang: locale.code().into() }, {tr("nav.about")} }
                        Link { class: contact_class, to: Route::Contact { lang: locale.code().into() }, {tr("nav.contact")} }
                    }
                    button {
                        class: "lang-toggle",
                        onclick: move |_| { navigator.push(switch_to.clone()); },
                        "{toggle_label}"
                    }
                }
            }
            Outlet::<Route> {}
            footer { class: "site-footer",
                div { class: "footer-grid",
                    div { class: "footer-brand",
                        Link { class: "brand light", to: Route::Home { lang: locale.code().into() }, "StudyPay" }
                        p { {tr("footer.description")} }
                    }
                    div { class: "footer-col",
                        h3 { {tr("nav.services")} }
                        ul {
                            li { Link { to: Route::About { lang: locale.code().into() }, {tr("footer.links.about")} } }
                            li { Link { to: Route::Contact { lang: locale.code().into() }, {tr("footer.links.contact")} } }
                        }
                    }
                    div { class: "footer-col",
                        h3 { {tr("contact.info.telegram.label")} }
                        p { {tr("contact.info.email.value")} }
                    }
                }
                div { class: "footer-bottom",
                    p { { format!("© 2024 StudyPay. {}", tr("footer.copyright")) } }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn routes() -> Vec<Route> {
        vec![
            Route::Home { lang: "fa".into() },
            Route::About { lang: "fa".into() },
            Route::Contact { lang: "fa".into() },
        ]
    }

    #[test]
    fn with_lang_preserves_the_route() {
        let about = Route::About { lang: "fa".into() };
        assert_eq!(about.with_lang(Locale::En), Route::About { lang: "en".into() });
        assert_eq!(about.with_lang(Locale::En).locale(), Locale::En);
    }

    #[test]
    fn switch_is_a_round_trip() {
        for route in routes() {
            let locale = route.locale();
            let there = route.with_lang(locale.toggle());
            let back = there.with_lang(there.locale().toggle());
            assert_eq!(back, route);
        }
    }

    #[test]
    fn unsupported_selector_falls_back() {
        let route = Route::Home { lang: "de".into() };
        assert_eq!(route.locale(), Locale::DEFAULT);
        assert_eq!(Route::Home { lang: String::new() }.locale(), Locale::DEFAULT);
    }

    #[test]
    fn titles_exist_for_all_locales() {
        for route in routes() {
            for &locale in Locale::ALL {
                assert!(lang::resolve(locale, route.title_key()).is_ok());
            }
        }
    }
}
