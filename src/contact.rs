//! Contact page: localized form over the stubbed submission boundary.
use dioxus::prelude::*;

use crate::lang;
use crate::submit::{self, ContactDraft};

/// Form lifecycle as the user sees it. Any edit returns to `Editing`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum FormStatus {
    Editing,
    Sending,
    Sent,
    Failed(&'static str),
}

#[component]
pub fn Contact(lang: String) -> Element {
    let locale = lang::resolve_locale(&lang);
    let tr = move |k: &str| lang::tr(locale, k);

    // Draft state is owned by this page instance; navigating away drops it.
    let mut draft = use_signal(ContactDraft::default);
    let mut status = use_signal(|| FormStatus::Editing);

    let mut edited = move || {
        if *status.read() != FormStatus::Editing {
            status.set(FormStatus::Editing);
        }
    };

    let on_send = move |_| {
        if *status.read() == FormStatus::Sending {
            return;
        }
        let current = draft.read().clone();
        status.set(FormStatus::Sending);
        // Cancelled with the page scope if the user navigates away mid-send.
        spawn(async move {
            match submit::submit_contact_form(&current).await {
                Ok(_) => {
                    draft.set(ContactDraft::default());
                    status.set(FormStatus::Sent);
                    let msg = lang::tr(locale, "contact.form.sent");
                    std::thread::spawn(move || {
                        let _ = rfd::MessageDialog::new()
                            .set_title("StudyPay")
                            .set_description(msg)
                            .set_level(rfd::MessageLevel::Info)
                            .set_buttons(rfd::MessageButtons::Ok)
                            .show();
                    });
                }
                // Draft is left untouched so the user can fix and retry.
                Err(e) => status.set(FormStatus::Failed(e.message_key())),
            }
        });
    };

    let sending = *status.read() == FormStatus::Sending;
    let nothing_to_send = draft.read().is_empty();

    rsx! {
        main { class: "page",
            div { class: "page-head",
                h1 { {tr("contact.title")} }
                p { {tr("contact.subtitle")} }
            }
            div { class: "contact-grid",
                div { class: "card form-card",
                    label { class: "field-label", {tr("contact.form.name")} }
                    input {
                        class: "field",
                        value: draft.read().name.clone(),
                        oninput: move |e| { draft.write().name = e.value(); edited(); },
                    }
                    label { class: "field-label", {tr("contact.form.email")} }
                    input {
                        class: "field",
                        r#type: "email",
                        value: draft.read().email.clone(),
                        oninput: move |e| { draft.write().email = e.value(); edited(); },
                    }
                    label { class: "field-label", {tr("contact.form.message")} }
                    textarea {
                        class: "field",
                        rows: "6",
                        value: draft.read().message.clone(),
                        oninput: move |e| { draft.write().message = e.value(); edited(); },
                    }
                    {
                        match *status.read() {
                            FormStatus::Failed(key) => rsx!( div { class: "form-error", {tr(key)} } ),
                            FormStatus::Sent => rsx!( div { class: "form-ok", {tr("contact.form.sent")} } ),
                            _ => rsx! {},
                        }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        disabled: sending || nothing_to_send,
                        onclick: on_send,
                        {tr("contact.form.send")}
                    }
                }
                div { class: "contact-side",
                    div { class: "card",
                        h2 { class: "card-title", {tr("contact.info.title")} }
                        div { class: "info-row",
                            div { class: "info-icon icon-blue", "✉" }
                            div {
                                p { class: "info-label", {tr("contact.info.email.label")} }
                                p { class: "info-value", {tr("contact.info.email.value")} }
                            }
                        }
                        div { class: "info-row",
                            div { class: "info-icon icon-green", "📨" }
                            div {
                                p { class: "info-label", {tr("contact.info.telegram.label")} }
                                p { class: "info-value", {tr("contact.info.telegram.value")} }
                            }
                        }
                        div { class: "info-row",
                            div { class: "info-icon icon-purple", "🎧" }
                            div {
                                p { class: "info-label", {tr("contact.info.support.label")} }
                                p { class: "info-value", {tr("contact.info.support.value")} }
                            }
                        }
                    }
                    div { class: "gradient-card",
                        h3 { {tr("contact.quick.title")} }
                        p { {tr("contact.quick.description")} }
                        p { class: "muted", {tr("contact.quick.hours")} }
                    }
                }
            }
        }
    }
}
