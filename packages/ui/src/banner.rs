//! Inline message banner.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerSeverity {
    Warning,
    Error,
}

impl BannerSeverity {
    fn classes(self) -> &'static str {
        match self {
            BannerSeverity::Warning => "banner banner--warning",
            BannerSeverity::Error => "banner banner--error",
        }
    }
}

/// A one-line alert shown above a form.
#[component]
pub fn Banner(severity: BannerSeverity, message: String) -> Element {
    let classes = severity.classes();
    rsx! {
        div {
            class: "{classes}",
            role: "alert",
            "{message}"
        }
    }
}
