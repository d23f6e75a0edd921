use dioxus::prelude::*;

use crate::date::current_year;
use crate::navigation::scroll_to_top;

#[component]
pub fn Footer() -> Element {
    let year = current_year();
    rsx! {
        footer { class: "site-footer",
            div { class: "section-container footer-row",
                p { class: "muted", "© {year} Mr. RockeY. All rights reserved." }
                button {
                    r#type: "button",
                    class: "icon-button",
                    aria_label: "Scroll to top",
                    onclick: move |_| scroll_to_top(),
                    "↑"
                }
            }
        }
    }
}
