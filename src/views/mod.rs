use crate::prelude::*;

use crate::utils::CCStr;

pub mod courses;
pub mod jobs;
pub mod main_layout;
pub mod metrics;
pub mod profile;

#[component]
fn TitledView(title: CCStr, subtitle: CCStr, right: Option<Element>, children: Element) -> Element {
    rsx! {
        div { class: "view-header",
            div {
                h1 { class: "view-title", {title} }
                h2 { class: "view-subtitle", {subtitle} }
            }
            div { class: "view-header-right", {right} }
        }
        div { class: "separator" }
        {children}
    }
}
