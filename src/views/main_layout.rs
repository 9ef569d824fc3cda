use crate::prelude::*;

use crate::{cls::ClsRating, Route};

#[component]
pub fn MainLayout() -> Element {
    log::debug!("MainLayout reload");

    use_drop(|| log::debug!("MainLayout Dropped"));

    rsx! {
        div { class: "layout",
            header { class: "layout-header", NavBar {} }
            main { class: "layout-main", Outlet::<Route> {} }
            footer { class: "layout-footer", Footer {} }
        }
    }
}

#[component]
fn NavBar() -> Element {
    log::debug!("NavBar reload");

    use_drop(|| log::debug!("NavBar Dropped"));

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-brand", "Shiftless Board" }
            NavLink { route: Route::JobsView {}, "Jobs" }
            NavLink { route: Route::CoursesView {}, "Courses" }
            NavLink { route: Route::ProfileView {}, "Profile" }
            NavLink { route: Route::MetricsView {}, "Layout metrics" }
            div { class: "grow" }
            ClsBadge {}
        }
    }
}

#[component]
fn NavLink(route: Route, children: Element) -> Element {
    rsx! {
        Link { class: "nav-link", active_class: "nav-link-active", to: route, {children} }
    }
}

/// Live application CLS, absent when the platform cannot observe layout shifts
#[component]
fn ClsBadge() -> Element {
    let cls = state_management::APPLICATION_CLS();
    rsx! {
        if let Some(cls) = cls {
            span { class: "badge badge-{ClsRating::classify(cls)}", title: "Cumulative Layout Shift",
                "CLS {cls:.3}"
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        div { class: "footer-text", "Content never moves while it loads." }
    }
}
