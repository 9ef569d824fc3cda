use crate::prelude::*;

use crate::utils::CCStr;

const DEMO_SECTIONS: [(&str, u32); 3] = [("header", 100), ("content", 400), ("sidebar", 250)];

#[component]
pub fn MetricsView() -> Element {
    rsx! {
        super::TitledView {
            title: CCStr::from("Layout metrics"),
            subtitle: CCStr::from("Cumulative Layout Shift of the application and of every loading phase."),
            div { class: "metrics-grid",
                ClsOverview {}
                LayoutSettings {}
            }
            SessionReport {}
            CoordinationDemo {}
        }
    }
}

#[component]
fn ClsOverview() -> Element {
    log::debug!("ClsOverview Rendered");

    let page = use_cls_measurement();
    let page_cls = *page.cls.read();
    let application = state_management::APPLICATION_CLS();

    use_drop(|| log::debug!("ClsOverview Dropped"));

    rsx! {
        div { class: "card",
            h2 { class: "section-title", "Cumulative Layout Shift" }
            if let Some(cls) = application {
                div { class: "card-detail",
                    span { class: "card-detail-label", "Application" }
                    span { class: "badge badge-{ClsRating::classify(cls)}", "{cls:.4}" }
                }
            }
            if page.supported {
                div { class: "card-detail",
                    span { class: "card-detail-label", "Since this page opened" }
                    span { class: "badge badge-{page.rating()}", "{page_cls:.4} ({page.rating()})" }
                }
            } else {
                p { class: "muted",
                    "Layout shifts cannot be observed on this platform, no score is available."
                }
            }
        }
    }
}

#[component]
fn LayoutSettings() -> Element {
    let mut config = use_context::<Signal<LayoutConfig>>();

    rsx! {
        div { class: "card",
            h2 { class: "section-title", "Settings" }
            label { class: "toggle",
                input {
                    r#type: "checkbox",
                    checked: config.read().reduced_motion,
                    oninput: move |event| config.write().reduced_motion = event.checked(),
                }
                "Reduce skeleton motion"
            }
            label { class: "toggle",
                input {
                    r#type: "checkbox",
                    checked: config.read().announce_progress,
                    oninput: move |event| config.write().announce_progress = event.checked(),
                }
                "Announce loading progress to screen readers"
            }
        }
    }
}

#[component]
fn SessionReport() -> Element {
    log::debug!("SessionReport Rendered");

    let cls_session_service = state_management::use_cls_session_service();
    let sessions = state_management::CLS_SESSIONS.read();
    let summary = sessions.summary();

    use_drop(|| log::debug!("SessionReport Dropped"));

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "section-title", "Loading sessions" }
                button {
                    class: "btn",
                    onclick: move |_| state_management::log_cls_report(cls_session_service),
                    "Log report"
                }
                button {
                    class: "btn",
                    onclick: move |_| state_management::clear_cls_measurements(cls_session_service),
                    "Clear"
                }
            }
            if summary.total_measurements == 0 {
                p { class: "muted", "No loading session measured yet." }
            } else {
                div { class: "card-details",
                    div { class: "card-detail",
                        span { class: "card-detail-label", "Sessions" }
                        span { "{summary.total_measurements}" }
                    }
                    div { class: "card-detail",
                        span { class: "card-detail-label", "Average / max CLS" }
                        span { "{summary.average_cls:.4} / {summary.max_cls:.4}" }
                    }
                    div { class: "card-detail",
                        span { class: "card-detail-label", "Pass rate" }
                        span { "{summary.pass_rate:.1}% ({summary.passed_count} passed, {summary.failed_count} failed)" }
                    }
                }
                table { class: "session-table",
                    thead {
                        tr {
                            th { "Component" }
                            th { "Duration" }
                            th { "Shifts" }
                            th { "CLS" }
                            th { "Rating" }
                        }
                    }
                    tbody {
                        for session in sessions.measurements().iter().rev() {
                            tr { key: "{session.id}",
                                td { "{session.component}" }
                                td { "{session.duration_ms} ms" }
                                td { "{session.shift_count()}" }
                                td { "{session.cls_during_loading:.4}" }
                                td {
                                    span { class: "badge badge-{session.rating}", "{session.rating}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Sections loaded one at a time by hand, showing the aggregate the coordinator derives
#[component]
fn CoordinationDemo() -> Element {
    log::debug!("CoordinationDemo Rendered");

    let initial_sections = || {
        DEMO_SECTIONS
            .iter()
            .map(|(id, min_height)| Section::new(*id, *min_height, true))
            .collect::<Vec<_>>()
    };
    let coordination = use_coordinated_loading(initial_sections);
    let view = coordination.view();
    let next_loading = view
        .sections
        .iter()
        .find(|s| s.loading)
        .map(|s| s.id.clone());
    let all_loaded = next_loading.is_none();

    use_drop(|| log::debug!("CoordinationDemo Dropped"));

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "section-title", "Coordination" }
                button {
                    class: "btn",
                    disabled: all_loaded,
                    onclick: move |_| {
                        if let Some(id) = &next_loading {
                            coordination.update_section(id, false);
                        }
                    },
                    "Load next section"
                }
                button {
                    class: "btn",
                    onclick: move |_| {
                        for (id, _) in DEMO_SECTIONS {
                            coordination.update_section(id, true);
                        }
                    },
                    "Reset"
                }
            }
            progress {
                class: "coordination-progress",
                max: "100",
                value: "{view.loading_percentage()}",
                aria_label: "Sections loaded",
            }
            p {
                "{view.loading_percentage()}% loaded, {view.loading_count} section(s) pending, "
                "{view.total_min_height} reserved"
            }
            div { class: "coordination-sections",
                for section in view.sections.iter() {
                    div {
                        key: "{section.id}",
                        class: "coordination-section",
                        style: "{section.style}",
                        aria_busy: "{section.loading}",
                        if section.loading {
                            Skeleton { content_type: ContentType::Text, width: CCStr::from("40%") }
                        } else {
                            span { "{section.id}" }
                        }
                    }
                }
            }
        }
    }
}
