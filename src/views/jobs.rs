use crate::prelude::*;

use crate::{
    components::cards::UIJobCard,
    data::{self, Job, JobFilter},
    utils::{async_sleep, CCStr},
};

#[component]
pub fn JobsView() -> Element {
    log::debug!("JobsView Rendered");

    let filter = use_signal(|| JobFilter::All);
    let mut board_ready = use_signal(|| false);

    use_drop(|| log::debug!("JobsView Dropped"));

    rsx! {
        super::TitledView {
            title: CCStr::from("Jobs"),
            subtitle: CCStr::from("Every section keeps its height until its content is there."),
            right: rsx! {
                span { class: if board_ready() { "badge badge-good" } else { "badge" },
                    if board_ready() {
                        "Board ready"
                    } else {
                        "Loading board"
                    }
                }
            },
            LoadingCoordinator {
                class: "jobs-board",
                on_all_loaded: move |_| {
                    log::info!("Job board fully loaded");
                    board_ready.set(true);
                },
                LoadingSection { id: "filters", min_height: 300, JobFilters { filter } }
                LoadingSection { id: "job-list", min_height: 600, JobList { filter } }
                LoadingSection { id: "featured", min_height: 200, FeaturedJobs {} }
            }
        }
    }
}

#[component]
fn JobFilters(filter: Signal<JobFilter>) -> Element {
    log::debug!("JobFilters Rendered");

    let section = use_section();
    let latency = use_layout_config().simulated_latency_ms;
    let options = use_resource(move || async move {
        async_sleep(latency / 3).await;
        JobFilter::ALL
    });
    use_effect(move || {
        if options.read().is_some() {
            section.set_loading(false);
        }
    });

    use_drop(|| log::debug!("JobFilters Dropped"));

    rsx! {
        h2 { class: "section-title", "Filters" }
        StaticLoadedComponent {
            input: if options.read().is_some() { LoadedComponentInput::LoadedSuccess(()) } else { LoadedComponentInput::Loading },
            skeleton: rsx! {
                Skeleton { content_type: ContentType::Button, count: 3 }
            },
            div { class: "filter-group", role: "group", aria_label: "Job location",
                for option in JobFilter::ALL {
                    button {
                        key: "{option:?}",
                        class: "btn",
                        class: if filter() == option { "btn-active" },
                        style: "width: 120px; height: 40px;",
                        aria_pressed: "{filter() == option}",
                        onclick: move |_| {
                            let mut filter = filter;
                            filter.set(option);
                        },
                        "{option.label()}"
                    }
                }
            }
        }
    }
}

#[component]
fn JobList(filter: ReadOnlySignal<JobFilter>) -> Element {
    log::debug!("JobList Rendered");

    let section = use_section();
    let cls_session_service = state_management::use_cls_session_service();
    let latency = use_layout_config().simulated_latency_ms;

    let jobs = use_resource(move || async move {
        let (jobs, session) = state_management::measure_loading(
            cls_session_service,
            "job-list",
            data::fetch_jobs(latency),
        )
        .await;
        if let Some(session) = session {
            log::info!(
                "job-list loaded in {}ms with CLS {:.4} ({})",
                session.duration_ms,
                session.cls_during_loading,
                session.rating
            );
        }
        jobs
    });
    use_effect(move || {
        if jobs.read().is_some() {
            section.set_loading(false);
        }
    });

    let cards = use_memo(move || {
        let filter = filter();
        LoadedComponentInput::<Vec<UIJobCard>>::from(jobs.cloned().map(|result| {
            result.map(|jobs: Vec<Job>| {
                jobs.into_iter()
                    .filter(|job| filter.matches(job))
                    .map(UIJobCard::from)
                    .collect()
            })
        }))
    });

    use_drop(|| log::debug!("JobList Dropped"));

    rsx! {
        h2 { class: "section-title", "Open positions" }
        div { class: "job-list",
            if cards.read().is_loading() {
                JobCardSkeleton { count: 5 }
            } else {
                LoadedComponent::<Vec<UIJobCard>> { input: cards() }
            }
        }
    }
}

#[component]
fn FeaturedJobs() -> Element {
    log::debug!("FeaturedJobs Rendered");

    let section = use_section();
    let latency = use_layout_config().simulated_latency_ms;
    let featured = use_resource(move || async move {
        data::fetch_featured_jobs(latency * 2)
            .await
            .map(|jobs| jobs.into_iter().map(UIJobCard::from).collect::<Vec<_>>())
    });
    use_effect(move || {
        if featured.read().is_some() {
            section.set_loading(false);
        }
    });

    use_drop(|| log::debug!("FeaturedJobs Dropped"));

    rsx! {
        h2 { class: "section-title", "Featured" }
        div { class: "featured-jobs",
            LoadedComponent::<Vec<UIJobCard>> { input: featured.cloned().into() }
        }
    }
}
