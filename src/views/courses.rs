use crate::prelude::*;

use crate::{
    components::cards::UICourseCard,
    data,
    utils::{async_sleep, CCStr},
};

/// Rows of the recently viewed list, known before the data is
const RECENT_COUNT: usize = 4;
const RECENT_ROW_HEIGHT: f64 = 80.0;

#[component]
pub fn CoursesView() -> Element {
    rsx! {
        super::TitledView {
            title: CCStr::from("Courses"),
            subtitle: CCStr::from("A grid whose rows keep their height while cards load."),
            CourseGrid {}
            RecentlyViewed {}
        }
    }
}

#[component]
fn CourseGrid() -> Element {
    log::debug!("CourseGrid Rendered");

    let cls_session_service = state_management::use_cls_session_service();
    let latency = use_layout_config().simulated_latency_ms;
    let grid_style = get_stable_grid_styles(&GridOptions {
        min_item_height: "380px".into(),
        ..Default::default()
    });

    let courses = use_resource(move || async move {
        let (courses, _) = state_management::measure_loading(
            cls_session_service,
            "course-grid",
            data::fetch_courses(latency),
        )
        .await;
        courses.map(|courses| courses.into_iter().map(UICourseCard::from).collect::<Vec<_>>())
    });

    use_drop(|| log::debug!("CourseGrid Dropped"));

    rsx! {
        div { class: "course-grid", style: "{grid_style}",
            LoadedComponent::<Vec<UICourseCard>> { input: courses.cloned().into() }
        }
    }
}

#[component]
fn RecentlyViewed() -> Element {
    log::debug!("RecentlyViewed Rendered");

    let region = use_stable_list(RECENT_COUNT, RECENT_ROW_HEIGHT);
    let mut loading = region.loading;
    let latency = use_layout_config().simulated_latency_ms;
    let recent = use_resource(move || async move {
        let courses = data::fetch_courses(latency / 2).await;
        async_sleep(latency / 2).await;
        courses
    });
    use_effect(move || {
        if recent.read().is_some() {
            loading.set(false);
        }
    });

    use_drop(|| log::debug!("RecentlyViewed Dropped"));

    rsx! {
        h2 { class: "section-title", "Recently viewed" }
        div { class: "recent-list", role: "list", style: "{region.styles}", aria_busy: "{loading()}",
            {match &*recent.read() {
                None => rsx! {
                    ListItemSkeleton { count: RECENT_COUNT }
                },
                Some(Ok(courses)) => rsx! {
                    for course in courses.iter().take(RECENT_COUNT) {
                        div {
                            key: "{course.id}",
                            class: "recent-item",
                            role: "listitem",
                            style: "height: {RECENT_ROW_HEIGHT}px;",
                            span { class: "recent-title", "{course.title}" }
                            span { class: "recent-meta", "{course.instructor}" }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    div { class: "recent-item", role: "alert", "{e}" }
                },
            }}
        }
    }
}
