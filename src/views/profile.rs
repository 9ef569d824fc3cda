use crate::prelude::*;

use crate::{
    components::cards::UIProfileCard,
    data,
    utils::{async_sleep, CCStr},
};

#[component]
pub fn ProfileView() -> Element {
    rsx! {
        super::TitledView {
            title: CCStr::from("Profile"),
            subtitle: CCStr::from("Content fades in place instead of pushing the page around."),
            ProfileDetails {}
            ActivitySummary {}
        }
    }
}

#[component]
fn ProfileDetails() -> Element {
    log::debug!("ProfileDetails Rendered");

    let cls_session_service = state_management::use_cls_session_service();
    let latency = use_layout_config().simulated_latency_ms;
    let transition = use_loading_transition(true);
    let mut transition_loading = transition.loading;

    let profile = use_resource(move || async move {
        let (profile, _) = state_management::measure_loading(
            cls_session_service,
            "profile",
            data::fetch_profile(latency),
        )
        .await;
        profile.map(UIProfileCard::from)
    });
    use_effect(move || {
        if profile.read().is_some() {
            transition_loading.set(false);
        }
    });

    use_drop(|| log::debug!("ProfileDetails Dropped"));

    rsx! {
        div { class: "profile-details", style: "{transition.style}",
            LoadedComponent::<UIProfileCard> { input: profile.cloned().into() }
        }
    }
}

#[component]
fn ActivitySummary() -> Element {
    log::debug!("ActivitySummary Rendered");

    let region = use_reserved_space(120);
    let mut loading = region.loading;
    let latency = use_layout_config().simulated_latency_ms;
    use_future(move || async move {
        async_sleep(latency + latency / 2).await;
        loading.set(false);
    });

    use_drop(|| log::debug!("ActivitySummary Dropped"));

    rsx! {
        section { class: "activity", style: "{region.styles}", aria_busy: "{loading()}",
            h2 { class: "section-title", "Activity" }
            StaticLoadedComponent {
                input: if loading() { LoadedComponentInput::Loading } else { LoadedComponentInput::LoadedSuccess(()) },
                skeleton: rsx! {
                    Skeleton { content_type: ContentType::Text, count: 2 }
                },
                p { "4 applications sent this month." }
                p { "2 courses in progress." }
            }
        }
    }
}
