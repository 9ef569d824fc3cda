use crate::prelude::*;

use crate::{
    components::skeletons::{CourseCardSkeleton, JobCardSkeleton, ProfileSkeleton},
    data::{format_price, Course, Job, Profile},
    utils::CCStr,
};

const AVATAR: Asset = asset!("/assets/avatar.svg");

#[component]
fn DetailLine(label: &'static str, value: CCStr) -> Element {
    rsx! {
        div { class: "card-detail",
            span { class: "card-detail-label", "{label}" }
            span { class: "card-detail-value", "{value}" }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UIJobCard(Job);
impl From<Job> for UIJobCard {
    fn from(job: Job) -> Self {
        Self(job)
    }
}

impl LoadedElement for UIJobCard {
    type Loader = SkeletonLoader;

    fn element(self) -> Element {
        let job = self.0;
        rsx! {
            article {
                class: "job-card card",
                "data-job-id": "{job.id}",
                class: if job.featured { "card-featured" },
                h3 { class: "card-title", "{job.title}" }
                div { class: "card-details",
                    DetailLine { label: "Company", value: job.company }
                    DetailLine { label: "Location", value: job.location }
                    DetailLine { label: "Salary", value: job.salary }
                }
                button { class: "btn", style: "width: 120px; height: 40px;", "Apply" }
            }
        }
    }

    fn skeleton() -> Element {
        rsx! {
            JobCardSkeleton {}
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UICourseCard(Course);
impl From<Course> for UICourseCard {
    fn from(course: Course) -> Self {
        Self(course)
    }
}

impl LoadedElement for UICourseCard {
    type Loader = SkeletonLoader;

    fn element(self) -> Element {
        let course = self.0;
        let duration = CCStr::from(format!("{} hours", course.duration_hours));
        let price = CCStr::from(format_price(course.price_cents));
        rsx! {
            article { class: "course-card card",
                div { class: "course-cover", style: "height: 160px;" }
                h3 { class: "card-title", "{course.title}" }
                div { class: "card-details",
                    DetailLine { label: "Instructor", value: course.instructor }
                    DetailLine { label: "Duration", value: duration }
                    DetailLine { label: "Price", value: price }
                }
                button { class: "btn", style: "width: 100%; height: 40px;", "Enroll" }
            }
        }
    }

    fn skeleton() -> Element {
        rsx! {
            CourseCardSkeleton {}
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UIProfileCard(Profile);
impl From<Profile> for UIProfileCard {
    fn from(profile: Profile) -> Self {
        Self(profile)
    }
}

impl LoadedElement for UIProfileCard {
    type Loader = SkeletonLoader;

    fn element(self) -> Element {
        rsx! {
            ProfileCard { profile: self.0 }
        }
    }

    fn skeleton() -> Element {
        rsx! {
            ProfileSkeleton {}
        }
    }
}

#[component]
fn ProfileCard(profile: Profile) -> Element {
    log::debug!("ProfileCard Rendered");

    let config = use_layout_config();
    let avatar = use_image_container(
        profile.avatar_width as f64,
        profile.avatar_height as f64,
        &ImageContainerOptions {
            background_color: Some(config.placeholder_background.as_str().into()),
            ..Default::default()
        },
    );
    let mut avatar_loading = avatar.loading;
    let image_style = avatar
        .styles
        .image_style
        .clone()
        .with("opacity", if avatar_loading() { 0 } else { 1 });

    let skills = profile
        .skills
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(", ");

    use_drop(|| log::debug!("ProfileCard Dropped"));

    rsx! {
        article { class: "profile-card card",
            div { class: "profile-header",
                div { class: "profile-avatar", style: "width: 96px;",
                    div { style: "{avatar.styles.container_style}",
                        img {
                            src: AVATAR,
                            alt: "Avatar of {profile.name}",
                            style: "{image_style}",
                            onload: move |_| avatar_loading.set(false),
                        }
                    }
                }
                div { class: "profile-identity",
                    h3 { class: "card-title", "{profile.name}" }
                    p { class: "profile-headline", "{profile.headline}" }
                }
            }
            div { class: "card-details",
                DetailLine { label: "Email", value: profile.email }
                DetailLine { label: "Location", value: profile.location }
                DetailLine { label: "Member since", value: profile.member_since }
                DetailLine { label: "Skills", value: CCStr::from(skills) }
            }
            button { class: "btn", style: "width: 140px; height: 40px;", "Edit profile" }
        }
    }
}
