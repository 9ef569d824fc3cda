//! Skeleton placeholders.
//!
//! Each skeleton mirrors the structure of the component it stands in for, with fixed
//! dimensions matching the real rendering. Every placeholder instance is announced to
//! assistive technologies as a busy status region with a descriptive label.

use crate::prelude::*;

use crate::layout::dimensions::{get_skeleton_dimensions, ContentType, SkeletonOptions};

/// Height of an `h3` card title
const TITLE_HEIGHT: &str = "28px";
const LINE_HEIGHT: &str = "16px";
const BUTTON_HEIGHT: &str = "40px";

/// Widths cycled over placeholder instances so that lists do not look stamped out
const TITLE_WIDTHS: [&str; 3] = ["75%", "85%", "70%"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkeletonVariant {
    #[default]
    Rectangle,
    Rounded,
    Pill,
    Circle,
}
impl core::fmt::Display for SkeletonVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Rectangle => "skeleton-rectangle",
            Self::Rounded => "skeleton-rounded",
            Self::Pill => "skeleton-pill",
            Self::Circle => "skeleton-circle",
        })
    }
}

fn pulse_class() -> &'static str {
    if use_layout_config().reduced_motion {
        ""
    } else {
        "skeleton-pulse"
    }
}

/// A single placeholder shape. Decorative only: the enclosing skeleton carries the status.
#[component]
pub fn SkeletonBlock(
    #[props(into)] width: CCStr,
    #[props(into)] height: CCStr,
    #[props(default)] variant: SkeletonVariant,
    #[props(default)] class: String,
) -> Element {
    let pulse = pulse_class();
    let background = use_layout_config().placeholder_background;
    let style = Style::new()
        .with("width", &width)
        .with("height", &height)
        .with("min-height", &height)
        .with("background-color", background);
    rsx! {
        span {
            class: "skeleton-block {variant} {pulse} {class}",
            style: "{style}",
            aria_hidden: "true",
        }
    }
}

/// Generic placeholder sized from the preset of `content_type`
#[component]
pub fn Skeleton(
    #[props(default)] content_type: ContentType,
    #[props(default = 1)] count: usize,
    width: Option<CCStr>,
    height: Option<CCStr>,
    size: Option<CCStr>,
) -> Element {
    let options = SkeletonOptions {
        width,
        height,
        min_height: None,
        size,
    };
    let dimensions = get_skeleton_dimensions(content_type, &options);
    let style = dimensions.to_style();
    let variant = match content_type {
        ContentType::Avatar => SkeletonVariant::Circle,
        ContentType::Button => SkeletonVariant::Pill,
        ContentType::Text => SkeletonVariant::Rectangle,
        _ => SkeletonVariant::Rounded,
    };
    let pulse = pulse_class();
    let name = content_type.name();

    rsx! {
        for i in 0..count {
            div {
                key: "{i}",
                class: "skeleton skeleton-{name} {variant} {pulse}",
                style: "{style}",
                role: "status",
                aria_busy: "true",
                aria_label: "Loading {name}",
            }
        }
    }
}

/// Label / value line of a card, as rendered by the card details list
#[component]
fn DetailLineSkeleton(#[props(into)] value_width: CCStr) -> Element {
    rsx! {
        div { class: "skeleton-detail",
            SkeletonBlock { width: "80px", height: LINE_HEIGHT }
            SkeletonBlock { width: value_width, height: LINE_HEIGHT }
        }
    }
}

/// Stand-in for [`JobCard`](super::cards::JobCard): title, company / location / salary
/// lines and the apply button
#[component]
pub fn JobCardSkeleton(#[props(default = 1)] count: usize) -> Element {
    rsx! {
        for i in 0..count {
            div {
                key: "{i}",
                class: "job-card-skeleton card",
                role: "status",
                aria_busy: "true",
                aria_label: "Loading job posting",
                SkeletonBlock {
                    width: TITLE_WIDTHS[i % TITLE_WIDTHS.len()],
                    height: TITLE_HEIGHT,
                    variant: SkeletonVariant::Rounded,
                }
                div { class: "card-details",
                    DetailLineSkeleton { value_width: "60%" }
                    DetailLineSkeleton { value_width: "45%" }
                    DetailLineSkeleton { value_width: "35%" }
                }
                SkeletonBlock {
                    width: "120px",
                    height: BUTTON_HEIGHT,
                    variant: SkeletonVariant::Rounded,
                }
            }
        }
    }
}

/// Stand-in for [`CourseCard`](super::cards::CourseCard): cover, title, instructor /
/// duration / price lines and the full width enroll button
#[component]
pub fn CourseCardSkeleton(#[props(default = 1)] count: usize) -> Element {
    rsx! {
        for i in 0..count {
            div {
                key: "{i}",
                class: "course-card-skeleton card",
                role: "status",
                aria_busy: "true",
                aria_label: "Loading course",
                SkeletonBlock { width: "100%", height: "160px", variant: SkeletonVariant::Rounded }
                SkeletonBlock {
                    width: TITLE_WIDTHS[(i + 1) % TITLE_WIDTHS.len()],
                    height: TITLE_HEIGHT,
                    variant: SkeletonVariant::Rounded,
                }
                div { class: "card-details",
                    DetailLineSkeleton { value_width: "55%" }
                    DetailLineSkeleton { value_width: "30%" }
                    DetailLineSkeleton { value_width: "25%" }
                }
                SkeletonBlock { width: "100%", height: BUTTON_HEIGHT, variant: SkeletonVariant::Rounded }
            }
        }
    }
}

/// Stand-in for [`ProfileCard`](super::cards::ProfileCard): avatar, name, headline,
/// detail lines and the edit button
#[component]
pub fn ProfileSkeleton(#[props(default = 1)] count: usize) -> Element {
    rsx! {
        for i in 0..count {
            div {
                key: "{i}",
                class: "profile-skeleton card",
                role: "status",
                aria_busy: "true",
                aria_label: "Loading profile",
                div { class: "profile-header",
                    SkeletonBlock { width: "96px", height: "96px", variant: SkeletonVariant::Circle }
                    div { class: "profile-identity",
                        SkeletonBlock { width: "60%", height: TITLE_HEIGHT, variant: SkeletonVariant::Rounded }
                        SkeletonBlock { width: "40%", height: LINE_HEIGHT }
                    }
                }
                div { class: "card-details",
                    DetailLineSkeleton { value_width: "50%" }
                    DetailLineSkeleton { value_width: "65%" }
                    DetailLineSkeleton { value_width: "40%" }
                    DetailLineSkeleton { value_width: "55%" }
                }
                SkeletonBlock { width: "140px", height: BUTTON_HEIGHT, variant: SkeletonVariant::Rounded }
            }
        }
    }
}

/// Stand-in for a list row: avatar and two text lines within the list-item preset height
#[component]
pub fn ListItemSkeleton(#[props(default = 1)] count: usize) -> Element {
    let dimensions = get_skeleton_dimensions(ContentType::ListItem, &SkeletonOptions::default());
    let style = dimensions.to_style();
    rsx! {
        for i in 0..count {
            div {
                key: "{i}",
                class: "list-item-skeleton",
                style: "{style}",
                role: "status",
                aria_busy: "true",
                aria_label: "Loading list item",
                SkeletonBlock { width: "48px", height: "48px", variant: SkeletonVariant::Circle }
                div { class: "list-item-lines",
                    SkeletonBlock { width: TITLE_WIDTHS[i % TITLE_WIDTHS.len()], height: LINE_HEIGHT }
                    SkeletonBlock { width: "50%", height: LINE_HEIGHT }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    /// Every element flagged as a status region must be busy and labelled
    fn assert_accessible(html: &str) {
        let statuses = count(html, r#"role="status""#);
        assert!(statuses > 0);
        assert_eq!(count(html, r#"aria-busy="true""#), statuses);
        assert_eq!(count(html, r#"aria-label="Loading "#), statuses);
    }

    #[test]
    fn job_card_skeleton_count() {
        let html = render(|| rsx! { JobCardSkeleton { count: 5 } });
        assert_eq!(count(&html, r#"class="job-card-skeleton"#), 5);
        assert_accessible(&html);
    }

    #[test]
    fn job_card_skeleton_defaults_to_one() {
        let html = render(|| rsx! { JobCardSkeleton {} });
        assert_eq!(count(&html, r#"class="job-card-skeleton"#), 1);
        // title, 3 x (label + value), button
        assert_eq!(count(&html, "skeleton-block"), 8);
        assert!(html.contains("height: 28px"));
        assert!(html.contains("width: 120px"));
    }

    #[test]
    fn course_and_profile_skeletons() {
        let html = render(|| {
            rsx! {
                CourseCardSkeleton { count: 3 }
                ProfileSkeleton { count: 2 }
                ListItemSkeleton { count: 4 }
            }
        });
        assert_eq!(count(&html, r#"class="course-card-skeleton"#), 3);
        assert_eq!(count(&html, r#"class="profile-skeleton"#), 2);
        assert_eq!(count(&html, r#"class="list-item-skeleton"#), 4);
        assert_eq!(count(&html, r#"aria-label="Loading course""#), 3);
        assert_eq!(count(&html, r#"aria-label="Loading profile""#), 2);
        assert_accessible(&html);
    }

    #[test]
    fn generic_skeleton_uses_presets() {
        let html = render(|| {
            rsx! {
                Skeleton { content_type: ContentType::Avatar, count: 2, size: CCStr::from("64px") }
                Skeleton {}
            }
        });
        assert_eq!(count(&html, "skeleton-avatar"), 2);
        assert!(html.contains("width: 64px; height: 64px; min-height: 64px;"));
        assert!(html.contains("width: 100%; height: auto; min-height: 200px;"));
        assert_eq!(count(&html, r#"aria-label="Loading avatar""#), 2);
        assert_accessible(&html);
    }

    #[test]
    fn zero_count_renders_nothing() {
        let html = render(|| rsx! { JobCardSkeleton { count: 0 } });
        assert_eq!(count(&html, "job-card-skeleton"), 0);
    }

    #[test]
    fn shapes_are_hidden_from_assistive_technologies() {
        let html = render(|| rsx! { SkeletonBlock { width: "10px", height: "10px" } });
        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(!html.contains("role="));
    }
}
