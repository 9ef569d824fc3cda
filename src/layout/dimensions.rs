//! Space reservation helpers.
//!
//! Every function here is pure and total: missing or invalid inputs fall back to a
//! documented default instead of failing.

use serde::{Deserialize, Serialize};

use super::style::{CssLength, Style};
use crate::utils::{format_percent, format_px, CCStr};

/// Transition applied to `min-height` so reserved space can settle without jumping
pub const MIN_HEIGHT_TRANSITION: &str = "min-height 200ms ease-in-out";

pub const DEFAULT_PLACEHOLDER_BACKGROUND: &str = "#f3f4f6";

/// Intrinsic-ratio padding for a `width` x `height` box, as a percentage of its width.
///
/// Returns `"100%"` (a square) when either dimension is missing, zero, negative or NaN.
///
/// ```rust
/// assert_eq!(calculate_aspect_ratio(16.0, 9.0), "56.25%");
/// assert_eq!(calculate_aspect_ratio(None, 9.0), "100%");
/// ```
pub fn calculate_aspect_ratio(width: impl Into<Option<f64>>, height: impl Into<Option<f64>>) -> String {
    match (width.into(), height.into()) {
        // NaN fails both comparisons
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => format_percent(h / w * 100.0),
        _ => "100%".to_owned(),
    }
}

/// Container styles reserving space for a `width` x `height` media box
pub fn get_aspect_ratio_styles(width: impl Into<Option<f64>>, height: impl Into<Option<f64>>) -> Style {
    Style::new()
        .with("position", "relative")
        .with("width", "100%")
        .with("padding-bottom", calculate_aspect_ratio(width, height))
        .with("overflow", "hidden")
}

/// Semantic kinds of content a skeleton can stand in for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    #[default]
    Card,
    ListItem,
    Image,
    Text,
    Button,
    Avatar,
}

impl ContentType {
    /// Lenient lookup by name, unknown names map to [`ContentType::Card`]
    pub fn from_name(name: &str) -> Self {
        match name {
            "card" => Self::Card,
            "list-item" => Self::ListItem,
            "image" => Self::Image,
            "text" => Self::Text,
            "button" => Self::Button,
            "avatar" => Self::Avatar,
            other => {
                log::debug!("unknown content type {other:?}, using card preset");
                Self::Card
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::ListItem => "list-item",
            Self::Image => "image",
            Self::Text => "text",
            Self::Button => "button",
            Self::Avatar => "avatar",
        }
    }
}

impl From<&str> for ContentType {
    fn from(value: &str) -> Self {
        Self::from_name(value)
    }
}

/// Overrides accepted by [`get_skeleton_dimensions`]
///
/// Which fields a preset honours depends on the preset:
/// - `image`: `width`, `height`, `min_height`
/// - `text`: `width`, `height`
/// - `button`: `width`
/// - `avatar`: `size` (applied to all three dimensions)
/// - `card`, `list-item`: none
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkeletonOptions {
    pub width: Option<CCStr>,
    pub height: Option<CCStr>,
    pub min_height: Option<CCStr>,
    pub size: Option<CCStr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonDimensions {
    pub width: CCStr,
    pub height: CCStr,
    pub min_height: CCStr,
}

impl SkeletonDimensions {
    fn new(width: impl Into<CCStr>, height: impl Into<CCStr>, min_height: impl Into<CCStr>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
            min_height: min_height.into(),
        }
    }

    pub fn to_style(&self) -> Style {
        Style::new()
            .with("width", &self.width)
            .with("height", &self.height)
            .with("min-height", &self.min_height)
    }
}

/// Default placeholder dimensions for a kind of content
pub fn get_skeleton_dimensions(content_type: ContentType, options: &SkeletonOptions) -> SkeletonDimensions {
    let or = |o: &Option<CCStr>, default: &str| o.clone().unwrap_or_else(|| default.into());
    match content_type {
        ContentType::Card => SkeletonDimensions::new("100%", "auto", "200px"),
        ContentType::ListItem => SkeletonDimensions::new("100%", "auto", "80px"),
        ContentType::Image => SkeletonDimensions::new(
            or(&options.width, "100%"),
            or(&options.height, "auto"),
            or(&options.min_height, "200px"),
        ),
        ContentType::Text => SkeletonDimensions::new(
            or(&options.width, "100%"),
            or(&options.height, "16px"),
            "16px",
        ),
        ContentType::Button => SkeletonDimensions::new(or(&options.width, "120px"), "40px", "40px"),
        ContentType::Avatar => {
            let size = or(&options.size, "48px");
            SkeletonDimensions::new(size.clone(), size.clone(), size)
        }
    }
}

/// Reserves `min_height` of vertical space.
///
/// Numbers get a `px` suffix, CSS strings are used verbatim, so `reserve_space(300)` and
/// `reserve_space("300px")` yield the same declaration.
pub fn reserve_space(min_height: impl Into<CssLength>) -> Style {
    Style::new()
        .with("min-height", min_height.into().to_css())
        .with("transition", MIN_HEIGHT_TRANSITION)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageContainerOptions {
    /// Fill shown until the image paints, [`DEFAULT_PLACEHOLDER_BACKGROUND`] if unset
    pub background_color: Option<CCStr>,
    /// `cover` if unset
    pub object_fit: Option<CCStr>,
    pub container_style: Style,
    pub image_style: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageContainerStyles {
    pub container_style: Style,
    pub image_style: Style,
}

/// Styles for an image that must not move surrounding content when it finishes loading.
///
/// The container keeps the aspect ratio of `width` x `height`; the image fills it and fades
/// in. Caller supplied styles in `options` are merged last.
pub fn get_image_container_styles(
    width: impl Into<Option<f64>>,
    height: impl Into<Option<f64>>,
    options: &ImageContainerOptions,
) -> ImageContainerStyles {
    let background = options
        .background_color
        .as_deref()
        .unwrap_or(DEFAULT_PLACEHOLDER_BACKGROUND);
    let object_fit = options.object_fit.as_deref().unwrap_or("cover");

    let container_style = Style::new()
        .with("position", "relative")
        .with("width", "100%")
        .with("padding-bottom", calculate_aspect_ratio(width, height))
        .with("background-color", background)
        .with("overflow", "hidden")
        .merge(&options.container_style);

    let image_style = Style::new()
        .with("position", "absolute")
        .with("top", 0)
        .with("left", 0)
        .with("width", "100%")
        .with("height", "100%")
        .with("object-fit", object_fit)
        .with("transition", "opacity 200ms ease-in-out")
        .merge(&options.image_style);

    ImageContainerStyles {
        container_style,
        image_style,
    }
}

/// Reserves room for `item_count` rows of `item_height` pixels
pub fn get_list_container_styles(item_count: usize, item_height: f64) -> Style {
    Style::new()
        .with("min-height", format_px(item_count as f64 * item_height))
        .with("transition", MIN_HEIGHT_TRANSITION)
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    pub columns: u16,
    pub gap: CCStr,
    pub min_item_height: CCStr,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            columns: 3,
            gap: "1rem".into(),
            min_item_height: "200px".into(),
        }
    }
}

/// Grid whose rows never collapse below `min_item_height` while cells are loading
pub fn get_stable_grid_styles(options: &GridOptions) -> Style {
    Style::new()
        .with("display", "grid")
        .with(
            "grid-template-columns",
            format!("repeat({}, 1fr)", options.columns),
        )
        .with("gap", &options.gap)
        .with(
            "grid-auto-rows",
            format!("minmax({}, auto)", options.min_item_height),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_of_valid_dimensions() {
        assert_eq!(calculate_aspect_ratio(16.0, 9.0), "56.25%");
        assert_eq!(calculate_aspect_ratio(800.0, 600.0), "75%");
        assert_eq!(calculate_aspect_ratio(100.0, 100.0), "100%");
        assert_eq!(calculate_aspect_ratio(400.0, 800.0), "200%");
        for (w, h) in [(3.0, 1.0), (1920.0, 1080.0), (7.0, 13.0)] {
            assert_eq!(calculate_aspect_ratio(w, h), format!("{}%", h / w * 100.0));
        }
    }

    #[test]
    fn aspect_ratio_falls_back_to_square() {
        assert_eq!(calculate_aspect_ratio(0.0, 9.0), "100%");
        assert_eq!(calculate_aspect_ratio(16.0, 0.0), "100%");
        assert_eq!(calculate_aspect_ratio(-16.0, 9.0), "100%");
        assert_eq!(calculate_aspect_ratio(None, None), "100%");
        assert_eq!(calculate_aspect_ratio(f64::NAN, 9.0), "100%");
    }

    #[test]
    fn aspect_ratio_styles() {
        let style = get_aspect_ratio_styles(16.0, 9.0);
        assert_eq!(
            style.to_string(),
            "position: relative; width: 100%; padding-bottom: 56.25%; overflow: hidden;"
        );
    }

    #[test]
    fn skeleton_presets() {
        let none = SkeletonOptions::default();
        let card = get_skeleton_dimensions(ContentType::Card, &none);
        assert_eq!(card, SkeletonDimensions::new("100%", "auto", "200px"));
        let item = get_skeleton_dimensions(ContentType::ListItem, &none);
        assert_eq!(&*item.min_height, "80px");
        let button = get_skeleton_dimensions(ContentType::Button, &none);
        assert_eq!(button, SkeletonDimensions::new("120px", "40px", "40px"));
        let avatar = get_skeleton_dimensions(ContentType::Avatar, &none);
        assert_eq!(avatar, SkeletonDimensions::new("48px", "48px", "48px"));
    }

    #[test]
    fn unknown_content_type_uses_card() {
        let ct = ContentType::from_name("carousel");
        assert_eq!(ct, ContentType::Card);
        assert_eq!(
            get_skeleton_dimensions(ct, &SkeletonOptions::default()),
            get_skeleton_dimensions(ContentType::Card, &SkeletonOptions::default())
        );
    }

    #[test]
    fn overrides_only_apply_where_supported() {
        let options = SkeletonOptions {
            width: Some("50%".into()),
            height: Some("99px".into()),
            min_height: Some("10px".into()),
            size: Some("64px".into()),
        };
        let card = get_skeleton_dimensions(ContentType::Card, &options);
        assert_eq!(&*card.width, "100%");
        let image = get_skeleton_dimensions(ContentType::Image, &options);
        assert_eq!(image, SkeletonDimensions::new("50%", "99px", "10px"));
        let text = get_skeleton_dimensions(ContentType::Text, &options);
        assert_eq!(text, SkeletonDimensions::new("50%", "99px", "16px"));
        let button = get_skeleton_dimensions(ContentType::Button, &options);
        assert_eq!(button, SkeletonDimensions::new("50%", "40px", "40px"));
        let avatar = get_skeleton_dimensions(ContentType::Avatar, &options);
        assert_eq!(avatar, SkeletonDimensions::new("64px", "64px", "64px"));
    }

    #[test]
    fn reserve_space_number_and_string_agree() {
        assert_eq!(reserve_space(300).get("min-height"), Some("300px"));
        assert_eq!(reserve_space(300), reserve_space("300px"));
        assert_eq!(reserve_space("50vh").get("min-height"), Some("50vh"));
        assert_eq!(reserve_space(300).get("transition"), Some(MIN_HEIGHT_TRANSITION));
    }

    #[test]
    fn image_container_defaults() {
        let styles = get_image_container_styles(800.0, 600.0, &ImageContainerOptions::default());
        assert_eq!(styles.container_style.get("padding-bottom"), Some("75%"));
        assert_eq!(
            styles.container_style.get("background-color"),
            Some(DEFAULT_PLACEHOLDER_BACKGROUND)
        );
        assert_eq!(styles.container_style.get("overflow"), Some("hidden"));
        assert_eq!(styles.image_style.get("position"), Some("absolute"));
        assert_eq!(styles.image_style.get("object-fit"), Some("cover"));
        assert_eq!(
            styles.image_style.get("transition"),
            Some("opacity 200ms ease-in-out")
        );
    }

    #[test]
    fn image_container_caller_wins() {
        let options = ImageContainerOptions {
            background_color: Some("#000".into()),
            object_fit: Some("contain".into()),
            container_style: Style::new().with("border-radius", "8px").with("overflow", "visible"),
            image_style: Style::new().with("object-fit", "fill"),
        };
        let styles = get_image_container_styles(None, None, &options);
        assert_eq!(styles.container_style.get("padding-bottom"), Some("100%"));
        assert_eq!(styles.container_style.get("background-color"), Some("#000"));
        assert_eq!(styles.container_style.get("overflow"), Some("visible"));
        assert_eq!(styles.container_style.get("border-radius"), Some("8px"));
        assert_eq!(styles.image_style.get("object-fit"), Some("fill"));
    }

    #[test]
    fn list_and_grid() {
        assert_eq!(get_list_container_styles(10, 80.0).get("min-height"), Some("800px"));
        assert_eq!(get_list_container_styles(0, 80.0).get("min-height"), Some("0px"));
        let grid = get_stable_grid_styles(&GridOptions::default());
        assert_eq!(grid.get("grid-template-columns"), Some("repeat(3, 1fr)"));
        assert_eq!(grid.get("grid-auto-rows"), Some("minmax(200px, auto)"));
        assert_eq!(grid.get("gap"), Some("1rem"));
    }
}
