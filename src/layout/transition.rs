use super::style::Style;

const TRANSITION: &str = "opacity 200ms ease-in-out, transform 200ms ease-in-out";
const WILL_CHANGE: &str = "opacity, transform";

/// Visual state of a region switching between loading and loaded.
///
/// Only compositor properties (`opacity`, `transform`) are ever produced: dimension or
/// position properties would move neighbouring content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingTransition {
    pub opacity: f64,
    pub transform: &'static str,
    pub transition: &'static str,
    pub will_change: &'static str,
}

pub fn get_loading_transition_styles(is_loading: bool) -> LoadingTransition {
    LoadingTransition {
        opacity: if is_loading { 0.6 } else { 1.0 },
        transform: if is_loading { "scale(0.98)" } else { "scale(1)" },
        transition: TRANSITION,
        will_change: WILL_CHANGE,
    }
}

impl LoadingTransition {
    pub fn to_style(&self) -> Style {
        Style::new()
            .with("opacity", self.opacity)
            .with("transform", self.transform)
            .with("transition", self.transition)
            .with("will-change", self.will_change)
    }
}

impl From<LoadingTransition> for Style {
    fn from(value: LoadingTransition) -> Self {
        value.to_style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT_PROPERTIES: [&str; 8] = [
        "width", "height", "top", "left", "right", "bottom", "margin", "padding",
    ];

    #[test]
    fn loading_and_loaded_values() {
        let loading = get_loading_transition_styles(true);
        assert_eq!(loading.opacity, 0.6);
        assert_eq!(loading.transform, "scale(0.98)");
        let loaded = get_loading_transition_styles(false);
        assert_eq!(loaded.opacity, 1.0);
        assert_eq!(loaded.transform, "scale(1)");
        assert_eq!(loading.transition, loaded.transition);
        assert_eq!(loading.will_change, "opacity, transform");
    }

    #[test]
    fn rendered_style() {
        assert_eq!(
            get_loading_transition_styles(true).to_style().to_string(),
            "opacity: 0.6; transform: scale(0.98); \
             transition: opacity 200ms ease-in-out, transform 200ms ease-in-out; \
             will-change: opacity, transform;"
        );
        assert_eq!(
            get_loading_transition_styles(false).to_style().get("opacity"),
            Some("1")
        );
    }

    #[test]
    fn never_touches_layout_properties() {
        for is_loading in [true, false] {
            let style: Style = get_loading_transition_styles(is_loading).into();
            for property in style.properties() {
                assert!(
                    !LAYOUT_PROPERTIES.iter().any(|p| property.starts_with(p)),
                    "{property} affects layout"
                );
            }
        }
    }
}
