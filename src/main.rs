#![windows_subsystem = "windows"]
mod cls;
mod components;
mod config;
mod coordination;
mod data;
mod layout;
mod loaded;
mod state_management;
mod utils;
mod views;

mod prelude {
    pub use super::cls::prelude::*;
    pub use super::components::skeletons::{JobCardSkeleton, ListItemSkeleton, Skeleton};
    pub use super::config::{use_layout_config, LayoutConfig};
    pub use super::coordination::prelude::*;
    pub use super::layout::prelude::*;
    pub use super::loaded::prelude::*;
    pub use super::state_management::prelude::*;
    pub use super::utils::CCStr;
    pub use dioxus::prelude::*;
}

use serde::{Deserialize, Serialize};

use prelude::*;

use cls::hooks::use_layout_shift_port_provider;
use config::use_layout_config_provider;
use views::{
    courses::CoursesView, jobs::JobsView, main_layout::MainLayout, metrics::MetricsView,
    profile::ProfileView,
};

#[derive(Clone, Routable, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        JobsView {},
        #[route("/courses")]
        CoursesView {},
        #[route("/profile")]
        ProfileView {},
        #[route("/metrics")]
        MetricsView {},
    #[end_layout]
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

static TITLE: &str = "Shiftless Board";

#[allow(non_snake_case)]
fn App() -> Element {
    log::debug!("App reload");

    let config = use_layout_config_provider(LayoutConfig::from_env);
    let port = use_layout_shift_port_provider(|| LayoutShiftPort::new(WebviewLayoutShiftSource));
    crate::state_management::use_init_services(port);

    use_drop(|| log::debug!("App Dropped"));

    rsx! {
        document::Title { "{TITLE}" }
        document::Stylesheet { href: asset!("/assets/main.css") }

        div {
            id: "app",
            class: if config.read().reduced_motion { "reduced-motion" },
            Router::<Route> {}
        }
    }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        h1 { "Page not found" }
        p { "We are terribly sorry, but the page you requested doesn't exist." }
        pre { color: "red", "log:\nattemped to navigate to: {route:?}" }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    log::info!("starting app");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, WindowBuilder};
        LaunchBuilder::desktop()
            .with_cfg(
                Config::new().with_menu(None).with_window(
                    WindowBuilder::new()
                        .with_title(TITLE)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280, 900))
                        .with_resizable(true),
                ),
            )
            .launch(App)
    }

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App)
}
