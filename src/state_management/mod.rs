use dioxus::prelude::*;

use crate::cls::hooks::LayoutShiftPort;

mod cls_sessions;
mod helpers;

pub fn use_init_services(port: LayoutShiftPort) {
    log::debug!("init_services - start");
    let cls_session_service = cls_sessions::use_cls_session_service(port);
    use_context_provider(|| cls_session_service);
    log::debug!("init_services - finished");
}

pub fn use_cls_session_service() -> Coroutine<cls_sessions::ClsSessionCommand> {
    use_context()
}

pub mod prelude {
    pub mod state_management {
        pub use super::super::cls_sessions::{APPLICATION_CLS, CLS_SESSIONS};
        pub use super::super::helpers::*;
        pub use super::super::use_cls_session_service;
    }
}
