mod cls_sessions;

use dioxus::prelude::*;

use tokio::sync::oneshot;

use crate::{cls::session::SessionResult, utils::CCStr};

use super::cls_sessions::ClsSessionCommand;

pub use cls_sessions::*;
