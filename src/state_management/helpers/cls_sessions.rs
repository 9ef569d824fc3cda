use super::*;

use std::future::Future;

use crate::utils::async_sleep;

/// Grace period letting late shifts of a finished loading phase land in its session
const SETTLE_MS: u64 = 100;

pub async fn start_loading_session(
    cls_session_service: Coroutine<ClsSessionCommand>,
    component: impl Into<CCStr>,
) -> Option<CCStr> {
    log::debug!("start_loading_session - start");
    let (result, rx) = oneshot::channel();
    cls_session_service.send(ClsSessionCommand::Start {
        component: component.into(),
        result,
    });
    let id = rx
        .await
        .map_err(|e| log::error!("cls_session_service error: {e}"))
        .ok();
    log::debug!("start_loading_session - finished");
    id
}

pub async fn end_loading_session(
    cls_session_service: Coroutine<ClsSessionCommand>,
    id: CCStr,
) -> Option<SessionResult> {
    log::debug!("end_loading_session - start");
    let (result, rx) = oneshot::channel();
    cls_session_service.send(ClsSessionCommand::End { id, result });
    let session = rx
        .await
        .map_err(|e| log::error!("cls_session_service error: {e}"))
        .ok()
        .flatten();
    log::debug!("end_loading_session - finished");
    session
}

/// Runs `loading` inside a CLS session named after `component` and returns its output
/// together with the session result
pub async fn measure_loading<T, F>(
    cls_session_service: Coroutine<ClsSessionCommand>,
    component: impl Into<CCStr>,
    loading: F,
) -> (T, Option<SessionResult>)
where
    F: Future<Output = T>,
{
    let id = start_loading_session(cls_session_service, component).await;
    let output = loading.await;
    async_sleep(SETTLE_MS).await;
    let session = match id {
        Some(id) => end_loading_session(cls_session_service, id).await,
        None => None,
    };
    (output, session)
}

pub fn log_cls_report(cls_session_service: Coroutine<ClsSessionCommand>) {
    cls_session_service.send(ClsSessionCommand::LogReport);
}

pub fn clear_cls_measurements(cls_session_service: Coroutine<ClsSessionCommand>) {
    cls_session_service.send(ClsSessionCommand::Clear);
}
