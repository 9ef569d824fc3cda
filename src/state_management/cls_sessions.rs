use dioxus::prelude::*;

use futures_util::stream::StreamExt;
use std::rc::Rc;
use tokio::sync::oneshot;

use crate::{
    cls::{
        hooks::LayoutShiftPort,
        observer::{
            measure_cls, ClsObserver, LayoutShiftEntry, LayoutShiftSink, LayoutShiftSubscription,
        },
        session::{ClsLoadingMeasurement, SessionResult},
    },
    utils::CCStr,
};

/// Loading-session measurements, refreshed after every processed command
pub static CLS_SESSIONS: GlobalSignal<ClsLoadingMeasurement> =
    Signal::global(ClsLoadingMeasurement::new);

/// Live cumulative layout shift of the whole application
pub static APPLICATION_CLS: GlobalSignal<Option<f64>> = Signal::global(|| None);

/// Commands for the CLS session service
#[derive(Debug)]
pub enum ClsSessionCommand {
    Start {
        component: CCStr,
        result: oneshot::Sender<CCStr>,
    },
    End {
        id: CCStr,
        result: oneshot::Sender<Option<SessionResult>>,
    },
    /// Internal, a shift reported by the layout-shift port
    Shift(LayoutShiftEntry),
    LogReport,
    Clear,
}

/// CLS session service coroutine
///
/// Owns the [`ClsLoadingMeasurement`] and the application wide CLS observer. Shifts from the
/// port are funneled through the command channel so that session bookkeeping has a single
/// writer.
pub(super) fn use_cls_session_service(port: LayoutShiftPort) -> Coroutine<ClsSessionCommand> {
    let service_handle = use_coroutine(
        move |mut rx: UnboundedReceiver<ClsSessionCommand>| async move {
            log::info!("cls_session_service (coroutine) - start");

            let mut measurement = ClsLoadingMeasurement::new();

            while let Some(cmd) = rx.next().await {
                log::debug!("cls_session_service (coroutine) - Processing command {cmd:?}...");
                match cmd {
                    ClsSessionCommand::Start { component, result } => {
                        let id = measurement.start_session(component);
                        if result.send(id).is_err() {
                            log::warn!("cls_session_service (coroutine) - Start requester is gone");
                        }
                    }
                    ClsSessionCommand::End { id, result } => {
                        let session = measurement.end_session(&id);
                        if result.send(session).is_err() {
                            log::warn!("cls_session_service (coroutine) - End requester is gone");
                        }
                    }
                    ClsSessionCommand::Shift(entry) => measurement.record_shift(entry),
                    ClsSessionCommand::LogReport => measurement.log_report(),
                    ClsSessionCommand::Clear => measurement.clear(),
                }
                *CLS_SESSIONS.write() = measurement.clone();
                log::debug!("cls_session_service (coroutine) - Command processed");
            }
        },
    );

    // Feed the port into the service, for as long as the application lives
    use_hook(move || {
        let forward: LayoutShiftSink = Rc::new(move |entry: LayoutShiftEntry| {
            service_handle.send(ClsSessionCommand::Shift(entry));
        });
        Rc::new(ApplicationObservation {
            shifts: port.source().observe(forward),
            observer: measure_cls(port.source(), |cls| *APPLICATION_CLS.write() = Some(cls)),
        })
    });

    service_handle
}

struct ApplicationObservation {
    shifts: Option<Box<dyn LayoutShiftSubscription>>,
    // Disconnects itself when dropped
    #[allow(dead_code)]
    observer: Option<ClsObserver>,
}

impl Drop for ApplicationObservation {
    fn drop(&mut self) {
        if let Some(mut shifts) = self.shifts.take() {
            shifts.disconnect();
        }
    }
}
