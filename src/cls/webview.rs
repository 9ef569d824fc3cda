use dioxus::prelude::*;

use serde::Deserialize;

use super::observer::{LayoutShiftEntry, LayoutShiftSink, LayoutShiftSource, LayoutShiftSubscription};

const OBSERVE_JS: &str = r#"
const key = "__KEY__";
if (typeof PerformanceObserver === "undefined"
    || !(PerformanceObserver.supportedEntryTypes || []).includes("layout-shift")) {
    dioxus.send({ kind: "unsupported" });
} else {
    window.__layoutShiftObservers = window.__layoutShiftObservers || {};
    const observer = new PerformanceObserver((list) => {
        for (const entry of list.getEntries()) {
            dioxus.send({
                kind: "entry",
                value: entry.value,
                hadRecentInput: entry.hadRecentInput,
                startTime: entry.startTime,
            });
        }
    });
    observer.observe({ type: "layout-shift", buffered: true });
    window.__layoutShiftObservers[key] = observer;
}
"#;

const DISCONNECT_JS: &str = r#"
const observers = window.__layoutShiftObservers || {};
if (observers["__KEY__"]) {
    observers["__KEY__"].disconnect();
    delete observers["__KEY__"];
}
"#;

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum WebviewMessage {
    Entry(LayoutShiftEntry),
    Unsupported,
}

/// Layout shifts observed by a `PerformanceObserver` running in the webview.
///
/// Must be used from within the Dioxus runtime: observing spawns a task forwarding the
/// entries to the sink. Whether the webview supports layout-shift entries is only known
/// once the script ran; when it does not, the forwarding task ends right away and the
/// observer simply never reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebviewLayoutShiftSource;

impl LayoutShiftSource for WebviewLayoutShiftSource {
    fn observe(&self, sink: LayoutShiftSink) -> Option<Box<dyn LayoutShiftSubscription>> {
        let key = uuid::Uuid::new_v4().simple().to_string();
        let mut eval = document::eval(&OBSERVE_JS.replace("__KEY__", &key));

        let task = spawn(async move {
            log::debug!("webview layout-shift observer - start");
            loop {
                match eval.recv::<WebviewMessage>().await {
                    Ok(WebviewMessage::Entry(entry)) => sink(entry),
                    Ok(WebviewMessage::Unsupported) => {
                        log::warn!("PerformanceObserver layout-shift not supported by the webview");
                        break;
                    }
                    Err(e) => {
                        log::error!("webview layout-shift observer failed: {e}");
                        break;
                    }
                }
            }
            log::debug!("webview layout-shift observer - end");
        });

        Some(Box::new(WebviewSubscription { key, task }))
    }
}

struct WebviewSubscription {
    key: String,
    task: Task,
}

impl LayoutShiftSubscription for WebviewSubscription {
    fn disconnect(&mut self) {
        self.task.cancel();
        let _ = document::eval(&DISCONNECT_JS.replace("__KEY__", &self.key));
    }
}
