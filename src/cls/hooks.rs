use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

use super::{
    observer::{measure_cls, ClsObserver, LayoutShiftSource, UnsupportedLayoutShiftSource},
    ClsRating,
};

/// The layout-shift capability made available to the component tree
#[derive(Clone)]
pub struct LayoutShiftPort(Rc<dyn LayoutShiftSource>);

impl LayoutShiftPort {
    pub fn new(source: impl LayoutShiftSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub fn source(&self) -> &dyn LayoutShiftSource {
        self.0.as_ref()
    }
}

impl PartialEq for LayoutShiftPort {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Installs `source` as the layout-shift capability of the current subtree
pub fn use_layout_shift_port_provider(
    source: impl FnOnce() -> LayoutShiftPort,
) -> LayoutShiftPort {
    use_context_provider(source)
}

/// Closest layout-shift capability, an unsupported one when none was provided
pub fn use_layout_shift_port() -> LayoutShiftPort {
    use_hook(|| {
        try_consume_context::<LayoutShiftPort>()
            .unwrap_or_else(|| LayoutShiftPort::new(UnsupportedLayoutShiftSource))
    })
}

/// Reactive cumulative layout shift of the page since the calling component mounted
#[derive(Clone, Copy, PartialEq)]
pub struct ClsMeasurement {
    pub cls: ReadOnlySignal<f64>,
    pub supported: bool,
}

impl ClsMeasurement {
    pub fn rating(&self) -> ClsRating {
        ClsRating::classify(*self.cls.read())
    }

    pub fn is_good(&self) -> bool {
        self.rating() == ClsRating::Good
    }

    pub fn needs_improvement(&self) -> bool {
        self.rating() == ClsRating::NeedsImprovement
    }

    pub fn is_poor(&self) -> bool {
        self.rating() == ClsRating::Poor
    }
}

/// Observes layout shifts while the calling component is mounted
pub fn use_cls_measurement() -> ClsMeasurement {
    let port = use_layout_shift_port();
    let cls = use_signal(|| 0.0);

    let observer: Rc<RefCell<Option<ClsObserver>>> = use_hook(|| {
        Rc::new(RefCell::new(measure_cls(port.source(), move |value| {
            let mut cls = cls;
            cls.set(value);
        })))
    });
    let supported = observer.borrow().is_some();

    use_drop(move || {
        if let Some(mut observer) = observer.borrow_mut().take() {
            observer.disconnect();
        }
    });

    ClsMeasurement {
        cls: cls.into(),
        supported,
    }
}
