use entity::{Locale, ViewSettings};

/// State-change notifications emitted by [`crate::EmployeeStore`].
///
/// Payloads are snapshots taken after the mutation; subscribers that need
/// more than the payload re-read the store once the handler returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmployeeEvent {
    EmployeesChanged { total: usize },
    SettingsChanged(ViewSettings),
    SelectionChanged { selected: usize },
}

/// State-change notifications emitted by [`crate::AppStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    LocaleChanged(Locale),
}

/// Subscriber list. Handlers run synchronously, in subscription order.
pub(crate) struct Subscribers<E> {
    callbacks: Vec<Box<dyn Fn(&E)>>,
}

impl<E> Subscribers<E> {
    pub(crate) fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, callback: Box<dyn Fn(&E)>) {
        self.callbacks.push(callback);
    }

    pub(crate) fn emit(&self, event: &E) {
        for callback in &self.callbacks {
            callback(event);
        }
    }
}
