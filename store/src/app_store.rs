use entity::Locale;
use platform_storage::Storage;

use crate::event::{AppEvent, Subscribers};
use crate::{StoreResult, persist};

/// Application-level preferences: currently just the UI locale.
pub struct AppStore {
    storage: Box<dyn Storage>,
    locale: Locale,
    subscribers: Subscribers<AppEvent>,
}

impl AppStore {
    pub fn load(storage: Box<dyn Storage>) -> StoreResult<Self> {
        let locale = persist::load_app_settings(storage.as_ref())?;
        Ok(Self {
            storage,
            locale,
            subscribers: Subscribers::new(),
        })
    }

    pub fn subscribe(&mut self, callback: impl Fn(&AppEvent) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch locale, persist, and notify. Setting the current locale again
    /// still persists and notifies. Unknown locale *codes* never reach this
    /// method; [`Locale::from_code`] rejects them and callers drop the
    /// request silently.
    pub fn set_locale(&mut self, locale: Locale) -> StoreResult<()> {
        self.locale = locale;
        persist::save_app_settings(self.storage.as_mut(), locale)?;
        self.subscribers.emit(&AppEvent::LocaleChanged(locale));
        Ok(())
    }

    /// Owned copy of the supported locale set, not a live reference.
    pub fn supported_locales(&self) -> Vec<Locale> {
        Locale::ALL.to_vec()
    }
}
