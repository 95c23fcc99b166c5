use gloo::storage::{LocalStorage, Storage};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

/// Key under which a value lives in the browser's local storage.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

impl<T: StorageKey> StorageKey for Option<T> {
    const KEY: &'static str = T::KEY;
}

pub(crate) trait LocalOrDefault: Sized {
    fn local_or_default() -> Self;
}

impl<T: StorageKey + DeserializeOwned + Default> LocalOrDefault for T {
    fn local_or_default() -> Self {
        LocalStorage::get(Self::KEY).unwrap_or_default()
    }
}

pub(crate) trait LocalSave {
    fn local_save(&self);
}

impl<T: StorageKey + Serialize> LocalSave for T {
    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(Self::KEY, self) {
            log::error!("Could not save {} to local storage: {:?}", Self::KEY, err);
        }
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Milliseconds for browser timers, which take a `u32`.
pub(crate) fn timer_millis(delay: Duration) -> u32 {
    delay.as_millis().try_into().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_millis_saturates() {
        assert_eq!(timer_millis(Duration::from_millis(1500)), 1500);
        assert_eq!(timer_millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::theme::Theme;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn math_random_seeds_vary() {
        assert_ne!(js_random_seed(), js_random_seed());
    }

    #[wasm_bindgen_test]
    fn theme_preference_survives_a_reload() {
        Some(Theme::Dark).local_save();
        assert_eq!(Option::<Theme>::local_or_default(), Some(Theme::Dark));

        None::<Theme>.local_save();
        assert_eq!(Option::<Theme>::local_or_default(), None);
    }
}
