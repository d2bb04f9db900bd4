//! Write-once cache of measured panel sizes

use std::collections::HashMap;

use crate::geometry::{PanelDimension, Rect};
use crate::panel::PanelKey;

/// Measured panel sizes, recorded at most once per key per mount
#[derive(Debug, Clone, Default)]
pub struct DimensionCache {
    measured: HashMap<PanelKey, PanelDimension>,
}

impl DimensionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `rect` for `key` unless a size is already known.
    ///
    /// `rect` is only read when the key is unmeasured. Returns the recorded
    /// dimension on the first measurement, `None` afterwards.
    pub fn measure(
        &mut self,
        key: &PanelKey,
        rect: impl FnOnce() -> Option<Rect>,
    ) -> Option<PanelDimension> {
        if self.measured.contains_key(key) {
            return None;
        }

        let dimension = PanelDimension::from(rect()?);
        tracing::debug!(
            key = %key,
            width = dimension.width,
            height = dimension.height,
            "Measured panel"
        );
        self.measured.insert(key.clone(), dimension);
        Some(dimension)
    }

    pub fn get(&self, key: &PanelKey) -> Option<PanelDimension> {
        self.measured.get(key).copied()
    }

    pub fn is_measured(&self, key: &PanelKey) -> bool {
        self.measured.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.measured.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measured.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_measurement_wins() {
        let mut cache = DimensionCache::new();

        let first = cache.measure(&PanelKey::WELCOME, || {
            Some(Rect::new(0.0, 0.0, 512.0, 240.0))
        });
        let second = cache.measure(&PanelKey::WELCOME, || {
            Some(Rect::new(0.0, 0.0, 100.0, 100.0))
        });

        assert_eq!(first, Some(PanelDimension::new(512.0, 240.0)));
        assert_eq!(second, None);
        assert_eq!(
            cache.get(&PanelKey::WELCOME),
            Some(PanelDimension::new(512.0, 240.0))
        );
    }

    #[test]
    fn test_measured_key_skips_element_read() {
        let mut cache = DimensionCache::new();
        cache.measure(&PanelKey::SETTINGS, || Some(Rect::new(0.0, 0.0, 1.0, 1.0)));

        let mut read = false;
        cache.measure(&PanelKey::SETTINGS, || {
            read = true;
            None
        });

        assert!(!read);
    }

    #[test]
    fn test_missing_element_leaves_key_unmeasured() {
        let mut cache = DimensionCache::new();

        assert_eq!(cache.measure(&PanelKey::WELCOME, || None), None);
        assert!(!cache.is_measured(&PanelKey::WELCOME));
    }
}
