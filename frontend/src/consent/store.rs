use log::{info, warn};

use super::record::{Category, ConsentLabel, ConsentRecord};
use super::storage::{KeyValueStorage, StorageError};

/// Owns the persisted consent decision under a single key.
///
/// `displayed` is the label the page shows. It is refreshed by every write
/// and reset, so the status pill never lags behind the last decision. When
/// the backend rejects a write, the label still follows the record for the
/// rest of the session.
#[derive(Debug, Clone)]
pub struct ConsentStore<S> {
    storage: S,
    key: &'static str,
    displayed: ConsentLabel,
}

impl<S: KeyValueStorage> ConsentStore<S> {
    pub fn new(storage: S, key: &'static str) -> Self {
        let mut store = Self {
            storage,
            key,
            displayed: ConsentLabel::NoDecision,
        };
        store.displayed = store.label();
        store
    }

    /// Current decision, or `None` when nothing usable is stored.
    pub fn read(&self) -> Option<ConsentRecord> {
        match self.load() {
            Ok(record) => record,
            Err(e) => {
                warn!("Treating consent as undecided: {}", e);
                None
            }
        }
    }

    fn load(&self) -> Result<Option<ConsentRecord>, StorageError> {
        let Some(raw) = self.storage.get(self.key)? else {
            return Ok(None);
        };
        serde_json::from_str::<ConsentRecord>(&raw)
            .map(Some)
            .map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    /// Replaces the stored decision with `record`.
    pub fn write(&mut self, record: ConsentRecord) {
        let persisted = serde_json::to_string(&record)
            .map_err(|e| StorageError::Encode(e.to_string()))
            .and_then(|payload| self.storage.set(self.key, &payload));

        match persisted {
            Ok(()) => {
                info!("Stored consent decision: {:?}", record);
                self.displayed = self.label();
            }
            Err(e) => {
                warn!("Consent decision kept for this session only: {}", e);
                self.displayed = ConsentLabel::from_record(Some(&record));
            }
        }
    }

    /// Forgets the decision entirely. If the entry cannot be removed, the
    /// label still shows "no decision" for this session.
    pub fn reset(&mut self) {
        match self.storage.delete(self.key) {
            Ok(()) => {
                info!("Consent decision reset");
                self.displayed = self.label();
            }
            Err(e) => {
                warn!("Could not remove stored consent: {}", e);
                self.displayed = ConsentLabel::NoDecision;
            }
        }
    }

    pub fn label(&self) -> ConsentLabel {
        ConsentLabel::from_record(self.read().as_ref())
    }

    pub fn displayed_label(&self) -> &ConsentLabel {
        &self.displayed
    }

    /// Gate for optional scripts. Undecided means not allowed.
    pub fn is_enabled(&self, category: Category) -> bool {
        self.read().map_or(false, |r| r.allows(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::storage::testing::{BlockedStorage, MemoryStorage, UndeletableStorage};

    const KEY: &str = "gg-consent-v1";

    fn store_with(raw: Option<&str>) -> ConsentStore<MemoryStorage> {
        let storage = MemoryStorage::new();
        if let Some(raw) = raw {
            storage.set(KEY, raw).unwrap();
        }
        ConsentStore::new(storage, KEY)
    }

    #[test]
    fn stored_payloads_map_to_labels() {
        let cases = [
            (r#"{"all":true,"stat":true,"mkt":true,"ts":1700000000000}"#, "Alle akzeptiert"),
            (r#"{"all":false,"stat":true,"mkt":false,"ts":1700000000000}"#, "Benutzerdefiniert (Statistik)"),
            (r#"{"all":false,"stat":false,"mkt":true,"ts":1700000000000}"#, "Benutzerdefiniert (Marketing)"),
            (r#"{"all":false,"stat":false,"mkt":false,"ts":1700000000000}"#, "Nur notwendig"),
        ];
        for (raw, expected) in cases {
            let store = store_with(Some(raw));
            assert_eq!(store.label().to_string(), expected, "payload {}", raw);
            assert_eq!(store.displayed_label().to_string(), expected);
        }
    }

    #[test]
    fn missing_or_malformed_payload_reads_as_none() {
        for raw in [None, Some("{not json"), Some("42"), Some("")] {
            let store = store_with(raw);
            assert_eq!(store.read(), None);
            assert_eq!(store.label().to_string(), "keine Entscheidung");
        }
    }

    #[test]
    fn read_after_write_returns_the_same_record() {
        let mut store = store_with(None);
        let record = ConsentRecord::custom(true, false, 1_700_000_000_123);
        store.write(record);
        assert_eq!(store.read(), Some(record));
    }

    #[test]
    fn write_overwrites_the_whole_record() {
        let mut store = store_with(None);
        store.write(ConsentRecord::accept_all(1));
        store.write(ConsentRecord::custom(false, true, 2));
        assert_eq!(store.read(), Some(ConsentRecord::custom(false, true, 2)));
        assert_eq!(store.displayed_label().to_string(), "Benutzerdefiniert (Marketing)");
    }

    #[test]
    fn writing_twice_gives_the_same_label() {
        let mut store = store_with(None);
        let record = ConsentRecord::deny_all(5);
        store.write(record);
        let once = store.label();
        store.write(record);
        assert_eq!(store.label(), once);
        assert_eq!(store.displayed_label(), &once);
    }

    #[test]
    fn reset_returns_to_no_decision() {
        let mut store = store_with(None);
        store.write(ConsentRecord::accept_all(1));
        store.reset();
        assert_eq!(store.read(), None);
        assert_eq!(store.displayed_label(), &ConsentLabel::NoDecision);
    }

    #[test]
    fn write_repairs_a_corrupt_entry() {
        let mut store = store_with(Some("{not json"));
        store.write(ConsentRecord::accept_all(9));
        assert_eq!(store.read(), Some(ConsentRecord::accept_all(9)));
    }

    #[test]
    fn category_gate_follows_the_record() {
        let mut store = store_with(None);
        assert!(!store.is_enabled(Category::Statistics));
        assert!(!store.is_enabled(Category::Marketing));

        store.write(ConsentRecord::custom(true, false, 1));
        assert!(store.is_enabled(Category::Statistics));
        assert!(!store.is_enabled(Category::Marketing));

        store.write(ConsentRecord::accept_all(2));
        assert!(store.is_enabled(Category::Marketing));
    }

    #[test]
    fn blocked_storage_still_updates_the_session_label() {
        let mut store = ConsentStore::new(BlockedStorage, KEY);
        assert_eq!(store.displayed_label(), &ConsentLabel::NoDecision);

        store.write(ConsentRecord::accept_all(1));
        assert_eq!(store.read(), None);
        assert_eq!(store.displayed_label(), &ConsentLabel::AllAccepted);

        store.reset();
        assert_eq!(store.displayed_label(), &ConsentLabel::NoDecision);
    }

    #[test]
    fn failed_removal_still_clears_the_session_label() {
        let mut store = ConsentStore::new(UndeletableStorage::default(), KEY);
        store.write(ConsentRecord::accept_all(1));
        assert_eq!(store.displayed_label(), &ConsentLabel::AllAccepted);

        store.reset();
        assert_eq!(store.read(), Some(ConsentRecord::accept_all(1)));
        assert_eq!(store.displayed_label(), &ConsentLabel::NoDecision);
    }
}
