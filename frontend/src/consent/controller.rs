use log::debug;

use super::record::{Category, ConsentRecord};
use super::storage::KeyValueStorage;
use super::store::ConsentStore;

/// Checkbox selections staged in the preferences modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Draft {
    pub stat: bool,
    pub mkt: bool,
}

impl Draft {
    pub fn seeded_from(record: Option<&ConsentRecord>) -> Self {
        record.map_or_else(Draft::default, |r| Draft { stat: r.stat, mkt: r.mkt })
    }

    pub fn get(&self, category: Category) -> bool {
        match category {
            Category::Statistics => self.stat,
            Category::Marketing => self.mkt,
        }
    }

    fn with(mut self, category: Category, enabled: bool) -> Self {
        match category {
            Category::Statistics => self.stat = enabled,
            Category::Marketing => self.mkt = enabled,
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentView {
    Hidden,
    BannerShown,
    ModalShown(Draft),
}

impl ConsentView {
    pub fn initial(record: Option<&ConsentRecord>) -> Self {
        if record.is_none() {
            ConsentView::BannerShown
        } else {
            ConsentView::Hidden
        }
    }

    pub fn banner_visible(&self) -> bool {
        matches!(self, ConsentView::BannerShown)
    }

    pub fn draft(&self) -> Option<Draft> {
        match self {
            ConsentView::ModalShown(draft) => Some(*draft),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentAction {
    AcceptAll,
    DenyAll,
    OpenPreferences,
    SetDraft(Category, bool),
    SavePreferences,
    Cancel,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEffect {
    None,
    Write(ConsentRecord),
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: ConsentView,
    pub effect: StoreEffect,
}

impl Transition {
    fn to(next: ConsentView) -> Self {
        Self { next, effect: StoreEffect::None }
    }

    fn writing(next: ConsentView, record: ConsentRecord) -> Self {
        Self { next, effect: StoreEffect::Write(record) }
    }
}

/// Pure transition function of the banner/modal state machine.
///
/// `current` is the stored record at the time of the action; it only seeds
/// the draft when the modal opens. Actions whose precondition does not hold
/// leave the view as it is.
pub fn transition(
    view: ConsentView,
    action: ConsentAction,
    current: Option<&ConsentRecord>,
    now_ms: i64,
) -> Transition {
    match (view, action) {
        (_, ConsentAction::AcceptAll) => {
            Transition::writing(ConsentView::Hidden, ConsentRecord::accept_all(now_ms))
        }
        (_, ConsentAction::DenyAll) => {
            Transition::writing(ConsentView::Hidden, ConsentRecord::deny_all(now_ms))
        }
        (ConsentView::Hidden | ConsentView::BannerShown, ConsentAction::OpenPreferences) => {
            Transition::to(ConsentView::ModalShown(Draft::seeded_from(current)))
        }
        (ConsentView::ModalShown(draft), ConsentAction::SetDraft(category, enabled)) => {
            Transition::to(ConsentView::ModalShown(draft.with(category, enabled)))
        }
        (ConsentView::ModalShown(draft), ConsentAction::SavePreferences) => Transition::writing(
            ConsentView::Hidden,
            ConsentRecord::custom(draft.stat, draft.mkt, now_ms),
        ),
        // Leaving the modal never brings the banner back, even when nothing
        // was saved.
        (ConsentView::ModalShown(_), ConsentAction::Cancel) => Transition::to(ConsentView::Hidden),
        (_, ConsentAction::Reset) => Transition {
            next: ConsentView::BannerShown,
            effect: StoreEffect::Reset,
        },
        (view, _) => Transition::to(view),
    }
}

/// Current epoch milliseconds from the browser clock.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Couples the state machine to a store and applies each transition's
/// effect before the new view becomes visible.
#[derive(Debug, Clone)]
pub struct ConsentController<S> {
    store: ConsentStore<S>,
    view: ConsentView,
    clock: fn() -> i64,
}

impl<S: KeyValueStorage> ConsentController<S> {
    pub fn new(store: ConsentStore<S>) -> Self {
        Self::with_clock(store, now_ms)
    }

    pub fn with_clock(store: ConsentStore<S>, clock: fn() -> i64) -> Self {
        let view = ConsentView::initial(store.read().as_ref());
        Self { store, view, clock }
    }

    pub fn view(&self) -> ConsentView {
        self.view
    }

    pub fn store(&self) -> &ConsentStore<S> {
        &self.store
    }

    pub fn dispatch(&mut self, action: ConsentAction) {
        let current = match action {
            ConsentAction::OpenPreferences => self.store.read(),
            _ => None,
        };
        let Transition { next, effect } =
            transition(self.view, action, current.as_ref(), (self.clock)());

        match effect {
            StoreEffect::None => {}
            StoreEffect::Write(record) => self.store.write(record),
            StoreEffect::Reset => self.store.reset(),
        }
        debug!("Consent {:?}: {:?} -> {:?}", action, self.view, next);
        self.view = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::record::ConsentLabel;
    use crate::consent::storage::testing::MemoryStorage;

    const KEY: &str = "gg-consent-v1";
    const NOW: i64 = 1_700_000_000_000;

    fn fixed_clock() -> i64 {
        NOW
    }

    fn controller_with(raw: Option<&str>) -> (ConsentController<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        if let Some(raw) = raw {
            storage.set(KEY, raw).unwrap();
        }
        let store = ConsentStore::new(storage.clone(), KEY);
        (ConsentController::with_clock(store, fixed_clock), storage)
    }

    #[test]
    fn banner_shows_only_without_a_decision() {
        assert_eq!(controller_with(None).0.view(), ConsentView::BannerShown);
        assert_eq!(controller_with(Some("{not json")).0.view(), ConsentView::BannerShown);
        assert_eq!(
            controller_with(Some(r#"{"all":false,"stat":false,"mkt":false,"ts":1}"#)).0.view(),
            ConsentView::Hidden
        );
    }

    #[test]
    fn accept_all_writes_full_record_and_hides() {
        let (mut controller, _) = controller_with(None);
        controller.dispatch(ConsentAction::AcceptAll);
        assert_eq!(controller.view(), ConsentView::Hidden);
        assert_eq!(controller.store().read(), Some(ConsentRecord::accept_all(NOW)));
        assert_eq!(controller.store().displayed_label(), &ConsentLabel::AllAccepted);
    }

    #[test]
    fn deny_all_writes_necessary_only() {
        let (mut controller, _) = controller_with(None);
        controller.dispatch(ConsentAction::DenyAll);
        assert_eq!(controller.view(), ConsentView::Hidden);
        assert_eq!(controller.store().read(), Some(ConsentRecord::deny_all(NOW)));
    }

    #[test]
    fn opening_preferences_seeds_draft_from_record() {
        let stored = r#"{"all":false,"stat":true,"mkt":false,"ts":5}"#;
        let (mut controller, storage) = controller_with(Some(stored));
        controller.dispatch(ConsentAction::OpenPreferences);
        assert_eq!(
            controller.view(),
            ConsentView::ModalShown(Draft { stat: true, mkt: false })
        );

        controller.dispatch(ConsentAction::SetDraft(Category::Marketing, true));
        controller.dispatch(ConsentAction::Cancel);
        assert_eq!(controller.view(), ConsentView::Hidden);
        assert_eq!(storage.get(KEY).unwrap().as_deref(), Some(stored));
    }

    #[test]
    fn opening_preferences_without_record_defaults_to_unchecked() {
        let (mut controller, _) = controller_with(None);
        controller.dispatch(ConsentAction::OpenPreferences);
        assert_eq!(controller.view(), ConsentView::ModalShown(Draft::default()));
    }

    #[test]
    fn saving_both_categories_stays_custom() {
        let (mut controller, _) = controller_with(None);
        controller.dispatch(ConsentAction::OpenPreferences);
        controller.dispatch(ConsentAction::SetDraft(Category::Statistics, true));
        controller.dispatch(ConsentAction::SetDraft(Category::Marketing, true));
        controller.dispatch(ConsentAction::SavePreferences);

        assert_eq!(controller.view(), ConsentView::Hidden);
        assert_eq!(controller.store().read(), Some(ConsentRecord::custom(true, true, NOW)));
        assert_eq!(
            controller.store().displayed_label().to_string(),
            "Benutzerdefiniert (Statistik, Marketing)"
        );
    }

    #[test]
    fn reset_rearms_the_banner() {
        let (mut controller, _) = controller_with(None);
        controller.dispatch(ConsentAction::AcceptAll);
        controller.dispatch(ConsentAction::Reset);
        assert_eq!(controller.view(), ConsentView::BannerShown);
        assert_eq!(controller.store().read(), None);
        assert_eq!(controller.store().displayed_label(), &ConsentLabel::NoDecision);
    }

    #[test]
    fn cancel_from_banner_entry_suppresses_banner() {
        let (mut controller, _) = controller_with(None);
        controller.dispatch(ConsentAction::OpenPreferences);
        controller.dispatch(ConsentAction::Cancel);
        assert_eq!(controller.view(), ConsentView::Hidden);
        assert_eq!(controller.store().read(), None);
    }

    #[test]
    fn modal_only_actions_are_ignored_elsewhere() {
        for view in [ConsentView::Hidden, ConsentView::BannerShown] {
            for action in [
                ConsentAction::SavePreferences,
                ConsentAction::Cancel,
                ConsentAction::SetDraft(Category::Statistics, true),
            ] {
                let t = transition(view, action, None, NOW);
                assert_eq!(t.next, view, "{:?} in {:?}", action, view);
                assert_eq!(t.effect, StoreEffect::None);
            }
        }
    }

    #[test]
    fn open_preferences_is_ignored_while_modal_is_open() {
        let draft = Draft { stat: true, mkt: true };
        let record = ConsentRecord::deny_all(1);
        let t = transition(
            ConsentView::ModalShown(draft),
            ConsentAction::OpenPreferences,
            Some(&record),
            NOW,
        );
        assert_eq!(t.next, ConsentView::ModalShown(draft));
        assert_eq!(t.effect, StoreEffect::None);
    }

    #[test]
    fn decisions_are_accepted_from_any_view() {
        for view in [
            ConsentView::Hidden,
            ConsentView::BannerShown,
            ConsentView::ModalShown(Draft::default()),
        ] {
            let t = transition(view, ConsentAction::AcceptAll, None, NOW);
            assert_eq!(t.next, ConsentView::Hidden);
            assert_eq!(t.effect, StoreEffect::Write(ConsentRecord::accept_all(NOW)));

            let t = transition(view, ConsentAction::Reset, None, NOW);
            assert_eq!(t.next, ConsentView::BannerShown);
            assert_eq!(t.effect, StoreEffect::Reset);
        }
    }
}
