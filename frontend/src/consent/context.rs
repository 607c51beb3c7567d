use std::rc::Rc;

use log::info;
use yew::prelude::*;

use super::controller::{ConsentAction, ConsentController, ConsentView};
use super::record::{Category, ConsentLabel};
use super::storage::BrowserStorage;
use super::store::ConsentStore;
use crate::config;

/// Consent state shared by the banner, the modal and the cookies section.
#[derive(Debug, Clone)]
pub struct ConsentState {
    controller: ConsentController<BrowserStorage>,
}

impl ConsentState {
    fn load() -> Self {
        let store = ConsentStore::new(BrowserStorage, config::CONSENT_STORAGE_KEY);
        Self {
            controller: ConsentController::new(store),
        }
    }

    pub fn view(&self) -> ConsentView {
        self.controller.view()
    }

    pub fn label(&self) -> &ConsentLabel {
        self.controller.store().displayed_label()
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        self.controller.store().is_enabled(category)
    }
}

impl PartialEq for ConsentState {
    fn eq(&self, other: &Self) -> bool {
        self.view() == other.view() && self.label() == other.label()
    }
}

impl Reducible for ConsentState {
    type Action = ConsentAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut controller = self.controller.clone();
        controller.dispatch(action);
        Rc::new(Self { controller })
    }
}

pub type ConsentHandle = UseReducerHandle<ConsentState>;

/// Reads the consent context. Components outside the provider get `None`
/// and render nothing consent-related.
#[hook]
pub fn use_consent() -> Option<ConsentHandle> {
    use_context::<ConsentHandle>()
}

#[derive(Properties, PartialEq)]
pub struct ConsentProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ConsentProvider)]
pub fn consent_provider(props: &ConsentProviderProps) -> Html {
    let consent = use_reducer(ConsentState::load);

    // Optional scripts would be initialised here once their category is
    // allowed. Nothing is loaded yet, so only the gate outcome is logged.
    {
        let consent = consent.clone();
        let label = consent.label().clone();
        use_effect_with_deps(
            move |_| {
                for category in Category::ALL {
                    let allowed = consent.is_enabled(category);
                    info!(
                        "{} scripts {}",
                        category.display_name(),
                        if allowed { "allowed" } else { "blocked" }
                    );
                }
                || ()
            },
            label,
        );
    }

    html! {
        <ContextProvider<ConsentHandle> context={consent}>
            { for props.children.iter() }
        </ContextProvider<ConsentHandle>>
    }
}
