//! Cookie consent: the persisted decision, the banner/modal state machine
//! and the Yew context that shares both across the page.

pub mod context;
pub mod controller;
pub mod record;
pub mod storage;
pub mod store;

pub use context::{use_consent, ConsentProvider};
pub use controller::{ConsentAction, Draft};
pub use record::Category;
