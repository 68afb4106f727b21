//! Wire models and request parameters for the AccessGrid API.

mod card;
mod event;
mod template;

pub use card::{
    Card, CardList, CardState, ListCardsParams, ParseCardStateError, ProvisionCardParams,
    UpdateCardParams,
};
pub use event::{Event, EventLogFilters, EventLogPage, Pagination};
pub use template::{
    CreateTemplateParams, Platform, Protocol, SupportInfo, Template, TemplateDesign, UseCase,
    UpdateTemplateParams,
};
