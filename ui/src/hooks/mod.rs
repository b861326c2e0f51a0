pub mod use_campaigns;
pub mod use_debounced;
pub mod use_employees;
pub mod use_expansion;
pub mod use_fetch;
pub mod use_logout;
pub mod use_mutation;
pub mod use_region_assignments;
pub mod use_require_auth;
pub mod use_title;

pub use use_campaigns::{use_campaign_search, use_campaign_stats, use_campaigns};
pub use use_debounced::use_debounced;
pub use use_employees::{
    use_employee_filter_options, use_employee_filters, use_employees,
};
pub use use_expansion::use_expansion;
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_logout::use_logout;
pub use use_mutation::{MutationMessages, use_mutation};
pub use use_region_assignments::{
    use_assignment_form_options, use_grouped_region_assignments,
    use_region_assignments, use_region_filters,
};
pub use use_require_auth::use_require_auth;
pub use use_title::use_title;

/// Distinguishes "not fetched yet" from "fetched", so an empty result can
/// be told apart from one that hasn't arrived.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchState::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            FetchState::NotFetched => None,
            FetchState::Fetched(data) => Some(data),
        }
    }
}
