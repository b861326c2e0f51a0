pub mod campaigns;
pub mod confirmation_modal;
pub mod employees;
pub mod form;
pub mod layout;
pub mod modal;
pub mod pagination_controls;
pub mod regions;
pub mod require_auth;
pub mod stat_card;
pub mod status_badge;
pub mod toast;

pub use confirmation_modal::ConfirmationModal;
pub use modal::Modal;
pub use pagination_controls::{PageNavigator, PaginationControls};
pub use require_auth::RequireAuth;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use toast::ToastContainer;
