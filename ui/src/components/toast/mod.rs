mod toast_container;
mod toast_item;

pub use toast_container::ToastContainer;
use toast_item::ToastItem;
