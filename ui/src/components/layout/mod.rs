pub mod admin_layout;
pub mod sidebar;
pub mod topbar;

pub use admin_layout::AdminLayout;
pub use sidebar::Sidebar;
pub use topbar::Topbar;
