mod campaigns;
mod dashboard;
mod employees;
mod login;
mod not_found;
mod regions;

pub use campaigns::CampaignsPage;
pub use dashboard::DashboardPage;
pub use employees::EmployeesPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use regions::RegionsPage;
