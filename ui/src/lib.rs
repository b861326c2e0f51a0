use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod state;
mod utils;

pub use logs::init_logging;
pub use state::State;

use components::{RequireAuth, ToastContainer, layout::AdminLayout};
use contexts::toast::ToastProvider;
use pages::{
    CampaignsPage, DashboardPage, EmployeesPage, LoginPage, NotFoundPage,
    RegionsPage,
};

/// API client for the admin api. `API_URL` is read at build time; without
/// it the page's own origin is used.
pub fn get_api_client() -> APIClient {
    let address = option_env!("API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| {
            web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_default()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <div class="min-h-screen bg-neutral-50 dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
                    <Switch<Route> render={switch} />
                </div>
                <ToastContainer />
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/admin/dashboard")]
    Dashboard,
    #[at("/admin/employees")]
    Employees,
    #[at("/admin/regions")]
    Regions,
    #[at("/admin/campaigns")]
    Campaigns,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Entries of the admin sidebar, in display order.
    pub const ADMIN_NAV: [Route; 4] = [
        Route::Dashboard,
        Route::Employees,
        Route::Regions,
        Route::Campaigns,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Route::Login => "Sign in",
            Route::Dashboard => "Dashboard",
            Route::Employees => "Employees",
            Route::Regions => "Regions",
            Route::Campaigns => "Campaigns",
            Route::NotFound => "Not found",
        }
    }
}

fn admin(page: Html) -> Html {
    html! {
        <RequireAuth>
            <AdminLayout>{page}</AdminLayout>
        </RequireAuth>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => admin(html! { <DashboardPage /> }),
        Route::Employees => admin(html! { <EmployeesPage /> }),
        Route::Regions => admin(html! { <RegionsPage /> }),
        Route::Campaigns => admin(html! { <CampaignsPage /> }),
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
