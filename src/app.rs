use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::pages::dashboard::DashboardPage;
use crate::pages::landing::LandingPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p>"Page not found"</p> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/dashboard") view=DashboardPage />
            </Routes>
        </Router>
    }
}
