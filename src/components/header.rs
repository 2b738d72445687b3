use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Dashboard top bar: brand block, signed-in user chip, sign out.
///
/// Sign out just navigates back to the landing page; there is no session to
/// tear down.
#[component]
pub fn DashboardHeader() -> impl IntoView {
    let navigate = use_navigate();
    let on_sign_out = move |_| {
        navigate("/", Default::default());
    };

    view! {
        <header class="dashboard-header">
            <div class="header-brand">
                <div>
                    <h1 class="header-title">"Areca AI Dashboard"</h1>
                    <p class="header-subtitle">"Plant Health Detection"</p>
                </div>
            </div>
            <div class="header-actions">
                <span class="header-user">"John Doe"</span>
                <button class="btn btn-secondary btn-small" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </div>
        </header>
    }
}
