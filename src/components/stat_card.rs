use leptos::prelude::*;

/// One summary card in the dashboard stats row.
#[component]
pub fn StatCard(
    /// The stat label, e.g. "Total Scans"
    #[prop(into)]
    label: String,
    /// The displayed value
    #[prop(into)]
    value: Signal<String>,
    /// Accent class controlling the value color
    #[prop(into)]
    accent: String,
) -> impl IntoView {
    let value_class = format!("stat-value {}", accent);

    view! {
        <div class="card stat-card">
            <p class="stat-label">{label}</p>
            <p class=value_class>{move || value.get()}</p>
        </div>
    }
}
