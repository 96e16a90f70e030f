//! Admin dashboard: every report, with the status-change affordance.

use crate::api::use_api;
use crate::components::incident_list::IncidentList;
use crate::notify::use_notifier;
use ajali_shared::{IncidentReport, IncidentStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();

    let (incidents, set_incidents) = signal(Vec::<IncidentReport>::new());
    let (loading, set_loading) = signal(true);

    let fetch_incidents = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.list_incidents().await {
                    Ok(reports) => set_incidents.set(reports),
                    Err(err) => notifier.error(err.message()),
                }
                set_loading.set(false);
            });
        }
    };

    {
        let fetch_incidents = fetch_incidents.clone();
        Effect::new(move |_| {
            fetch_incidents();
        });
    }

    let on_status_change = {
        let api = api.clone();
        let fetch_incidents = fetch_incidents.clone();
        move |(id, status): (i64, IncidentStatus)| {
            let api = api.clone();
            let fetch_incidents = fetch_incidents.clone();
            spawn_local(async move {
                match api.update_incident_status(id, status).await {
                    Ok(_) => {
                        notifier.success("Status updated successfully");
                        fetch_incidents();
                    }
                    Err(err) => notifier.error(err.message()),
                }
            });
        }
    };

    view! {
        <div class="max-w-3xl mx-auto px-4 py-8 space-y-6">
            <h2 class="text-2xl font-bold">"All Incidents"</h2>

            <Show
                when=move || !loading.get() || incidents.with(|list| !list.is_empty())
                fallback=|| view! {
                    <div class="text-center py-12">
                        <span class="loading loading-spinner loading-lg text-error"></span>
                    </div>
                }
            >
                <IncidentList incidents=incidents on_status_change=Callback::new(on_status_change.clone()) />
            </Show>
        </div>
    }
}
