//! Citizen dashboard: report composer modal plus a feed/map toggle.
//!
//! Fetches once on mount and again after a successful submit. Toggling
//! the view never refetches; it only flips which projection renders.

use crate::api::use_api;
use crate::components::icons::Plus;
use crate::components::incident_form::IncidentForm;
use crate::components::incident_map::IncidentMap;
use crate::components::incident_post::IncidentPost;
use crate::notify::use_notifier;
use ajali_shared::IncidentReport;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum ViewMode {
    #[default]
    Feed,
    Map,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();

    let (incidents, set_incidents) = signal(Vec::<IncidentReport>::new());
    let (loading, set_loading) = signal(true);
    let (view_mode, set_view_mode) = signal(ViewMode::default());
    let (show_form, set_show_form) = signal(false);

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

    // Initial load.
    {
        let fetch_incidents = fetch_incidents.clone();
        Effect::new(move |_| {
            fetch_incidents();
        });
    }

    let on_submit_success = {
        let fetch_incidents = fetch_incidents.clone();
        move |_: ()| {
            set_show_form.set(false);
            fetch_incidents();
        }
    };

    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if show_form.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let toggle_class = move |mode: ViewMode| {
        if view_mode.get() == mode {
            "btn btn-sm btn-error text-white"
        } else {
            "btn btn-sm btn-ghost"
        }
    };

    view! {
        <div class="max-w-3xl mx-auto px-4 py-8 space-y-6">
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold">"Your Incidents"</h2>
                <div class="flex items-center gap-2">
                    <button on:click=move |_| set_view_mode.set(ViewMode::Feed) class=move || toggle_class(ViewMode::Feed)>
                        "Feed"
                    </button>
                    <button on:click=move |_| set_view_mode.set(ViewMode::Map) class=move || toggle_class(ViewMode::Map)>
                        "Map"
                    </button>
                    <button on:click=move |_| set_show_form.set(true) class="btn btn-sm btn-error text-white gap-2">
                        <span class="h-4 w-4"><Plus /></span>
                        "Report Incident"
                    </button>
                </div>
            </div>

            <Show when=move || loading.get() && incidents.with(|list| list.is_empty())>
                <div class="text-center py-12">
                    <span class="loading loading-spinner loading-lg text-error"></span>
                </div>
            </Show>

            {move || match view_mode.get() {
                ViewMode::Feed => view! {
                    <div class="space-y-4">
                        <For
                            each=move || incidents.get()
                            key=|incident| incident.id
                            children=move |incident: IncidentReport| {
                                view! { <IncidentPost incident=incident /> }
                            }
                        />
                        <Show when=move || !loading.get() && incidents.with(|list| list.is_empty())>
                            <p class="text-center py-12 text-base-content/60">
                                "No incidents have been reported yet."
                            </p>
                        </Show>
                    </div>
                }
                .into_any(),
                ViewMode::Map => view! { <IncidentMap incidents=incidents /> }.into_any(),
            }}

            // Report composer, modal.
            <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_show_form.set(false)>
                <div class="modal-box max-w-xl">
                    <h3 class="font-bold text-lg mb-4">"Report Incident"</h3>
                    // Mounted only while open: the picker map needs a sized
                    // container, and unmounting releases staged previews.
                    <Show when=move || show_form.get()>
                        <IncidentForm on_success=on_submit_success.clone() />
                    </Show>
                </div>
                <form method="dialog" class="modal-backdrop">
                    <button>"close"</button>
                </form>
            </dialog>
        </div>
    }
}
