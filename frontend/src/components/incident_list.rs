//! Report cards with an optional admin status selector.
//!
//! Pure projection of the fetched list: description, truncated
//! coordinates, localized date, and a status chip. When a status-change
//! callback is supplied, each card offers the three canonical statuses.

use crate::components::icons::{AlertCircle, Clock, MapPin};
use crate::web::date::format_server_date;
use ajali_shared::{IncidentReport, IncidentStatus, format_coord};
use leptos::prelude::*;

/// Chip palette. Total over the status set; unknown tags stay neutral.
pub fn status_chip_class(status: IncidentStatus) -> &'static str {
    match status {
        IncidentStatus::UnderInvestigation => "badge badge-warning",
        IncidentStatus::Resolved => "badge badge-success",
        IncidentStatus::Rejected => "badge badge-error",
        IncidentStatus::Unknown => "badge badge-ghost",
    }
}

#[component]
pub fn IncidentList(
    #[prop(into)] incidents: Signal<Vec<IncidentReport>>,
    #[prop(optional, into)] on_status_change: Option<Callback<(i64, IncidentStatus)>>,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <For
                each=move || incidents.get()
                key=|incident| incident.id
                children=move |incident: IncidentReport| {
                    let id = incident.id;
                    let status = incident.status;
                    view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body p-6">
                                <div class="flex justify-between items-start">
                                    <div class="flex-1 space-y-2">
                                        <p>{incident.description.clone()}</p>
                                        <div class="flex items-center gap-1 text-sm text-base-content/60">
                                            <span class="h-4 w-4"><MapPin /></span>
                                            <span>
                                                {format_coord(incident.latitude)} ", "
                                                {format_coord(incident.longitude)}
                                            </span>
                                        </div>
                                        <div class="flex items-center gap-1 text-sm text-base-content/60">
                                            <span class="h-4 w-4"><Clock /></span>
                                            <span>{format_server_date(&incident.created_at)}</span>
                                        </div>
                                    </div>
                                    <span class=status_chip_class(status)>{status.label()}</span>
                                </div>

                                {on_status_change.map(|callback| view! {
                                    <select
                                        class="select select-bordered select-sm mt-4 w-full"
                                        on:change=move |ev| {
                                            if let Some(next) = IncidentStatus::from_tag(&event_target_value(&ev)) {
                                                callback.run((id, next));
                                            }
                                        }
                                    >
                                        {IncidentStatus::ASSIGNABLE
                                            .into_iter()
                                            .map(|option| view! {
                                                <option
                                                    value=option.as_str()
                                                    selected=option == status
                                                >
                                                    {option.label()}
                                                </option>
                                            })
                                            .collect_view()}
                                    </select>
                                })}
                            </div>
                        </div>
                    }
                }
            />

            <Show when=move || incidents.with(|list| list.is_empty())>
                <div class="text-center py-12">
                    <span class="inline-block h-12 w-12 text-base-content/40"><AlertCircle /></span>
                    <h3 class="mt-2 text-sm font-medium">"No incidents"</h3>
                    <p class="mt-1 text-sm text-base-content/60">
                        "No incidents have been reported yet."
                    </p>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_class_covers_every_status() {
        for status in IncidentStatus::ASSIGNABLE {
            assert!(status_chip_class(status).starts_with("badge badge-"));
        }
        assert_eq!(
            status_chip_class(IncidentStatus::Unknown),
            "badge badge-ghost"
        );
    }
}
