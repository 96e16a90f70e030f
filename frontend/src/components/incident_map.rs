//! Map view: one marker per report on the shared Nairobi base map.

use crate::web::map::{LayerGroup, LeafletMap};
use ajali_shared::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE, IncidentReport};
use leptos::prelude::*;

const MAP_ZOOM: f64 = 12.0;

/// Descriptions are user-supplied; escape them before they reach popup HTML.
fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn popup_html(incident: &IncidentReport) -> String {
    format!(
        "<div class=\"p-1\"><p class=\"font-medium\">{}</p>\
         <p class=\"text-sm\">Status: {}</p></div>",
        escape_html(&incident.description),
        incident.status.label()
    )
}

#[component]
pub fn IncidentMap(#[prop(into)] incidents: Signal<Vec<IncidentReport>>) -> impl IntoView {
    let map_ref = NodeRef::<leptos::html::Div>::new();
    let map_handle = StoredValue::new_local(Option::<(LeafletMap, LayerGroup)>::None);

    // Create the map once, then reconcile the marker set whenever the
    // report list changes (refetches included).
    Effect::new(move |_| {
        let reports = incidents.get();
        let Some(container) = map_ref.get() else {
            return;
        };
        if map_handle.with_value(|m| m.is_none()) {
            let map = LeafletMap::create(&container, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, MAP_ZOOM);
            let markers = map.marker_group();
            map_handle.set_value(Some((map, markers)));
        }
        map_handle.with_value(|handle| {
            if let Some((_, markers)) = handle {
                markers.clear_layers();
                for incident in &reports {
                    markers.add_marker_with_popup(
                        incident.latitude,
                        incident.longitude,
                        &popup_html(incident),
                    );
                }
            }
        });
    });

    on_cleanup(move || {
        map_handle.update_value(|handle| {
            if let Some((map, _)) = handle.take() {
                map.remove();
            }
        });
    });

    view! {
        <div node_ref=map_ref class="h-96 rounded-lg overflow-hidden shadow-md"></div>
    }
}
