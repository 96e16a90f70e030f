//! Leaflet bindings.
//!
//! Thin wasm-bindgen externs over the global `L` object (Leaflet ships
//! from CDN in `index.html`). The map stays an opaque view: the only thing
//! it hands back to the application is the clicked coordinate pair.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn leaflet_map(element: &web_sys::HtmlElement) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &LatLng, zoom: f64);

    #[wasm_bindgen(method)]
    fn on(this: &LeafletMap, event: &str, handler: &JsValue);

    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap);

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to_map(this: &TileLayer, map: &LeafletMap);

    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addTo)]
    fn group_add_to(this: &LayerGroup, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &LayerGroup);

    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn leaflet_marker(position: &LatLng) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn marker_add_to_map(this: &Marker, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = addTo)]
    fn marker_add_to_group(this: &Marker, group: &LayerGroup);

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &Marker, position: &LatLng);

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, html: &str);

    pub type LatLng;

    #[wasm_bindgen(js_namespace = L, js_name = latLng)]
    fn lat_lng(lat: f64, lng: f64) -> LatLng;

    #[wasm_bindgen(method, getter)]
    fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    fn lng(this: &LatLng) -> f64;

    pub type LeafletMouseEvent;

    #[wasm_bindgen(method, getter)]
    fn latlng(this: &LeafletMouseEvent) -> LatLng;
}

impl LeafletMap {
    /// Create a map in `element` with the OpenStreetMap base layer.
    pub fn create(element: &web_sys::HtmlElement, lat: f64, lng: f64, zoom: f64) -> LeafletMap {
        let map = leaflet_map(element);
        map.set_view(&lat_lng(lat, lng), zoom);

        let options = Object::new();
        let _ = Reflect::set(
            &options,
            &"attribution".into(),
            &TILE_ATTRIBUTION.into(),
        );
        tile_layer(TILE_URL, &options).add_to_map(&map);

        map
    }

    /// Register a click handler receiving the clicked coordinates.
    ///
    /// The closure is leaked; it lives as long as the map element.
    pub fn on_click(&self, handler: impl Fn(f64, f64) + 'static) {
        let closure = Closure::<dyn Fn(LeafletMouseEvent)>::new(move |ev: LeafletMouseEvent| {
            let position = ev.latlng();
            handler(position.lat(), position.lng());
        });
        self.on("click", closure.as_ref());
        closure.forget();
    }

    /// Add a layer group for markers that get reconciled on refetch.
    pub fn marker_group(&self) -> LayerGroup {
        let group = layer_group();
        group.group_add_to(self);
        group
    }
}

impl LayerGroup {
    /// Drop a marker with a popup into the group.
    pub fn add_marker_with_popup(&self, lat: f64, lng: f64, popup_html: &str) {
        let marker = leaflet_marker(&lat_lng(lat, lng));
        marker.marker_add_to_group(self);
        marker.bind_popup(popup_html);
    }
}

impl Marker {
    /// Place a position marker directly on the map.
    pub fn place(map: &LeafletMap, lat: f64, lng: f64) -> Marker {
        let marker = leaflet_marker(&lat_lng(lat, lng));
        marker.marker_add_to_map(map);
        marker
    }

    /// Move the marker to a new position.
    pub fn move_to(&self, lat: f64, lng: f64) {
        self.set_lat_lng(&lat_lng(lat, lng));
    }
}
