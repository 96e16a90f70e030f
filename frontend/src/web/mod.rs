//! Native Web API wrappers.
//!
//! Lightweight bindings over the browser APIs the gloo family does not
//! cover: the History-API router, Leaflet, locale date formatting, and
//! the share/clipboard pair.

pub mod date;
pub mod map;
pub mod route;
pub mod router;
pub mod share;
