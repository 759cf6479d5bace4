//! Shared Dioxus components and browser bindings for the nowcast apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map via `js_sys::eval()`
//! - `state`: reactive `AppState`/`MonitorState` signal bundles bound to
//!   the core stores
//! - `components`: reusable RSX components for both apps
//! - `geo`/`storage`/`net`/`time`: web implementations of the core seams

pub mod components;
pub mod geo;
pub mod js_bridge;
pub mod net;
pub mod state;
pub mod storage;
pub mod time;
