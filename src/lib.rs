//! Kolbasa Clicker: a canvas clicker game compiled to WASM.
//!
//! Game rules live in [`model`] and run natively for tests; the yew
//! components in [`components`] wire them to the page.

pub mod audio;
pub mod components;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod render;
pub mod state;
pub mod storage;
pub mod util;
