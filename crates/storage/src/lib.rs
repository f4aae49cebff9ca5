#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod cached_rest;
pub mod local_storage;
pub mod rest;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
