#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod format;
pub mod readiness;
pub mod schedule;
