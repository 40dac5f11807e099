//! Browser console logging via `tracing`.

use std::sync::Once;

static INIT: Once = Once::new();

/// Routes `tracing` events to the browser console. Debug builds log at
/// `DEBUG`, release builds at `INFO`. Safe to call more than once; a no-op
/// off wasm32.
pub fn init() {
    INIT.call_once(install);
}

#[cfg(target_arch = "wasm32")]
fn install() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(level)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}

#[cfg(not(target_arch = "wasm32"))]
fn install() {}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }
}
