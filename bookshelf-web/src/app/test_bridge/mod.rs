mod shared;
#[cfg(not(target_arch = "wasm32"))]
mod stub;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use shared::{BridgeState, BridgeTile, test_mode_requested};

use crate::app::session::SessionHandle;
use yew::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_test_bridge(handle: &SessionHandle) {
    stub::use_test_bridge(handle);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_test_bridge(handle: &SessionHandle) {
    wasm::use_test_bridge(handle);
}
