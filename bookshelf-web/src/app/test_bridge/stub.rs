use crate::app::session::SessionHandle;
use yew::prelude::*;

#[hook]
pub fn use_test_bridge(handle: &SessionHandle) {
    let _ = handle;
}
