use yew::prelude::*;

pub mod bootstrap;
pub mod dismissal;
pub mod session;
pub mod test_bridge;
pub mod view;

pub use session::{SessionHandle, use_shelf_session};

#[function_component(App)]
pub fn app() -> Html {
    let handle = use_shelf_session();
    bootstrap::use_bootstrap(&handle);
    dismissal::use_escape_dismissal(&handle);
    test_bridge::use_test_bridge(&handle);

    let on_event = handle.dispatcher();
    handle.with(|session| view::render_page(session, &on_event))
}
