use bookshelf_core::LoadState;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: LoadState,
}

/// Load progress line above the shelf. Renders nothing once loaded.
#[function_component(StatusBanner)]
pub fn status_banner(p: &Props) -> Html {
    match &p.state {
        LoadState::Pending => html! {
            <p id="load-status" class="status status--pending" role="status">{"Loading…"}</p>
        },
        LoadState::Failed(reason) => html! {
            <p id="load-status" class="status status--failed" role="alert" title={reason.clone()}>
                {"The catalogue could not be loaded. Please try again later."}
            </p>
        },
        LoadState::Ready => Html::default(),
    }
}
