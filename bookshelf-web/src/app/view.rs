use bookshelf_core::{ShelfEvent, ShelfSession};
use yew::prelude::*;

use crate::components::detail_modal::DetailModal;
use crate::components::header::Header;
use crate::components::shelf::Shelf;
use crate::components::status_banner::StatusBanner;
use crate::components::summary_popup::SummaryPopup;

/// Render the whole page for one session snapshot.
#[must_use]
pub fn render_page(session: &ShelfSession, on_event: &Callback<ShelfEvent>) -> Html {
    html! {
        <>
            <Header sold_count={session.layout().sold_count} />
            <main id="main" role="main">
                <StatusBanner state={session.load_state().clone()} />
                <Shelf
                    layout={session.layout().clone()}
                    pickup={session.pickup()}
                    on_event={on_event.clone()}
                />
            </main>
            <SummaryPopup view={session.summary_view()} on_event={on_event.clone()} />
            <DetailModal view={session.detail_view()} on_event={on_event.clone()} />
        </>
    }
}
