use bookshelf_core::{ShelfEvent, SummaryView};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: Option<SummaryView>,
    pub on_event: Callback<ShelfEvent>,
}

/// Hover preview. Always mounted; hidden with the `hidden` class when closed.
#[function_component(SummaryPopup)]
pub fn summary_popup(p: &Props) -> Html {
    let fire = |event: ShelfEvent| {
        let cb = p.on_event.clone();
        Callback::from(move |_: MouseEvent| cb.emit(event.clone()))
    };
    let on_close = {
        let cb = p.on_event.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(ShelfEvent::PopupCloseClick);
        })
    };

    let hidden = p.view.is_none().then_some("hidden");
    let view = p.view.clone().unwrap_or_else(|| SummaryView {
        title: String::new(),
        price: String::new(),
        summary: String::new(),
    });

    html! {
        <aside
            id="summary-popup"
            class={classes!("summary-popup", hidden)}
            aria-hidden={p.view.is_none().to_string()}
            onclick={fire(ShelfEvent::PopupBodyClick)}
            onmouseenter={fire(ShelfEvent::PopupEnter)}
            onmouseleave={fire(ShelfEvent::PopupLeave)}
        >
            <button
                type="button"
                class="summary-close"
                data-close-summary="true"
                aria-label="Close summary"
                onclick={on_close}
            >
                {"×"}
            </button>
            <h3 id="summary-title">{ view.title }</h3>
            <p id="summary-price" class="price">{ view.price }</p>
            <p id="summary-text">{ view.summary }</p>
            <p class="summary-hint">{"Click for details"}</p>
        </aside>
    }
}
