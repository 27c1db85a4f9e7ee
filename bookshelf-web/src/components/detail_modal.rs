use bookshelf_core::constants::NO_PHOTOS_TEXT;
use bookshelf_core::{DetailView, Gallery, ShelfEvent};
use yew::prelude::*;

use crate::app::dismissal::click_target;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: Option<DetailView>,
    pub on_event: Callback<ShelfEvent>,
}

fn gallery(gallery: &Gallery) -> Html {
    match gallery {
        Gallery::Photos(images) => html! {
            <>
                { for images.iter().map(|img| html! {
                    <img src={img.src.clone()} alt={img.alt.clone()} loading="lazy" />
                }) }
            </>
        },
        Gallery::Empty => html! { <p class="no-photos">{ NO_PHOTOS_TEXT }</p> },
    }
}

/// Full detail overlay. Only backdrop clicks and the close button dismiss it.
#[function_component(DetailModal)]
pub fn detail_modal(p: &Props) -> Html {
    let Some(view) = p.view.as_ref() else {
        return html! {
            <div id="book-modal" class="modal hidden" aria-hidden="true"></div>
        };
    };

    let on_backdrop = {
        let cb = p.on_event.clone();
        Callback::from(move |e: MouseEvent| cb.emit(ShelfEvent::ModalClick(click_target(&e))))
    };
    let on_close = {
        let cb = p.on_event.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(ShelfEvent::ModalCloseClick);
        })
    };

    html! {
        <div id="book-modal" class="modal" role="presentation" onclick={on_backdrop}>
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                aria-labelledby="detail-title"
            >
                <button
                    type="button"
                    class="modal-close"
                    data-close-modal="true"
                    aria-label="Close details"
                    onclick={on_close}
                >
                    {"×"}
                </button>
                <div id="book-images" class="book-images">{ gallery(&view.gallery) }</div>
                <div class="book-info">
                    <h2 id="detail-title">{ view.title.clone() }</h2>
                    <p id="detail-price" class="price">{ view.price.clone() }</p>
                    <p id="detail-condition" class="condition">{ view.condition.clone() }</p>
                    <p id="detail-summary">{ view.summary.clone() }</p>
                    <a
                        id="buy-link"
                        class="buy-link"
                        href={view.purchase_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"I want this book"}
                    </a>
                </div>
            </div>
        </div>
    }
}
