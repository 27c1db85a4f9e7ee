use bookshelf_core::{ShelfEvent, ShelfTile};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub tile: ShelfTile,
    #[prop_or_default]
    pub picking: bool,
    pub on_event: Callback<ShelfEvent>,
}

#[function_component(BookTile)]
pub fn book_tile(p: &Props) -> Html {
    let class = classes!(
        "book",
        p.picking.then_some("picked-up"),
        (!p.tile.is_interactive()).then_some("book--untracked"),
    );
    let title = html! { <div class="book-title">{ p.tile.title.clone() }</div> };

    let Some(id) = p.tile.id.clone() else {
        return html! { <div {class} aria-disabled="true">{ title }</div> };
    };

    let index = p.tile.index;
    let emit = |make: fn(usize) -> ShelfEvent| {
        let cb = p.on_event.clone();
        move || cb.emit(make(index))
    };
    let on_enter = {
        let fire = emit(ShelfEvent::TileEnter);
        Callback::from(move |_: MouseEvent| fire())
    };
    let on_leave = {
        let fire = emit(ShelfEvent::TileLeave);
        Callback::from(move |_: MouseEvent| fire())
    };
    let on_touch_start = {
        let fire = emit(ShelfEvent::TileEnter);
        Callback::from(move |_: TouchEvent| fire())
    };
    let on_touch_end = {
        let fire = emit(ShelfEvent::TileLeave);
        Callback::from(move |_: TouchEvent| fire())
    };
    let on_click = {
        let fire = emit(ShelfEvent::TileClick);
        Callback::from(move |_: MouseEvent| fire())
    };
    let on_key = {
        let fire = emit(ShelfEvent::TileClick);
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                fire();
            }
        })
    };

    html! {
        <div
            {class}
            role="button"
            tabindex="0"
            data-book-id={id}
            data-index={index.to_string()}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            ontouchstart={on_touch_start}
            ontouchend={on_touch_end}
            onclick={on_click}
            onkeydown={on_key}
        >
            { title }
        </div>
    }
}
