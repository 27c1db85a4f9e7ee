use bookshelf_core::{ShelfEvent, ShelfLayout};
use yew::prelude::*;

use crate::components::book_tile::BookTile;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub layout: ShelfLayout,
    #[prop_or_default]
    pub pickup: Option<usize>,
    pub on_event: Callback<ShelfEvent>,
}

/// The bookshelf: one `shelf-row` per layout row, padding rows included.
#[function_component(Shelf)]
pub fn shelf(p: &Props) -> Html {
    html! {
        <section id="bookshelf" class="bookshelf" aria-label="Books for sale">
            { for p.layout.rows.iter().map(|row| html! {
                <div class={classes!("shelf-row", row.is_padding().then_some("shelf-row--empty"))}>
                    { for row.tiles.iter().map(|tile| html! {
                        <BookTile
                            key={tile.index.to_string()}
                            tile={tile.clone()}
                            picking={p.pickup == Some(tile.index)}
                            on_event={p.on_event.clone()}
                        />
                    }) }
                </div>
            }) }
        </section>
    }
}
