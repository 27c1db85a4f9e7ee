use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub sold_count: usize,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="sr-only">{"Skip to shelf"}</a>
            <h1>{"Secondhand Bookshelf"}</h1>
            <p class="sold-counter">
                {"Books sold so far: "}
                <span id="sold-count">{ p.sold_count.to_string() }</span>
            </p>
        </header>
    }
}
