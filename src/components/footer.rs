use crate::clock::current_year;
use yew::prelude::*;

/// Copyright footer stamped with the year at render time.
///
/// The year comes from the wall clock on every render, so a page left open
/// across a year boundary shows the new year as soon as it re-renders.
#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class={classes!("my-12", "text-center")}>
            { format!("© {}", current_year()) }
        </footer>
    }
}
