use crate::components::Footer;
use yew::prelude::*;

/// Page shell: the footer assumes nothing about its surroundings, so the
/// shell only provides a main landmark and mounts it underneath.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <>
            <main id="main" role="main">
                <h1>{ "yearstamp" }</h1>
            </main>
            <Footer />
        </>
    }
}
