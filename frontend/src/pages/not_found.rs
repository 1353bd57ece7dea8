use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"This page wandered off."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">{"Back to the homepage"}</Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: #ffffff;
                }
                .not-found-page h1 {
                    font-size: 5rem;
                    margin: 0;
                }
                "#}
            </style>
        </div>
    }
}
