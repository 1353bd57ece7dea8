use yew::prelude::*;

use crate::components::sections::PortfolioGrid;
use crate::config;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let content = config::site_content();

    html! {
        <div class="portfolio-page">
            <section class="page-hero">
                <h1>{"Our Work"}</h1>
                <p>{"A selection of projects we're proud of, from brand identities to full web platforms."}</p>
            </section>
            <section class="page-body">
                if content.portfolio.is_empty() {
                    <p class="empty-note">{"New case studies are on their way."}</p>
                } else {
                    <PortfolioGrid projects={content.portfolio.clone()} />
                }
            </section>
            <style>
                {r#"
                .portfolio-page {
                    padding-top: 74px;
                    color: #ffffff;
                }
                .empty-note {
                    text-align: center;
                    color: #7d8296;
                }
                "#}
            </style>
        </div>
    }
}
