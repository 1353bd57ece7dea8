use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::ServiceCategory;
use crate::config;
use crate::pages::not_found::NotFound;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ServicePageProps {
    pub category: ServiceCategory,
}

/// Every service route renders this page; only the copy differs.
#[function_component(ServicePage)]
pub fn service_page(props: &ServicePageProps) -> Html {
    let content = config::site_content();
    let Some(copy) = content.service_page(props.category) else {
        log::warn!("No copy configured for {:?}", props.category);
        return html! { <NotFound /> };
    };

    html! {
        <div class="service-page">
            <section class="page-hero">
                <h1>{&copy.headline}</h1>
                <p>{&copy.intro}</p>
            </section>
            <section class="page-body">
                <div class="offerings">
                    { for copy.offerings.iter().map(|offering| html! {
                        <div class="offering">{offering}</div>
                    }) }
                </div>
                <div class="service-cta">
                    <Link<Route> to={Route::Home} classes="hero-cta">
                        {"Start a conversation"}
                    </Link<Route>>
                </div>
            </section>
            <style>
                {r#"
                .service-page {
                    padding-top: 74px;
                    color: #ffffff;
                }
                .offerings {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }
                .offering {
                    padding: 1.5rem;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(79, 124, 255, 0.12);
                }
                .service-cta {
                    text-align: center;
                    margin-top: 3rem;
                }
                .service-cta .hero-cta {
                    display: inline-block;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
