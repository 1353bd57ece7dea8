use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::accordion::FaqAccordion;
use crate::components::carousel::HeroCarousel;
use crate::components::contact_form::ContactForm;
use crate::components::info_tabs::InfoTabs;
use crate::components::sections::{PortfolioGrid, ServicesGrid, Testimonials};
use crate::components::statistics::StatisticsSection;
use crate::config;
use crate::Route;

pub fn scroll_to_section(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        element.scroll_into_view();
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let content = config::site_content();
    let hero = &content.hero;

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_call_to_action = Callback::from(|_: usize| scroll_to_section("contact"));

    html! {
        <div class="home-page">
            <HeroCarousel
                slides={hero.slides.clone()}
                auto_play_interval_ms={hero.auto_play_interval_ms}
                show_controls={hero.show_controls}
                default_background={hero.default_background.clone()}
                {on_call_to_action}
            />

            <StatisticsSection config={content.statistics.clone()} />

            <ServicesGrid services={content.services.clone()} />

            if !content.portfolio.is_empty() {
                <section class="portfolio-preview">
                    <h2>{"Recent Work"}</h2>
                    <PortfolioGrid projects={content.portfolio.clone()} limit={Some(3)} />
                    <Link<Route> to={Route::Portfolio} classes="forward-link">
                        {"View the full portfolio →"}
                    </Link<Route>>
                </section>
            }

            <Testimonials testimonials={content.testimonials.clone()} />

            if !content.faq.is_empty() {
                <section class="faq-section">
                    <h2>{"Frequently Asked Questions"}</h2>
                    <FaqAccordion entries={content.faq.clone()} />
                </section>
            }

            <section id="contact" class="contact-section">
                <h2>{"Let's Work Together"}</h2>
                <div class="contact-layout">
                    <ContactForm config={content.contact_form.clone()} />
                    <InfoTabs details={content.contact.clone()} />
                </div>
            </section>

            <style>
                {r#"
                .home-page {
                    color: #ffffff;
                }
                .home-page h2 {
                    font-size: 2.4rem;
                    background: linear-gradient(45deg, #fff, #8FB8FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .portfolio-preview,
                .faq-section,
                .contact-section {
                    padding: 6rem 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .portfolio-preview {
                    text-align: center;
                }
                .portfolio-preview .portfolio-grid {
                    margin: 3rem 0 2rem;
                    text-align: left;
                }
                .contact-layout {
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 2.5rem;
                    margin-top: 2rem;
                }
                @media (max-width: 900px) {
                    .contact-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
