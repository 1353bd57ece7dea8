use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod schedule;
mod components {
    pub mod accordion;
    pub mod carousel;
    pub mod contact_form;
    pub mod footer;
    pub mod info_tabs;
    pub mod sections;
    pub mod statistics;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod portfolio;
    pub mod service;
}

use components::footer::Footer;
use content::ServiceCategory;
use pages::{
    home::Home,
    not_found::NotFound,
    portfolio::Portfolio,
    service::ServicePage,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/portfolio")]
    Portfolio,
    #[at("/services/digital-marketing")]
    DigitalMarketing,
    #[at("/services/web-development")]
    WebDevelopment,
    #[at("/services/ui-ux-design")]
    UiUxDesign,
    #[at("/services/ai-integration")]
    AiIntegration,
    #[at("/services/cybersecurity")]
    Cybersecurity,
    #[at("/services/global-solutions")]
    GlobalSolutions,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn service_category(&self) -> Option<ServiceCategory> {
        match self {
            Route::DigitalMarketing => Some(ServiceCategory::DigitalMarketing),
            Route::WebDevelopment => Some(ServiceCategory::WebDevelopment),
            Route::UiUxDesign => Some(ServiceCategory::UiUxDesign),
            Route::AiIntegration => Some(ServiceCategory::AiIntegration),
            Route::Cybersecurity => Some(ServiceCategory::Cybersecurity),
            Route::GlobalSolutions => Some(ServiceCategory::GlobalSolutions),
            _ => None,
        }
    }
}

fn switch(routes: Route) -> Html {
    if let Some(category) = routes.service_category() {
        info!("Rendering {:?} service page", category);
        return html! { <ServicePage {category} /> };
    }
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        },
        _ => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let services_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let callback = Closure::<dyn Fn()>::new(move || {
                if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                    is_scrolled.set(scroll_y > 80.0);
                }
            });
            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_services = {
        let services_open = services_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            services_open.set(!*services_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        let services_open = services_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            services_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"brightpixel"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div class={classes!("nav-dropdown", (*services_open).then(|| "open"))}>
                        <button class="nav-link nav-dropdown-toggle" onclick={toggle_services}>
                            {"Services"}
                        </button>
                        if *services_open {
                            <div class="nav-dropdown-menu">
                                { for ServiceCategory::ALL.iter().map(|&category| html! {
                                    <div onclick={close_menu.clone()}>
                                        <Link<Route> to={components::sections::service_route(category)} classes="nav-sublink">
                                            {category.label()}
                                        </Link<Route>>
                                    </div>
                                }) }
                            </div>
                        }
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Portfolio} classes="nav-link">{"Portfolio"}</Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Home} classes="nav-contact-button">{"Contact"}</Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let content = config::site_content();

    html! {
        <BrowserRouter>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer contact={content.contact.clone()} />
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #0f111a;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 100;
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(15, 17, 26, 0.92);
                    backdrop-filter: blur(8px);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1.2rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.4rem;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                }
                .nav-link {
                    color: #d6d9e0;
                    text-decoration: none;
                }
                .nav-contact-button {
                    padding: 0.5rem 1.2rem;
                    border-radius: 999px;
                    background: #4F7CFF;
                    color: #fff;
                    text-decoration: none;
                }
                .nav-dropdown {
                    position: relative;
                }
                .nav-dropdown-toggle {
                    background: none;
                    border: none;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .nav-dropdown-menu {
                    position: absolute;
                    top: 130%;
                    left: 0;
                    min-width: 200px;
                    padding: 0.5rem 0;
                    border-radius: 8px;
                    background: rgba(15, 17, 26, 0.97);
                    border: 1px solid rgba(79, 124, 255, 0.15);
                }
                .nav-sublink {
                    display: block;
                    padding: 0.5rem 1rem;
                    color: #d6d9e0;
                    text-decoration: none;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                .page-hero {
                    text-align: center;
                    padding: 6rem 2rem 3rem;
                }
                .page-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #8FB8FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .page-hero p {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 640px;
                    margin: 0 auto;
                }
                .page-body {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 2rem 2rem 6rem;
                }
                @media (max-width: 900px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        background: rgba(15, 17, 26, 0.97);
                    }
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/portfolio"), Some(Route::Portfolio));
        assert_eq!(
            Route::recognize("/services/web-design").or_else(Route::not_found_route),
            Some(Route::NotFound)
        );
        assert_eq!(
            Route::recognize("/nope").or_else(Route::not_found_route),
            Some(Route::NotFound)
        );
    }

    #[test]
    fn every_service_path_renders_the_service_page() {
        let paths = [
            "/services/digital-marketing",
            "/services/web-development",
            "/services/ui-ux-design",
            "/services/ai-integration",
            "/services/cybersecurity",
            "/services/global-solutions",
        ];
        let categories: Vec<_> = paths
            .iter()
            .map(|p| Route::recognize(p).and_then(|r| r.service_category()))
            .collect();
        let expected: Vec<_> = ServiceCategory::ALL.iter().copied().map(Some).collect();
        assert_eq!(categories, expected);
    }

    #[test]
    fn only_service_routes_carry_a_category() {
        assert_eq!(
            Route::DigitalMarketing.service_category(),
            Some(ServiceCategory::DigitalMarketing)
        );
        assert_eq!(Route::Portfolio.service_category(), None);
        assert_eq!(Route::NotFound.service_category(), None);
    }
}
