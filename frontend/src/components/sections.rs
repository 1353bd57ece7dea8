use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{Project, Service, ServiceCategory, Testimonial};
use crate::Route;

pub fn service_route(category: ServiceCategory) -> Route {
    match category {
        ServiceCategory::DigitalMarketing => Route::DigitalMarketing,
        ServiceCategory::WebDevelopment => Route::WebDevelopment,
        ServiceCategory::UiUxDesign => Route::UiUxDesign,
        ServiceCategory::AiIntegration => Route::AiIntegration,
        ServiceCategory::Cybersecurity => Route::Cybersecurity,
        ServiceCategory::GlobalSolutions => Route::GlobalSolutions,
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesGridProps {
    pub services: Vec<Service>,
}

#[function_component(ServicesGrid)]
pub fn services_grid(props: &ServicesGridProps) -> Html {
    if props.services.is_empty() {
        return html! {};
    }
    html! {
        <section class="services">
            <h2>{"What We Do"}</h2>
            <div class="services-grid">
                { for props.services.iter().map(|service| html! {
                    <div class="service-card">
                        <h3>{&service.title}</h3>
                        <p>{&service.summary}</p>
                        <ul>
                            { for service.highlights.iter().map(|h| html! { <li>{h}</li> }) }
                        </ul>
                        <Link<Route> to={service_route(service.category)} classes="forward-link">
                            {"Learn more →"}
                        </Link<Route>>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .services {
                    padding: 6rem 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                    text-align: center;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                    margin-top: 3rem;
                }
                .service-card {
                    text-align: left;
                    padding: 2rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(79, 124, 255, 0.12);
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }
                .service-card:hover {
                    transform: translateY(-4px);
                    border-color: rgba(79, 124, 255, 0.5);
                }
                .service-card ul {
                    padding-left: 1.2rem;
                    color: #b8bcc8;
                }
                .forward-link {
                    color: #8FB8FF;
                    text-decoration: none;
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PortfolioAction {
    /// `None` shows every project.
    Filter(Option<String>),
    Open(usize),
    Close,
    NextImage,
    PrevImage,
}

/// Category filter plus the project detail modal.
///
/// Project categories and image counts are captured at mount, so the open
/// project and its image index always stay in range. A filter naming a
/// category no project has is ignored.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PortfolioState {
    categories: Vec<String>,
    image_counts: Vec<usize>,
    filter: Option<String>,
    open: Option<usize>,
    image_index: usize,
}

impl PortfolioState {
    pub fn new(projects: &[Project]) -> Self {
        Self {
            categories: projects.iter().map(|p| p.category.clone()).collect(),
            image_counts: projects.iter().map(Project::image_count).collect(),
            filter: None,
            open: None,
            image_index: 0,
        }
    }

    /// Distinct categories in first-seen order.
    pub fn filter_options(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for category in &self.categories {
            if !seen.contains(&category.as_str()) {
                seen.push(category);
            }
        }
        seen
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Indices of the projects the current filter lets through.
    pub fn visible(&self) -> Vec<usize> {
        self.categories
            .iter()
            .enumerate()
            .filter(|(_, c)| self.filter.as_ref().map_or(true, |f| f == *c))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn open_project(&self) -> Option<usize> {
        self.open
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    fn step_image(self, forward: bool) -> Self {
        let Some(open) = self.open else {
            return self;
        };
        let n = self.image_counts[open];
        let image_index = if forward {
            (self.image_index + 1) % n
        } else {
            (self.image_index + n - 1) % n
        };
        Self { image_index, ..self }
    }

    pub fn apply(self, action: PortfolioAction) -> Self {
        match action {
            PortfolioAction::Filter(Some(category)) if !self.categories.contains(&category) => self,
            PortfolioAction::Filter(filter) => Self { filter, ..self },
            PortfolioAction::Open(i) if i < self.image_counts.len() => Self {
                open: Some(i),
                image_index: 0,
                ..self
            },
            PortfolioAction::Open(_) => self,
            PortfolioAction::Close => Self {
                open: None,
                image_index: 0,
                ..self
            },
            PortfolioAction::NextImage => self.step_image(true),
            PortfolioAction::PrevImage => self.step_image(false),
        }
    }
}

impl Reducible for PortfolioState {
    type Action = PortfolioAction;

    fn reduce(self: Rc<Self>, action: PortfolioAction) -> Rc<Self> {
        let next = (*self).clone().apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioGridProps {
    pub projects: Vec<Project>,
    /// Show only the first `limit` projects that pass the filter.
    #[prop_or_default]
    pub limit: Option<usize>,
}

#[function_component(PortfolioGrid)]
pub fn portfolio_grid(props: &PortfolioGridProps) -> Html {
    let state = {
        let projects = props.projects.clone();
        use_reducer(move || PortfolioState::new(&projects))
    };

    let shown = props.limit.unwrap_or(props.projects.len());
    if props.projects.is_empty() || shown == 0 {
        return html! {};
    }

    let send = |action: PortfolioAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action.clone()))
    };

    let options = state.filter_options();
    let filters = if options.len() > 1 {
        html! {
            <div class="portfolio-filters">
                <button
                    class={classes!("filter-button", state.filter().is_none().then(|| "active"))}
                    onclick={send(PortfolioAction::Filter(None))}
                >
                    {"All"}
                </button>
                { for options.iter().map(|&category| html! {
                    <button
                        class={classes!("filter-button", (state.filter() == Some(category)).then(|| "active"))}
                        onclick={send(PortfolioAction::Filter(Some(category.to_string())))}
                    >
                        {category}
                    </button>
                }) }
            </div>
        }
    } else {
        html! {}
    };

    let modal = match state.open_project().and_then(|i| props.projects.get(i)) {
        Some(project) => {
            let image = project.images().nth(state.image_index()).unwrap_or(project.image.as_str()).to_string();
            let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
            html! {
                <div class="project-modal-backdrop" onclick={send(PortfolioAction::Close)}>
                    <div class="project-modal" onclick={stop}>
                        <button class="modal-close" aria-label="Close" onclick={send(PortfolioAction::Close)}>{"×"}</button>
                        <div class="modal-image">
                            <img src={image} alt={project.title.clone()} />
                            if project.image_count() > 1 {
                                <>
                                    <button class="image-nav prev" aria-label="Previous image" onclick={send(PortfolioAction::PrevImage)}>{"‹"}</button>
                                    <button class="image-nav next" aria-label="Next image" onclick={send(PortfolioAction::NextImage)}>{"›"}</button>
                                    <span class="image-counter">
                                        {format!("{} / {}", state.image_index() + 1, project.image_count())}
                                    </span>
                                </>
                            }
                        </div>
                        <div class="modal-body">
                            <span class="portfolio-category">{&project.category}</span>
                            <h3>{&project.title}</h3>
                            <p class="portfolio-client">{&project.client}</p>
                            <p>{&project.summary}</p>
                            if !project.technologies.is_empty() {
                                <div class="tech-tags">
                                    { for project.technologies.iter().map(|t| html! { <span class="tech-tag">{t}</span> }) }
                                </div>
                            }
                            if !project.challenges.is_empty() {
                                <>
                                    <h4>{"Challenges"}</h4>
                                    <ul>
                                        { for project.challenges.iter().map(|c| html! { <li>{c}</li> }) }
                                    </ul>
                                </>
                            }
                            if !project.solutions.is_empty() {
                                <>
                                    <h4>{"Solutions"}</h4>
                                    <ul>
                                        { for project.solutions.iter().map(|s| html! { <li>{s}</li> }) }
                                    </ul>
                                </>
                            }
                            if let Some(url) = &project.live_url {
                                <a class="forward-link" href={url.clone()} target="_blank" rel="noopener noreferrer">
                                    {"Visit the live project →"}
                                </a>
                            }
                        </div>
                    </div>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <div class="portfolio">
            {filters}
            <div class="portfolio-grid">
                { for state.visible().into_iter().take(shown).filter_map(|i| props.projects.get(i).map(|p| (i, p))).map(|(i, project)| html! {
                    <figure class="portfolio-card" onclick={send(PortfolioAction::Open(i))}>
                        <img src={project.image.clone()} alt={project.title.clone()} loading="lazy" />
                        <figcaption>
                            <span class="portfolio-category">{&project.category}</span>
                            <h3>{&project.title}</h3>
                            <p class="portfolio-client">{&project.client}</p>
                            <p>{&project.summary}</p>
                        </figcaption>
                    </figure>
                }) }
            </div>
            {modal}
            <style>
                {r#"
                .portfolio-filters {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 2.5rem;
                }
                .filter-button {
                    padding: 0.5rem 1.2rem;
                    border-radius: 999px;
                    border: 1px solid rgba(79, 124, 255, 0.3);
                    background: transparent;
                    color: #b8bcc8;
                    cursor: pointer;
                }
                .filter-button.active {
                    background: #4F7CFF;
                    border-color: #4F7CFF;
                    color: #fff;
                }
                .portfolio-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .portfolio-card {
                    margin: 0;
                    border-radius: 16px;
                    overflow: hidden;
                    background: rgba(255, 255, 255, 0.04);
                    cursor: pointer;
                }
                .portfolio-card img {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .portfolio-card:hover img {
                    transform: scale(1.05);
                }
                .portfolio-card figcaption {
                    padding: 1.5rem;
                }
                .portfolio-category {
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    color: #8FB8FF;
                }
                .portfolio-client {
                    color: #7d8296;
                }
                .project-modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 1100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                    background: rgba(0, 0, 0, 0.8);
                }
                .project-modal {
                    position: relative;
                    max-width: 900px;
                    width: 100%;
                    max-height: 90vh;
                    overflow-y: auto;
                    border-radius: 16px;
                    background: #141622;
                    text-align: left;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    z-index: 2;
                    background: rgba(0, 0, 0, 0.5);
                    border: none;
                    border-radius: 50%;
                    width: 2.2rem;
                    height: 2.2rem;
                    color: #fff;
                    font-size: 1.4rem;
                    cursor: pointer;
                }
                .modal-image {
                    position: relative;
                }
                .modal-image img {
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    object-fit: cover;
                }
                .image-nav {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    background: rgba(0, 0, 0, 0.5);
                    border: none;
                    color: #fff;
                    font-size: 2rem;
                    padding: 0.2rem 0.8rem;
                    cursor: pointer;
                }
                .image-nav.prev { left: 1rem; }
                .image-nav.next { right: 1rem; }
                .image-counter {
                    position: absolute;
                    bottom: 1rem;
                    right: 1rem;
                    font-size: 0.85rem;
                    color: #fff;
                }
                .modal-body {
                    padding: 2rem;
                }
                .tech-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin: 1rem 0;
                }
                .tech-tag {
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(79, 124, 255, 0.15);
                    color: #8FB8FF;
                    font-size: 0.8rem;
                }
                "#}
            </style>
        </div>
    }
}

/// Which testimonial is in focus. `len` is fixed at mount.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TestimonialState {
    active: usize,
    len: usize,
}

impl TestimonialState {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn select(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        Self {
            active: index,
            ..self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub testimonials: Vec<Testimonial>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let state = {
        let len = props.testimonials.len();
        use_state(move || TestimonialState::new(len))
    };

    let Some(current) = props.testimonials.get(state.active()) else {
        return html! {};
    };

    html! {
        <section class="testimonials">
            <h2>{"What Clients Say"}</h2>
            <blockquote class="testimonial">
                <p>{format!("“{}”", current.quote)}</p>
                <footer>
                    <strong>{&current.author}</strong>
                    <span>{&current.role}</span>
                </footer>
            </blockquote>
            if props.testimonials.len() > 1 {
                <div class="testimonial-dots">
                    { for (0..props.testimonials.len()).map(|i| {
                        let onclick = {
                            let state = state.clone();
                            Callback::from(move |_: MouseEvent| state.set((*state).select(i)))
                        };
                        html! {
                            <button
                                class={classes!("testimonial-dot", (state.active() == i).then(|| "active"))}
                                aria-label={format!("Show testimonial {}", i + 1)}
                                {onclick}
                            />
                        }
                    }) }
                </div>
            }
            <style>
                {r#"
                .testimonials {
                    padding: 6rem 2rem;
                    background: rgba(79, 124, 255, 0.05);
                    text-align: center;
                }
                .testimonial {
                    max-width: 640px;
                    margin: 3rem auto 0;
                    padding: 2rem;
                    border-radius: 16px;
                    background: rgba(26, 26, 36, 0.8);
                    text-align: left;
                }
                .testimonial footer {
                    display: flex;
                    flex-direction: column;
                    margin-top: 1rem;
                    color: #7d8296;
                }
                .testimonial-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.6rem;
                    margin-top: 1.5rem;
                }
                .testimonial-dot {
                    width: 10px;
                    height: 10px;
                    padding: 0;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.3);
                    cursor: pointer;
                }
                .testimonial-dot.active {
                    background: #4F7CFF;
                }
                "#}
            </style>
        </section>
    }
}
