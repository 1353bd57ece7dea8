use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::content::{Statistic, StatisticsConfig};
use crate::schedule::{BrowserScheduler, Scheduler};

/// One card's count-up, measured against the section's shared clock.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CountUp {
    pub target: u32,
    delay_ms: u32,
    duration_ms: u32,
}

impl CountUp {
    pub fn new(target: u32, delay_ms: u32, duration_ms: u32) -> Self {
        Self {
            target,
            delay_ms,
            duration_ms,
        }
    }

    /// Zero until the card's delay has passed, then rises linearly and
    /// lands on `target` once `duration_ms` is up.
    pub fn value_at(&self, elapsed_ms: u32) -> u32 {
        if elapsed_ms < self.delay_ms {
            return 0;
        }
        let progress = elapsed_ms - self.delay_ms;
        if progress >= self.duration_ms {
            return self.target;
        }
        (u64::from(self.target) * u64::from(progress) / u64::from(self.duration_ms)) as u32
    }

    pub fn is_done_at(&self, elapsed_ms: u32) -> bool {
        elapsed_ms >= self.delay_ms && elapsed_ms - self.delay_ms >= self.duration_ms
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatisticsAction {
    /// The section came into view. Only the first one counts.
    Start,
    Tick(u32),
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StatisticsState {
    counters: Vec<CountUp>,
    elapsed_ms: u32,
    started: bool,
}

impl StatisticsState {
    pub fn new(items: &[Statistic], duration_ms: u32, stagger_ms: u32) -> Self {
        let counters = items
            .iter()
            .enumerate()
            .map(|(i, item)| CountUp::new(item.value, stagger_ms.saturating_mul(i as u32), duration_ms))
            .collect();
        Self {
            counters,
            elapsed_ms: 0,
            started: false,
        }
    }

    pub fn from_config(config: &StatisticsConfig) -> Self {
        Self::new(&config.items, config.count_duration_ms, config.stagger_ms)
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn value(&self, index: usize) -> u32 {
        self.counters
            .get(index)
            .map_or(0, |c| c.value_at(self.elapsed_ms))
    }

    pub fn values(&self) -> Vec<u32> {
        (0..self.counters.len()).map(|i| self.value(i)).collect()
    }

    pub fn is_finished(&self) -> bool {
        self.counters.iter().all(|c| c.is_done_at(self.elapsed_ms))
    }

    /// True while the frame timer should be registered.
    pub fn wants_timer(&self) -> bool {
        self.started && !self.is_finished()
    }

    pub fn apply(self, action: StatisticsAction) -> Self {
        match action {
            StatisticsAction::Start => Self {
                started: true,
                ..self
            },
            StatisticsAction::Tick(ms) if self.wants_timer() => Self {
                elapsed_ms: self.elapsed_ms.saturating_add(ms),
                ..self
            },
            StatisticsAction::Tick(_) => self,
        }
    }
}

impl Reducible for StatisticsState {
    type Action = StatisticsAction;

    fn reduce(self: Rc<Self>, action: StatisticsAction) -> Rc<Self> {
        let next = (*self).clone().apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Registers the frame timer while `state` is still counting.
pub fn start_counting<S: Scheduler>(
    scheduler: &S,
    state: &StatisticsState,
    frame_ms: u32,
    tick: impl Fn() + 'static,
) -> Option<S::Handle> {
    if !state.wants_timer() {
        return None;
    }
    Some(scheduler.every(frame_ms, Box::new(move || tick())))
}

fn in_view(node: &NodeRef) -> bool {
    let Some(element) = node.cast::<web_sys::Element>() else {
        return false;
    };
    let Some(height) = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
    else {
        return false;
    };
    let rect = element.get_bounding_client_rect();
    rect.top() < height - 100.0 && rect.bottom() > 100.0
}

#[derive(Properties, PartialEq)]
pub struct StatisticsSectionProps {
    pub config: StatisticsConfig,
}

#[function_component(StatisticsSection)]
pub fn statistics_section(props: &StatisticsSectionProps) -> Html {
    let config = &props.config;
    let state = {
        let config = config.clone();
        use_reducer(move || StatisticsState::from_config(&config))
    };
    let section = use_node_ref();

    // Starts once, the first time the section scrolls into view.
    {
        let dispatcher = state.dispatcher();
        let section = section.clone();
        use_effect_with_deps(
            move |started: &bool| {
                let window = web_sys::window();
                let mut listener = None;
                if !*started {
                    if in_view(&section) {
                        dispatcher.dispatch(StatisticsAction::Start);
                    } else {
                        let callback = Closure::<dyn Fn()>::new(move || {
                            if in_view(&section) {
                                dispatcher.dispatch(StatisticsAction::Start);
                            }
                        });
                        if let Some(window) = &window {
                            let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                        }
                        listener = Some(callback);
                    }
                }
                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    }
                }
            },
            state.started(),
        );
    }

    {
        let dispatcher = state.dispatcher();
        let frame = config.frame_ms;
        let snapshot = (*state).clone();
        use_effect_with_deps(
            move |_| {
                let handle = start_counting(&BrowserScheduler, &snapshot, frame, move || {
                    dispatcher.dispatch(StatisticsAction::Tick(frame))
                });
                if handle.is_some() {
                    debug!("statistics count-up started");
                }
                move || drop(handle)
            },
            (state.wants_timer(), frame),
        );
    }

    if config.items.is_empty() {
        return html! {};
    }

    html! {
        <section class="statistics" ref={section}>
            <h2>{&config.title}</h2>
            <p class="statistics-subtitle">{&config.subtitle}</p>
            <div class="statistics-grid">
                { for config.items.iter().enumerate().map(|(i, item)| html! {
                    <div class={classes!("stat-card", state.started().then(|| "visible"))}>
                        <span class="stat-value">
                            {state.value(i).to_string()}
                            {item.suffix.clone().unwrap_or_default()}
                        </span>
                        <p class="stat-label">{&item.label}</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .statistics {
                    padding: 6rem 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                    text-align: center;
                }
                .statistics-subtitle {
                    color: #b8bcc8;
                    max-width: 640px;
                    margin: 1rem auto 3rem;
                }
                .statistics-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 2rem;
                }
                .stat-card {
                    padding: 2rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(79, 124, 255, 0.12);
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }
                .stat-card.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .stat-value {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #FFD700;
                }
                .stat-label {
                    color: #b8bcc8;
                }
                "#}
            </style>
        </section>
    }
}
