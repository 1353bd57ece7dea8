use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::Slide;
use crate::schedule::{BrowserScheduler, Scheduler};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RotationAction {
    PointerEnter,
    PointerLeave,
    Tick,
    Select(usize),
    Next,
    Prev,
}

/// Which slide is showing and whether the timer should be moving it.
///
/// The slide count is fixed when the state is created, so every index stays
/// in range for the lifetime of the carousel. With zero slides every action
/// is a no-op.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RotationState {
    pub current_index: usize,
    pub is_auto_advancing: bool,
    slide_count: usize,
}

impl RotationState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            current_index: 0,
            is_auto_advancing: true,
            slide_count,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// True while a repeating timer should be registered.
    pub fn wants_timer(&self) -> bool {
        self.is_auto_advancing && self.slide_count > 0
    }

    fn step(&self, forward: bool) -> usize {
        let n = self.slide_count;
        if forward {
            (self.current_index + 1) % n
        } else {
            (self.current_index + n - 1) % n
        }
    }

    pub fn apply(self, action: RotationAction) -> Self {
        if self.slide_count == 0 {
            return self;
        }
        match action {
            RotationAction::PointerEnter => Self {
                is_auto_advancing: false,
                ..self
            },
            RotationAction::PointerLeave => Self {
                is_auto_advancing: true,
                ..self
            },
            RotationAction::Tick if self.is_auto_advancing => Self {
                current_index: self.step(true),
                ..self
            },
            RotationAction::Tick => self,
            RotationAction::Select(i) if i < self.slide_count => Self {
                current_index: i,
                ..self
            },
            RotationAction::Select(_) => self,
            RotationAction::Next => Self {
                current_index: self.step(true),
                ..self
            },
            RotationAction::Prev => Self {
                current_index: self.step(false),
                ..self
            },
        }
    }
}

impl Reducible for RotationState {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: RotationAction) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Registers the autoplay timer if `state` is playing. The caller owns the
/// handle; dropping it stops the rotation.
pub fn start_autoplay<S: Scheduler>(
    scheduler: &S,
    state: &RotationState,
    period_ms: u32,
    tick: impl Fn() + 'static,
) -> Option<S::Handle> {
    if !state.wants_timer() {
        return None;
    }
    Some(scheduler.every(period_ms, Box::new(move || tick())))
}

fn default_background() -> String {
    "/assets/hero-default.jpg".to_string()
}

#[derive(Properties, PartialEq)]
pub struct HeroCarouselProps {
    pub slides: Vec<Slide>,
    #[prop_or(5000)]
    pub auto_play_interval_ms: u32,
    #[prop_or(true)]
    pub show_controls: bool,
    #[prop_or_else(default_background)]
    pub default_background: String,
    #[prop_or_default]
    pub on_call_to_action: Callback<usize>,
}

#[function_component(HeroCarousel)]
pub fn hero_carousel(props: &HeroCarouselProps) -> Html {
    let state = {
        let count = props.slides.len();
        use_reducer(move || RotationState::new(count))
    };

    // Timer lives exactly as long as this effect: re-created when playback
    // resumes, dropped on pause and on unmount.
    {
        let dispatcher = state.dispatcher();
        let period = props.auto_play_interval_ms;
        let snapshot = *state;
        use_effect_with_deps(
            move |_| {
                let handle = start_autoplay(&BrowserScheduler, &snapshot, period, move || {
                    dispatcher.dispatch(RotationAction::Tick)
                });
                if handle.is_some() {
                    debug!("hero autoplay started ({}ms)", period);
                }
                move || {
                    if handle.is_some() {
                        debug!("hero autoplay stopped");
                    }
                    drop(handle);
                }
            },
            (state.wants_timer(), period),
        );
    }

    if state.slide_count() == 0 {
        return html! {};
    }
    let Some(slide) = props.slides.get(state.current_index) else {
        return html! {};
    };

    let send = |action: RotationAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };

    let call_to_action = slide.call_to_action.as_ref().map(|label| {
        let on_call_to_action = props.on_call_to_action.clone();
        let index = state.current_index;
        html! {
            <button class="hero-cta" onclick={Callback::from(move |_: MouseEvent| on_call_to_action.emit(index))}>
                {label}
            </button>
        }
    });

    html! {
        <section
            class={classes!("hero-carousel", (!state.is_auto_advancing).then(|| "paused"))}
            onmouseenter={send(RotationAction::PointerEnter)}
            onmouseleave={send(RotationAction::PointerLeave)}
        >
            <div
                key={state.current_index}
                class="hero-slide"
                style={format!("background-image: url('{}');", slide.background_or(&props.default_background))}
            >
                <div class="hero-slide-overlay"></div>
                <div class="hero-slide-content">
                    <p class="hero-subtitle">{&slide.subtitle}</p>
                    <h1>{&slide.title}</h1>
                    <p class="hero-description">{&slide.description}</p>
                    { for call_to_action }
                </div>
            </div>
            if props.show_controls {
                <>
                    <button class="hero-control prev" aria-label="Previous slide" onclick={send(RotationAction::Prev)}>{"‹"}</button>
                    <button class="hero-control next" aria-label="Next slide" onclick={send(RotationAction::Next)}>{"›"}</button>
                </>
            }
            <div class="hero-dots">
                { for (0..state.slide_count()).map(|i| html! {
                    <button
                        class={classes!("hero-dot", (i == state.current_index).then(|| "active"))}
                        aria-label={format!("Show slide {}", i + 1)}
                        onclick={send(RotationAction::Select(i))}
                    />
                }) }
            </div>
            <style>
                {r#"
                .hero-carousel {
                    position: relative;
                    height: 90vh;
                    min-height: 520px;
                    overflow: hidden;
                    color: #fff;
                }
                .hero-slide {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    display: flex;
                    align-items: center;
                    animation: heroFade 0.8s ease-out;
                }
                @keyframes heroFade {
                    from { opacity: 0; transform: scale(1.03); }
                    to { opacity: 1; transform: scale(1); }
                }
                .hero-slide-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(90deg, rgba(10, 12, 24, 0.85), rgba(10, 12, 24, 0.2));
                }
                .hero-slide-content {
                    position: relative;
                    max-width: 640px;
                    margin-left: 8vw;
                }
                .hero-slide-content h1 {
                    font-size: 3.4rem;
                    margin: 0.5rem 0 1rem;
                }
                .hero-subtitle {
                    text-transform: uppercase;
                    letter-spacing: 0.12em;
                    color: #8FB8FF;
                }
                .hero-description {
                    font-size: 1.15rem;
                    color: #d6d9e0;
                    line-height: 1.6;
                }
                .hero-cta {
                    margin-top: 1.5rem;
                    padding: 0.9rem 2rem;
                    border: none;
                    border-radius: 999px;
                    background: #4F7CFF;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .hero-cta:hover {
                    transform: translateY(-2px);
                }
                .hero-control {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    background: rgba(255, 255, 255, 0.12);
                    border: none;
                    color: #fff;
                    font-size: 2rem;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    cursor: pointer;
                }
                .hero-control.prev { left: 1.5rem; }
                .hero-control.next { right: 1.5rem; }
                .hero-dots {
                    position: absolute;
                    bottom: 2rem;
                    width: 100%;
                    display: flex;
                    justify-content: center;
                    gap: 0.6rem;
                }
                .hero-dot {
                    width: 12px;
                    height: 12px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.4);
                    cursor: pointer;
                    transition: background 0.3s ease, transform 0.3s ease;
                }
                .hero-dot.active {
                    background: #fff;
                    transform: scale(1.3);
                }
                @media (max-width: 768px) {
                    .hero-slide-content h1 { font-size: 2.2rem; }
                    .hero-control { display: none; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::schedule::manual::{ManualHandle, ManualScheduler};

    /// Mirrors what the component effect does: the timer is (re)registered
    /// whenever `wants_timer` flips, and dropped when it goes false.
    struct Harness {
        scheduler: ManualScheduler,
        state: Rc<RefCell<RotationState>>,
        period_ms: u32,
        handle: Option<ManualHandle>,
    }

    impl Harness {
        fn mount(slides: usize, period_ms: u32) -> Self {
            let mut harness = Self {
                scheduler: ManualScheduler::new(),
                state: Rc::new(RefCell::new(RotationState::new(slides))),
                period_ms,
                handle: None,
            };
            harness.sync();
            harness
        }

        fn sync(&mut self) {
            let current = *self.state.borrow();
            if current.wants_timer() == self.handle.is_some() {
                return;
            }
            let state = self.state.clone();
            self.handle = start_autoplay(&self.scheduler, &current, self.period_ms, move || {
                let next = state.borrow().apply(RotationAction::Tick);
                *state.borrow_mut() = next;
            });
        }

        fn send(&mut self, action: RotationAction) {
            let next = self.state.borrow().apply(action);
            *self.state.borrow_mut() = next;
            self.sync();
        }

        fn index(&self) -> usize {
            self.state.borrow().current_index
        }

        fn unmount(mut self) -> ManualScheduler {
            self.handle = None;
            self.scheduler.clone()
        }
    }

    #[test]
    fn starts_playing_at_first_slide() {
        let state = RotationState::new(3);
        assert_eq!(state.current_index, 0);
        assert!(state.is_auto_advancing);
        assert!(state.wants_timer());
    }

    #[test]
    fn advancing_n_times_returns_to_start() {
        for n in 1..=7 {
            for start in 0..n {
                let mut state = RotationState::new(n).apply(RotationAction::Select(start));
                for _ in 0..n {
                    state = state.apply(RotationAction::Tick);
                }
                assert_eq!(state.current_index, start, "deck of {}", n);
            }
        }
    }

    #[test]
    fn tick_while_paused_keeps_index() {
        let state = RotationState::new(4)
            .apply(RotationAction::Select(2))
            .apply(RotationAction::PointerEnter);
        let ticked = state.apply(RotationAction::Tick);
        assert_eq!(ticked, state);
        assert!(!ticked.wants_timer());
    }

    #[test]
    fn select_sets_index_from_any_state() {
        for paused in [false, true] {
            for from in 0..5 {
                let mut state = RotationState::new(5).apply(RotationAction::Select(from));
                if paused {
                    state = state.apply(RotationAction::PointerEnter);
                }
                for k in 0..5 {
                    let selected = state.apply(RotationAction::Select(k));
                    assert_eq!(selected.current_index, k);
                    assert_eq!(selected.is_auto_advancing, !paused);
                }
            }
        }
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let state = RotationState::new(3).apply(RotationAction::Select(1));
        assert_eq!(state.apply(RotationAction::Select(3)), state);
    }

    #[test]
    fn prev_and_next_wrap_at_both_ends() {
        let state = RotationState::new(3);
        assert_eq!(state.apply(RotationAction::Prev).current_index, 2);
        let last = state.apply(RotationAction::Select(2));
        assert_eq!(last.apply(RotationAction::Next).current_index, 0);
        let paused = last.apply(RotationAction::PointerEnter).apply(RotationAction::Next);
        assert_eq!(paused.current_index, 0);
        assert!(!paused.is_auto_advancing);
    }

    #[test]
    fn single_slide_deck_stays_put() {
        let state = RotationState::new(1);
        assert_eq!(state.apply(RotationAction::Tick).current_index, 0);
        assert_eq!(state.apply(RotationAction::Prev).current_index, 0);
    }

    #[test]
    fn empty_deck_never_schedules_or_faults() {
        let state = RotationState::new(0);
        assert!(!state.wants_timer());
        for action in [
            RotationAction::Tick,
            RotationAction::Next,
            RotationAction::Prev,
            RotationAction::Select(0),
            RotationAction::PointerLeave,
        ] {
            assert_eq!(state.apply(action), state);
        }

        let harness = Harness::mount(0, 5000);
        assert_eq!(harness.scheduler.pending(), 0);
        harness.scheduler.advance(60_000);
        assert_eq!(harness.index(), 0);
    }

    #[test]
    fn reducer_keeps_the_same_rc_when_nothing_changes() {
        let state = Rc::new(RotationState::new(2).apply(RotationAction::PointerEnter));
        let after = state.clone().reduce(RotationAction::Tick);
        assert!(Rc::ptr_eq(&state, &after));
        let moved = state.clone().reduce(RotationAction::Next);
        assert_eq!(moved.current_index, 1);
    }

    #[test]
    fn hover_pauses_and_resumes_the_timer() {
        let mut harness = Harness::mount(4, 5000);
        assert_eq!(harness.scheduler.pending(), 1);

        harness.send(RotationAction::PointerEnter);
        assert_eq!(harness.scheduler.pending(), 0);
        harness.scheduler.advance(20_000);
        assert_eq!(harness.index(), 0);

        harness.send(RotationAction::PointerLeave);
        assert_eq!(harness.scheduler.pending(), 1);
        harness.scheduler.advance(5000);
        assert_eq!(harness.index(), 1);
    }

    #[test]
    fn manual_navigation_does_not_touch_the_timer() {
        let mut harness = Harness::mount(4, 1000);
        harness.send(RotationAction::Select(3));
        harness.send(RotationAction::Prev);
        assert_eq!(harness.index(), 2);
        assert_eq!(harness.scheduler.pending(), 1);
        harness.scheduler.advance(1000);
        assert_eq!(harness.index(), 3);
    }

    #[test]
    fn unmount_releases_the_timer() {
        let harness = Harness::mount(4, 5000);
        let state = harness.state.clone();
        let scheduler = harness.unmount();
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(50_000);
        assert_eq!(state.borrow().current_index, 0);
    }

    #[test]
    fn four_slide_scenario() {
        let mut harness = Harness::mount(4, 5000);
        assert_eq!(harness.index(), 0);

        harness.scheduler.advance(5000);
        assert_eq!(harness.index(), 1);

        harness.send(RotationAction::PointerEnter);
        harness.scheduler.advance(15_000);
        assert_eq!(harness.index(), 1);

        harness.send(RotationAction::PointerLeave);
        harness.scheduler.advance(5000);
        assert_eq!(harness.index(), 2);
        harness.scheduler.advance(5000);
        assert_eq!(harness.index(), 3);
        harness.scheduler.advance(5000);
        assert_eq!(harness.index(), 0);
    }
}
