use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FaqEntry;

/// At most one entry open. `len` is fixed at mount.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AccordionState {
    expanded: Option<usize>,
    len: usize,
}

impl AccordionState {
    pub fn new(len: usize) -> Self {
        Self { expanded: None, len }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn toggle(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        let expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        Self { expanded, ..self }
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let state = {
        let len = props.entries.len();
        use_state(move || AccordionState::new(len))
    };

    if props.entries.is_empty() {
        return html! {};
    }

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(i, entry)| {
                let toggle = {
                    let state = state.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        state.set((*state).toggle(i));
                    })
                };
                let open = state.is_expanded(i);
                html! {
                    <div class={classes!("faq-item", open.then(|| "open"))}>
                        <button class="faq-question" aria-expanded={open.to_string()} onclick={toggle}>
                            <span class="question-text">{&entry.question}</span>
                            <span class="toggle-icon">{if open { "−" } else { "+" }}</span>
                        </button>
                        if open {
                            <div class="faq-answer">
                                <p>{&entry.answer}</p>
                            </div>
                        }
                    </div>
                }
            }) }
            <style>
                {r#"
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }
                .faq-item {
                    border-bottom: 1px solid rgba(79, 124, 255, 0.15);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.4rem 0;
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    color: #4F7CFF;
                }
                .faq-answer {
                    padding-bottom: 1.4rem;
                    color: #b8bcc8;
                    line-height: 1.6;
                    animation: faqOpen 0.3s ease-out;
                }
                @keyframes faqOpen {
                    from { opacity: 0; transform: translateY(-6px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        assert_eq!(AccordionState::new(4).expanded(), None);
    }

    #[test]
    fn opening_another_entry_closes_the_first() {
        for i in 0..4 {
            for j in (0..4).filter(|&j| j != i) {
                let state = AccordionState::new(4).toggle(i).toggle(j);
                assert_eq!(state.expanded(), Some(j));
                assert!(!state.is_expanded(i));
            }
        }
    }

    #[test]
    fn selecting_the_open_entry_collapses_it() {
        let state = AccordionState::new(3).toggle(1).toggle(1);
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn out_of_range_and_empty_lists_are_ignored() {
        let state = AccordionState::new(2).toggle(0);
        assert_eq!(state.toggle(2), state);
        let empty = AccordionState::new(0);
        assert_eq!(empty.toggle(0).expanded(), None);
    }
}
