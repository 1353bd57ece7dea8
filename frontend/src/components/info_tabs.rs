use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::ContactDetails;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InfoTab {
    #[default]
    Contact,
    Hours,
    Location,
}

impl InfoTab {
    pub const ALL: [InfoTab; 3] = [InfoTab::Contact, InfoTab::Hours, InfoTab::Location];

    pub fn label(self) -> &'static str {
        match self {
            InfoTab::Contact => "Contact",
            InfoTab::Hours => "Hours",
            InfoTab::Location => "Location",
        }
    }
}

/// Exactly one tab is active at a time.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TabState {
    active: InfoTab,
}

impl TabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> InfoTab {
        self.active
    }

    pub fn is_active(&self, tab: InfoTab) -> bool {
        self.active == tab
    }

    pub fn select(self, tab: InfoTab) -> Self {
        Self { active: tab }
    }
}

pub fn mailto_link(email: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", email, urlencoding::encode(subject))
}

pub fn tel_link(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

#[derive(Properties, PartialEq)]
pub struct InfoTabsProps {
    pub details: ContactDetails,
}

#[function_component(InfoTabs)]
pub fn info_tabs(props: &InfoTabsProps) -> Html {
    let tabs = use_state(TabState::new);
    let details = &props.details;

    let panel = match tabs.active() {
        InfoTab::Contact => html! {
            <div class="info-panel">
                <p><span class="info-label">{"Email"}</span>
                    <a href={mailto_link(&details.email, "Project inquiry")}>{&details.email}</a></p>
                <p><span class="info-label">{"Phone"}</span>
                    <a href={tel_link(&details.phone)}>{&details.phone}</a></p>
            </div>
        },
        InfoTab::Hours => html! {
            <div class="info-panel">
                <ul class="hours-list">
                    { for details.hours.iter().map(|h| html! {
                        <li><span>{&h.days}</span><span>{&h.hours}</span></li>
                    }) }
                </ul>
            </div>
        },
        InfoTab::Location => html! {
            <div class="info-panel">
                <p>{&details.address}</p>
                <a href={details.map_url.clone()} target="_blank" rel="noopener noreferrer">{"Open in maps →"}</a>
            </div>
        },
    };

    html! {
        <div class="info-tabs">
            <div class="tab-row" role="tablist">
                { for InfoTab::ALL.iter().map(|&tab| {
                    let onclick = {
                        let tabs = tabs.clone();
                        Callback::from(move |_: MouseEvent| tabs.set(tabs.select(tab)))
                    };
                    html! {
                        <button
                            role="tab"
                            aria-selected={tabs.is_active(tab).to_string()}
                            class={classes!("tab-button", tabs.is_active(tab).then(|| "active"))}
                            {onclick}
                        >
                            {tab.label()}
                        </button>
                    }
                }) }
            </div>
            {panel}
            <style>
                {r#"
                .info-tabs {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(79, 124, 255, 0.15);
                    border-radius: 16px;
                    padding: 1.5rem;
                }
                .tab-row {
                    display: flex;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .tab-button {
                    flex: 1;
                    padding: 0.6rem;
                    border: none;
                    border-radius: 8px;
                    background: transparent;
                    color: #b8bcc8;
                    cursor: pointer;
                }
                .tab-button.active {
                    background: #4F7CFF;
                    color: #fff;
                }
                .info-label {
                    display: block;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    color: #7d8296;
                }
                .info-panel a {
                    color: #8FB8FF;
                }
                .hours-list {
                    list-style: none;
                    padding: 0;
                }
                .hours-list li {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.4rem 0;
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
    fn contact_is_the_initial_tab() {
        assert_eq!(TabState::new().active(), InfoTab::Contact);
    }

    #[test]
    fn switching_tabs_leaves_exactly_one_active() {
        for from in InfoTab::ALL {
            for to in InfoTab::ALL {
                let state = TabState::new().select(from).select(to);
                assert_eq!(state.active(), to);
                let active: Vec<_> = InfoTab::ALL.into_iter().filter(|&t| state.is_active(t)).collect();
                assert_eq!(active, [to], "{:?} -> {:?}", from, to);
            }
        }
    }

    #[test]
    fn selecting_the_active_tab_changes_nothing() {
        let state = TabState::new().select(InfoTab::Hours);
        assert_eq!(state.select(InfoTab::Hours), state);
    }

    #[test]
    fn tabs_are_distinct() {
        let labels: Vec<_> = InfoTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Contact", "Hours", "Location"]);
    }

    #[test]
    fn mailto_subject_is_encoded() {
        assert_eq!(
            mailto_link("hello@example.com", "Project inquiry & quote"),
            "mailto:hello@example.com?subject=Project%20inquiry%20%26%20quote"
        );
    }

    #[test]
    fn tel_link_keeps_only_dialable_characters() {
        assert_eq!(tel_link("+1 555 0142"), "tel:+15550142");
    }
}
