use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::use_is_mounted;

use crate::content::{ContactFormConfig, SimulatedOutcome};
use crate::schedule::{BrowserScheduler, Scheduler};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Your message could not be sent. Please check the details and try again.")]
    Rejected,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, PartialEq, Debug)]
pub enum FormAction {
    Edit(FormField, String),
    Submit,
    Settled(Result<(), SubmitError>),
    Reset,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: SubmitStatus,
    pub in_flight: bool,
    pub last_error: Option<SubmitError>,
}

impl ContactFormState {
    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    pub fn can_submit(&self) -> bool {
        self.is_complete() && !self.in_flight
    }

    /// The message to send, or `None` if submitting now would be refused.
    pub fn outgoing(&self) -> Option<ContactMessage> {
        self.can_submit().then(|| ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    pub fn apply(mut self, action: FormAction) -> Self {
        match action {
            FormAction::Edit(field, value) => {
                if self.in_flight {
                    return self;
                }
                *self.field_mut(field) = value;
                self.status = SubmitStatus::Idle;
                self.last_error = None;
                self
            }
            FormAction::Submit => {
                if self.can_submit() {
                    self.in_flight = true;
                }
                self
            }
            FormAction::Settled(_) if !self.in_flight => self,
            FormAction::Settled(Ok(())) => Self {
                status: SubmitStatus::Success,
                ..Self::default()
            },
            FormAction::Settled(Err(e)) => {
                self.in_flight = false;
                self.status = SubmitStatus::Error;
                self.last_error = Some(e);
                self
            }
            FormAction::Reset if self.in_flight => self,
            FormAction::Reset => Self::default(),
        }
    }
}

impl Reducible for ContactFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

/// Stands in for the remote call: waits `delay_ms`, then reports the
/// configured outcome.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
    pub outcome: SimulatedOutcome,
}

impl From<&ContactFormConfig> for SimulatedSubmitter {
    fn from(config: &ContactFormConfig) -> Self {
        Self {
            delay_ms: config.submit_delay_ms,
            outcome: config.simulated_outcome,
        }
    }
}

impl SimulatedSubmitter {
    pub fn send<S: Scheduler>(
        &self,
        scheduler: &S,
        message: ContactMessage,
        is_mounted: Rc<dyn Fn() -> bool>,
        on_settled: impl FnOnce(Result<(), SubmitError>) + 'static,
    ) {
        let outcome = self.outcome;
        info!("Sending contact message from {}", message.email);
        scheduler.after(
            self.delay_ms,
            Box::new(move || {
                let result = match outcome {
                    SimulatedOutcome::Succeed => Ok(()),
                    SimulatedOutcome::Fail => Err(SubmitError::Rejected),
                };
                if !is_mounted() {
                    debug!("contact form unmounted before submission settled, dropping result");
                    return;
                }
                if let Err(e) = &result {
                    warn!("Contact submission failed: {}", e);
                }
                on_settled(result);
            }),
        );
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub config: ContactFormConfig,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_reducer(ContactFormState::default);
    let is_mounted = use_is_mounted();
    let submitter = SimulatedSubmitter::from(&props.config);

    let on_input = |field: FormField| {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = e
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .or_else(|| e.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()));
            if let Some(value) = value {
                dispatcher.dispatch(FormAction::Edit(field, value));
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(message) = form.outgoing() else {
                return;
            };
            form.dispatch(FormAction::Submit);
            let dispatcher = form.dispatcher();
            submitter.send(&BrowserScheduler, message, is_mounted.clone(), move |result| {
                dispatcher.dispatch(FormAction::Settled(result))
            });
        })
    };

    let on_reset = {
        let dispatcher = form.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(FormAction::Reset))
    };

    let banner = match form.status {
        SubmitStatus::Idle => html! {},
        SubmitStatus::Error => html! {
            <div class="form-banner error">
                { form.last_error.as_ref().map(ToString::to_string).unwrap_or_default() }
            </div>
        },
        SubmitStatus::Success => html! {
            <div class="form-banner success">
                <span>{"Thanks! We'll get back to you within one business day."}</span>
                <button type="button" class="link-button" onclick={on_reset.clone()}>{"Send another message"}</button>
            </div>
        },
    };

    html! {
        <form class="contact-form" {onsubmit}>
            {banner}
            <div class="form-row">
                <input type="text" placeholder="Your name" required=true
                    value={form.name.clone()} oninput={on_input(FormField::Name)} disabled={form.in_flight} />
                <input type="email" placeholder="Email address" required=true
                    value={form.email.clone()} oninput={on_input(FormField::Email)} disabled={form.in_flight} />
            </div>
            <input type="text" placeholder="Subject" required=true
                value={form.subject.clone()} oninput={on_input(FormField::Subject)} disabled={form.in_flight} />
            <textarea placeholder="Tell us about your project" rows="6" required=true
                value={form.message.clone()} oninput={on_input(FormField::Message)} disabled={form.in_flight} />
            <button type="submit" class="submit-button" disabled={!form.can_submit()}>
                { if form.in_flight { "Sending..." } else { "Send message" } }
            </button>
            <style>
                {r#"
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .form-row {
                    display: flex;
                    gap: 1rem;
                }
                .form-row input {
                    flex: 1;
                }
                .contact-form input,
                .contact-form textarea {
                    padding: 0.9rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(79, 124, 255, 0.25);
                    background: rgba(255, 255, 255, 0.04);
                    color: #fff;
                    font-size: 1rem;
                }
                .submit-button {
                    padding: 0.9rem;
                    border: none;
                    border-radius: 8px;
                    background: #4F7CFF;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .submit-button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .form-banner {
                    padding: 0.9rem 1rem;
                    border-radius: 8px;
                }
                .form-banner.success {
                    background: rgba(46, 204, 113, 0.15);
                    color: #7be3a5;
                    display: flex;
                    justify-content: space-between;
                }
                .form-banner.error {
                    background: rgba(231, 76, 60, 0.15);
                    color: #ff8a7a;
                }
                .link-button {
                    background: none;
                    border: none;
                    color: inherit;
                    text-decoration: underline;
                    cursor: pointer;
                }
                @media (max-width: 700px) {
                    .form-row { flex-direction: column; }
                }
                "#}
            </style>
        </form>
    }
}
