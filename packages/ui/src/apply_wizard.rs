//! Three-step job application wizard.
//!
//! Submitting only marks the draft as sent: there is no applications
//! endpoint, so nothing leaves the browser.

use api::UserInfo;
use dioxus::prelude::*;
use store::Job;

use crate::components::{Button, ButtonVariant, FormMessage, Input, Label, MessageKind};
use crate::validation::{require, validate_email, validate_phone, Validation};
use crate::views::ModalOverlay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Personal,
    Resume,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Personal, WizardStep::Resume, WizardStep::Review];

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Personal => "Personal details",
            WizardStep::Resume => "Résumé",
            WizardStep::Review => "Review & submit",
        }
    }

    pub fn number(&self) -> usize {
        match self {
            WizardStep::Personal => 1,
            WizardStep::Resume => 2,
            WizardStep::Review => 3,
        }
    }

    fn following(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Personal => Some(WizardStep::Resume),
            WizardStep::Resume => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    fn preceding(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Personal => None,
            WizardStep::Resume => Some(WizardStep::Personal),
            WizardStep::Review => Some(WizardStep::Resume),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// File name only; the file itself is never uploaded.
    pub resume: Option<String>,
    pub cover_letter: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyWizard {
    pub job_id: u32,
    pub job_title: String,
    pub step: WizardStep,
    pub draft: ApplicationDraft,
    pub submitted: bool,
}

impl ApplyWizard {
    pub fn new(job: &Job) -> Self {
        Self {
            job_id: job.id,
            job_title: job.title.clone(),
            step: WizardStep::default(),
            draft: ApplicationDraft::default(),
            submitted: false,
        }
    }

    /// Seed empty personal fields from the signed-in user.
    pub fn prefill(&mut self, user: &UserInfo) {
        if self.draft.name.is_empty() {
            self.draft.name = user.name.clone();
        }
        if self.draft.email.is_empty() {
            self.draft.email = user.email.clone();
        }
        if self.draft.phone.is_empty() {
            if let Some(phone) = &user.phone {
                self.draft.phone = phone.clone();
            }
        }
    }

    fn check(&self, step: WizardStep) -> Validation {
        match step {
            WizardStep::Personal => {
                require("Full name", &self.draft.name)?;
                validate_email(&self.draft.email)?;
                validate_phone(&self.draft.phone)
            }
            WizardStep::Resume => match &self.draft.resume {
                Some(_) => Ok(()),
                None => Err("Please attach your résumé".to_string()),
            },
            WizardStep::Review => Ok(()),
        }
    }

    pub fn validate_step(&self) -> Validation {
        self.check(self.step)
    }

    /// Advance one step if the current one is complete.
    pub fn next(&mut self) -> Result<WizardStep, String> {
        self.validate_step()?;
        if let Some(step) = self.step.following() {
            self.step = step;
        }
        Ok(self.step)
    }

    pub fn back(&mut self) -> WizardStep {
        if let Some(step) = self.step.preceding() {
            self.step = step;
        }
        self.step
    }

    pub fn is_first(&self) -> bool {
        self.step.preceding().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.step.following().is_none()
    }

    /// Re-check every step, then mark the application as sent.
    pub fn submit(&mut self) -> Validation {
        for step in WizardStep::ALL {
            if let Err(message) = self.check(step) {
                self.step = step;
                return Err(message);
            }
        }
        self.submitted = true;
        tracing::info!(job_id = self.job_id, "application submitted locally");
        Ok(())
    }
}

/// Modal hosting an [`ApplyWizard`] for `job`.
#[component]
pub fn ApplyWizardModal(
    job: Job,
    user: Option<UserInfo>,
    on_close: EventHandler<()>,
) -> Element {
    let mut wizard = use_signal(|| {
        let mut wizard = ApplyWizard::new(&job);
        if let Some(user) = &user {
            wizard.prefill(user);
        }
        wizard
    });
    let mut error = use_signal(|| Option::<String>::None);

    let on_next = move |_| {
        let result = wizard.write().next();
        error.set(result.err());
    };
    let on_back = move |_| {
        wizard.write().back();
        error.set(None);
    };
    let on_submit = move |_| {
        let result = wizard.write().submit();
        error.set(result.err());
    };

    let state = wizard();
    let draft = state.draft.clone();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "p-6",
                h2 { class: "m-0 mb-1 text-lg font-semibold", "Apply for {state.job_title}" }

                if state.submitted {
                    FormMessage {
                        kind: MessageKind::Success,
                        message: "Application sent. The employer will be in touch.".to_string(),
                    }
                    div {
                        class: "flex justify-end mt-5",
                        Button { onclick: move |_| on_close.call(()), "Close" }
                    }
                } else {
                    ol {
                        class: "wizard-steps",
                        for step in WizardStep::ALL {
                            li {
                                class: if step == state.step { "wizard-step wizard-step--active" } else { "wizard-step" },
                                span { class: "wizard-step-number", "{step.number()}" }
                                span { "{step.title()}" }
                            }
                        }
                    }

                    {match state.step {
                        WizardStep::Personal => rsx! {
                            div {
                                class: "flex flex-col gap-3",
                                div {
                                    Label { html_for: "apply-name", "Full name" }
                                    Input {
                                        id: "apply-name",
                                        class: "w-full",
                                        value: draft.name.clone(),
                                        oninput: move |evt: FormEvent| wizard.write().draft.name = evt.value(),
                                    }
                                }
                                div {
                                    Label { html_for: "apply-email", "Email" }
                                    Input {
                                        id: "apply-email",
                                        class: "w-full",
                                        r#type: "email",
                                        value: draft.email.clone(),
                                        oninput: move |evt: FormEvent| wizard.write().draft.email = evt.value(),
                                    }
                                }
                                div {
                                    Label { html_for: "apply-phone", "Phone (optional)" }
                                    Input {
                                        id: "apply-phone",
                                        class: "w-full",
                                        r#type: "tel",
                                        value: draft.phone.clone(),
                                        oninput: move |evt: FormEvent| wizard.write().draft.phone = evt.value(),
                                    }
                                }
                            }
                        },
                        WizardStep::Resume => rsx! {
                            div {
                                Label { html_for: "apply-resume", "Résumé" }
                                input {
                                    id: "apply-resume",
                                    class: "input w-full",
                                    r#type: "file",
                                    accept: ".pdf,.doc,.docx",
                                    onchange: move |evt: FormEvent| {
                                        let name = evt.files().first().map(|file| file.name());
                                        wizard.write().draft.resume = name;
                                    },
                                }
                                if let Some(name) = draft.resume.clone() {
                                    p { class: "text-sm mt-2", "Selected: {name}" }
                                }
                            }
                        },
                        WizardStep::Review => rsx! {
                            div {
                                class: "flex flex-col gap-3",
                                dl {
                                    class: "review-list",
                                    dt { "Name" }
                                    dd { "{draft.name}" }
                                    dt { "Email" }
                                    dd { "{draft.email}" }
                                    if !draft.phone.is_empty() {
                                        dt { "Phone" }
                                        dd { "{draft.phone}" }
                                    }
                                    dt { "Résumé" }
                                    dd { {draft.resume.clone().unwrap_or_default()} }
                                }
                                div {
                                    Label { html_for: "apply-cover", "Cover letter (optional)" }
                                    textarea {
                                        id: "apply-cover",
                                        class: "input w-full",
                                        rows: "5",
                                        value: draft.cover_letter.clone(),
                                        oninput: move |evt: FormEvent| wizard.write().draft.cover_letter = evt.value(),
                                    }
                                }
                            }
                        },
                    }}

                    if let Some(message) = error() {
                        FormMessage { kind: MessageKind::Error, message }
                    }

                    div {
                        class: "flex justify-between gap-2 mt-5",
                        if state.is_first() {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| on_close.call(()),
                                "Cancel"
                            }
                        } else {
                            Button { variant: ButtonVariant::Outline, onclick: on_back, "Back" }
                        }
                        if state.is_last() {
                            Button { onclick: on_submit, "Submit application" }
                        } else {
                            Button { onclick: on_next, "Next" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> Job {
        store::fixtures().into_iter().next().unwrap()
    }

    fn personal(wizard: &mut ApplyWizard) {
        wizard.draft.name = "Ada Lovelace".into();
        wizard.draft.email = "ada@example.com".into();
    }

    #[test]
    fn test_refuses_to_advance_without_required_fields() {
        let mut wizard = ApplyWizard::new(&job());
        assert_eq!(wizard.next(), Err("Full name is required".to_string()));
        assert_eq!(wizard.step, WizardStep::Personal);

        wizard.draft.name = "Ada".into();
        wizard.draft.email = "not-an-email".into();
        assert!(wizard.next().is_err());
        assert_eq!(wizard.step, WizardStep::Personal);
    }

    #[test]
    fn test_optional_phone_still_validated() {
        let mut wizard = ApplyWizard::new(&job());
        personal(&mut wizard);
        wizard.draft.phone = "call me".into();
        assert!(wizard.next().is_err());
        wizard.draft.phone.clear();
        assert_eq!(wizard.next(), Ok(WizardStep::Resume));
    }

    #[test]
    fn test_resume_required() {
        let mut wizard = ApplyWizard::new(&job());
        personal(&mut wizard);
        wizard.next().unwrap();
        assert!(wizard.next().is_err());
        assert_eq!(wizard.step, WizardStep::Resume);

        wizard.draft.resume = Some("cv.pdf".into());
        assert_eq!(wizard.next(), Ok(WizardStep::Review));
        assert!(wizard.is_last());
    }

    #[test]
    fn test_back_never_validates() {
        let mut wizard = ApplyWizard::new(&job());
        personal(&mut wizard);
        wizard.next().unwrap();
        wizard.draft.name.clear();
        assert_eq!(wizard.back(), WizardStep::Personal);
        assert_eq!(wizard.back(), WizardStep::Personal);
        assert!(wizard.is_first());
    }

    #[test]
    fn test_submit_marks_draft_sent() {
        let mut wizard = ApplyWizard::new(&job());
        personal(&mut wizard);
        wizard.draft.resume = Some("cv.pdf".into());
        wizard.step = WizardStep::Review;
        assert_eq!(wizard.submit(), Ok(()));
        assert!(wizard.submitted);
    }

    #[test]
    fn test_submit_jumps_to_first_incomplete_step() {
        let mut wizard = ApplyWizard::new(&job());
        personal(&mut wizard);
        wizard.step = WizardStep::Review;
        assert!(wizard.submit().is_err());
        assert_eq!(wizard.step, WizardStep::Resume);
        assert!(!wizard.submitted);
    }

    #[test]
    fn test_prefill_keeps_typed_values() {
        let mut wizard = ApplyWizard::new(&job());
        wizard.draft.name = "Typed".into();
        wizard.prefill(&UserInfo {
            id: 1,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: Some("+44 20 7946 0000".into()),
            email_verified_at: None,
            created_at: None,
        });
        assert_eq!(wizard.draft.name, "Typed");
        assert_eq!(wizard.draft.email, "ada@example.com");
        assert_eq!(wizard.draft.phone, "+44 20 7946 0000");
    }
}
