// SPDX-License-Identifier: MPL-2.0
//! Contact section: the form view and the glue between the
//! [`ContactForm`] state machine and iced tasks.
//!
//! The send and the success-reset timer run as abortable tasks. Their
//! handles abort on drop, so replacing or tearing down the state cancels
//! whatever is still pending. Results that slip through anyway carry a
//! [`Ticket`] and are dropped by the state machine when stale.

use crate::app::section::Region;
use crate::contact::{
    ContactForm, FormField, FormStatus, MessageSender, SubmissionError, SubmitOutcome, Ticket,
    ValidationError,
};
use crate::content;
use crate::ui::animation::{Motion, Preset};
use crate::ui::components::{animated, bounded, section_heading};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme::faded;
use crate::ui::theming::ColorScheme;
use iced::{
    font::Weight,
    task,
    widget::{button, text_editor, text_input, Column, Container, Row, Text},
    Element, Font, Length, Task,
};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(FormField, String),
    MessageEdited(text_editor::Action),
    Submit,
    Sent(Ticket, Result<(), SubmissionError>),
    ResetElapsed(Ticket),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Client-side validation refused the submission.
    Rejected(ValidationError),
    /// The message was delivered.
    Sent,
    /// Delivery failed; the fields are kept for a retry.
    SendFailed(SubmissionError),
}

/// Contact form state owned by the application.
pub struct State {
    form: ContactForm,
    message: text_editor::Content,
    sender: Arc<dyn MessageSender>,
    success_reset: Duration,
    send_task: Option<task::Handle>,
    reset_task: Option<task::Handle>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("form", &self.form)
            .field("sender", &self.sender)
            .field("success_reset", &self.success_reset)
            .field("sending", &self.send_task.is_some())
            .field("resetting", &self.reset_task.is_some())
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(sender: Arc<dyn MessageSender>, success_reset: Duration) -> Self {
        Self {
            form: ContactForm::new(),
            message: text_editor::Content::new(),
            sender,
            success_reset,
            send_task: None,
            reset_task: None,
        }
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn handle_message(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::FieldChanged(field, value) => {
                self.form.update_field(field, value);
                (Event::None, Task::none())
            }
            Message::MessageEdited(action) => {
                if self.form.status().is_loading() {
                    return (Event::None, Task::none());
                }
                let is_edit = action.is_edit();
                self.message.perform(action);
                if is_edit {
                    self.form.update_field(FormField::Message, self.message.text());
                }
                (Event::None, Task::none())
            }
            Message::Submit => self.submit(),
            Message::Sent(ticket, result) => self.finish(ticket, result),
            Message::ResetElapsed(ticket) => {
                self.reset_task = None;
                self.form.reset_elapsed(ticket);
                (Event::None, Task::none())
            }
        }
    }

    fn submit(&mut self) -> (Event, Task<Message>) {
        match self.form.submit() {
            SubmitOutcome::Started { ticket, payload } => {
                tracing::info!(?ticket, "sending contact message");
                // A new attempt supersedes the previous success banner.
                self.reset_task = None;
                let (task, handle) =
                    Task::perform(self.sender.send(payload), move |result| {
                        Message::Sent(ticket, result)
                    })
                    .abortable();
                self.send_task = Some(handle.abort_on_drop());
                (Event::None, task)
            }
            SubmitOutcome::Rejected(err) => (Event::Rejected(err), Task::none()),
            SubmitOutcome::Ignored => (Event::None, Task::none()),
        }
    }

    fn finish(
        &mut self,
        ticket: Ticket,
        result: Result<(), SubmissionError>,
    ) -> (Event, Task<Message>) {
        if self.form.in_flight() != Some(ticket) {
            tracing::debug!(?ticket, "ignoring result of a superseded submission");
            return (Event::None, Task::none());
        }
        self.send_task = None;

        let failure = result.as_ref().err().cloned();
        match self.form.complete(ticket, result) {
            Some(reset) => {
                self.message = text_editor::Content::new();
                let delay = self.success_reset;
                let (task, handle) = Task::perform(
                    async move { tokio::time::sleep(delay).await },
                    move |()| Message::ResetElapsed(reset),
                )
                .abortable();
                self.reset_task = Some(handle.abort_on_drop());
                (Event::Sent, task)
            }
            None => (
                failure.map_or(Event::None, Event::SendFailed),
                Task::none(),
            ),
        }
    }

    /// Cancels the in-flight send and the reset timer.
    pub fn teardown(&mut self) {
        self.send_task = None;
        self.reset_task = None;
        self.form.cancel_pending();
    }
}

pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    pub motion: Motion<'a, Region>,
    pub state: &'a State,
}

/// Label of the submit button for `status`.
#[must_use]
pub fn submit_label(status: &FormStatus) -> &'static str {
    if status.is_loading() {
        "Sending..."
    } else {
        "Send Message"
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ctx.colors;
    let form = ctx.state.form();
    let status = form.status();
    let loading = status.is_loading();

    let heading = {
        let frame = ctx.motion.frame(Region::Contact, Preset::SlideUp);
        animated(
            section_heading(&content::profile().contact, colors, frame),
            frame,
            Preset::SlideUp,
        )
    };

    let frame = ctx
        .motion
        .staggered(Region::Contact, Preset::ScrollReveal, 1);
    let o = frame.opacity;

    let field_input = |field| single_line(form, field, loading, colors, o);

    let message_editor = {
        let editor = text_editor(&ctx.state.message)
            .placeholder(FormField::Message.placeholder())
            .height(Length::Fixed(sizing::MESSAGE_INPUT_HEIGHT))
            .padding(spacing::SM)
            .size(typography::BODY);
        let editor = if loading {
            editor
        } else {
            editor.on_action(Message::MessageEdited)
        };
        labelled(FormField::Message, editor.into(), colors, o)
    };

    let submit = button(
        Container::new(
            Text::new(submit_label(status))
                .size(typography::BODY)
                .font(Font {
                    weight: Weight::Semibold,
                    ..Font::DEFAULT
                }),
        )
        .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .padding([spacing::SM, spacing::LG])
    .on_press_maybe((!loading).then_some(Message::Submit))
    .style(styles::button::primary(
        colors,
        if loading { o * opacity::DISABLED } else { o },
    ));

    let mut fields = Column::new()
        .spacing(spacing::LG)
        .push(
            Row::new()
                .spacing(spacing::LG)
                .push(field_input(FormField::Name))
                .push(field_input(FormField::Email)),
        )
        .push(field_input(FormField::Subject))
        .push(message_editor);

    if let Some(banner) = status_banner(status, colors) {
        fields = fields.push(banner);
    }

    let card = Container::new(fields.push(submit))
        .width(Length::Fill)
        .max_width(sizing::FORM_MAX_WIDTH)
        .padding(spacing::XL)
        .style(styles::container::card(colors, o));

    Container::new(bounded(
        Column::new()
            .spacing(spacing::XXL)
            .push(heading)
            .push(
                Container::new(animated(card, frame, Preset::ScrollReveal))
                    .center_x(Length::Fill),
            ),
    ))
    .width(Length::Fill)
    .padding([spacing::SECTION, spacing::LG])
    .into()
}

fn single_line<'a>(
    form: &'a ContactForm,
    field: FormField,
    loading: bool,
    colors: &ColorScheme,
    opacity: f32,
) -> Element<'a, Message> {
    let input = text_input(field.placeholder(), form.fields().get(field))
        .padding(spacing::SM)
        .size(typography::BODY)
        .style(styles::input::text_field(colors));
    let input = if loading {
        input
    } else {
        input
            .on_input(move |value| Message::FieldChanged(field, value))
            .on_submit(Message::Submit)
    };
    labelled(field, input.into(), colors, opacity)
}

fn labelled<'a>(
    field: FormField,
    input: Element<'a, Message>,
    colors: &ColorScheme,
    opacity: f32,
) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .spacing(spacing::XS)
        .push(
            Text::new(field.label())
                .size(typography::BODY_SM)
                .font(Font {
                    weight: Weight::Semibold,
                    ..Font::DEFAULT
                })
                .color(faded(colors.text_secondary, opacity)),
        )
        .push(input)
        .into()
}

fn status_banner<'a>(status: &FormStatus, colors: &ColorScheme) -> Option<Element<'a, Message>> {
    let (background, text) = match status {
        FormStatus::Success(_) => (colors.success_soft, colors.on_success_soft),
        FormStatus::Error(_) => (colors.error_soft, colors.on_error_soft),
        FormStatus::Idle | FormStatus::Loading => return None,
    };
    let message = status.message()?.to_string();
    Some(
        Container::new(Text::new(message).size(typography::BODY_SM))
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::banner(background, text))
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::SimulatedSender;

    fn state() -> State {
        State::new(
            Arc::new(SimulatedSender::new(Duration::from_millis(1))),
            Duration::from_secs(5),
        )
    }

    fn fill(state: &mut State) {
        for (field, value) in [
            (FormField::Name, "Ada"),
            (FormField::Email, "ada@example.com"),
            (FormField::Subject, "Hello"),
        ] {
            state.handle_message(Message::FieldChanged(field, value.to_string()));
        }
        state.form.update_field(FormField::Message, "A message");
    }

    fn started_ticket(state: &State) -> Ticket {
        state.form().in_flight().expect("submission should be in flight")
    }

    #[test]
    fn empty_submit_is_rejected() {
        let mut state = state();
        let (event, _) = state.handle_message(Message::Submit);
        assert_eq!(
            event,
            Event::Rejected(ValidationError::MissingField(FormField::Name))
        );
        assert!(state.send_task.is_none());
    }

    #[test]
    fn valid_submit_starts_sending() {
        let mut state = state();
        fill(&mut state);
        let (event, _) = state.handle_message(Message::Submit);
        assert_eq!(event, Event::None);
        assert!(state.form().status().is_loading());
        assert!(state.send_task.is_some());
        assert_eq!(submit_label(state.form().status()), "Sending...");
    }

    #[test]
    fn edits_are_ignored_while_sending() {
        let mut state = state();
        fill(&mut state);
        state.handle_message(Message::Submit);
        state.handle_message(Message::FieldChanged(FormField::Name, "Eve".into()));
        assert_eq!(state.form().fields().name, "Ada");
    }

    #[test]
    fn success_clears_fields_and_arms_reset() {
        let mut state = state();
        fill(&mut state);
        state.handle_message(Message::Submit);
        let ticket = started_ticket(&state);

        let (event, _) = state.handle_message(Message::Sent(ticket, Ok(())));
        assert_eq!(event, Event::Sent);
        assert!(state.form().fields().is_empty());
        assert!(state.send_task.is_none());
        assert!(state.reset_task.is_some());

        let reset = state.form().pending_reset().expect("reset armed");
        state.handle_message(Message::ResetElapsed(reset));
        assert_eq!(state.form().status(), &FormStatus::Idle);
    }

    #[test]
    fn failure_keeps_fields_and_reports() {
        let mut state = state();
        fill(&mut state);
        state.handle_message(Message::Submit);
        let ticket = started_ticket(&state);

        let (event, _) =
            state.handle_message(Message::Sent(ticket, Err(SubmissionError::Timeout)));
        assert_eq!(event, Event::SendFailed(SubmissionError::Timeout));
        assert_eq!(state.form().fields().name, "Ada");
        assert!(matches!(state.form().status(), FormStatus::Error(_)));
        assert!(state.reset_task.is_none());
    }

    #[test]
    fn stale_result_is_ignored() {
        let mut state = state();
        fill(&mut state);
        state.handle_message(Message::Submit);
        let ticket = started_ticket(&state);
        state.teardown();

        let (event, _) = state.handle_message(Message::Sent(ticket, Ok(())));
        assert_eq!(event, Event::None);
        assert_eq!(state.form().status(), &FormStatus::Idle);
        assert_eq!(state.form().fields().name, "Ada");
    }

    #[test]
    fn teardown_aborts_reset_timer() {
        let mut state = state();
        fill(&mut state);
        state.handle_message(Message::Submit);
        let ticket = started_ticket(&state);
        state.handle_message(Message::Sent(ticket, Ok(())));
        let reset = state.form().pending_reset().expect("reset armed");
        assert!(state.reset_task.is_some());

        state.teardown();
        assert!(state.reset_task.is_none());
        assert!(state.send_task.is_none());
        assert_eq!(state.form().pending_reset(), None);

        state.handle_message(Message::ResetElapsed(reset));
        assert!(matches!(state.form().status(), FormStatus::Success(_)));
    }

    #[test]
    fn banner_only_for_final_states() {
        let colors = ColorScheme::light();
        assert!(status_banner(&FormStatus::Idle, &colors).is_none());
        assert!(status_banner(&FormStatus::Loading, &colors).is_none());
        assert!(status_banner(&FormStatus::Error("x".into()), &colors).is_some());
    }
}
