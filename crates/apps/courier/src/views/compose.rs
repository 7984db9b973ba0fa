//! Compose view - the new email form

use gpui::prelude::*;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::{Input, InputState};
use gpui_component::{ActiveTheme, Sizable};
use mail::{ComposeDraft, ComposePanel};

use crate::app::CourierApp;

/// Compose form with recipients, subject and body inputs
///
/// The inputs own the text while the user types; the draft is read back
/// only when Send is clicked.
pub struct ComposeView {
    app: Entity<CourierApp>,
    recipients: Entity<InputState>,
    subject: Entity<InputState>,
    body: Entity<InputState>,
    error: Option<String>,
}

impl ComposeView {
    pub fn new(
        panel: &ComposePanel,
        app: Entity<CourierApp>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let recipients = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Recipients, separated by commas")
                .default_value(panel.recipients.clone())
        });
        let subject = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Subject")
                .default_value(panel.subject.clone())
        });
        let body = cx.new(|cx| {
            InputState::new(window, cx)
                .multi_line(true)
                .placeholder("Body")
                .default_value(panel.body.clone())
        });

        Self {
            app,
            recipients,
            subject,
            body,
            error: panel.error.clone(),
        }
    }

    /// Error banner from the last rejected send
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    fn draft(&self, cx: &App) -> ComposeDraft {
        ComposeDraft {
            recipients: self.recipients.read(cx).text().to_string(),
            subject: self.subject.read(cx).text().to_string(),
            body: self.body.read(cx).text().to_string(),
        }
    }

    fn send(&mut self, cx: &mut Context<Self>) {
        let draft = self.draft(cx);
        self.app.update(cx, |app, cx| app.submit(draft, cx));
    }
}

impl Render for ComposeView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        div()
            .flex()
            .flex_col()
            .size_full()
            .px_4()
            .pt_8()
            .pb_4()
            .gap_3()
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .child("New Email"),
            )
            .when_some(self.error.clone(), |el, error| {
                el.child(
                    div()
                        .px_3()
                        .py_2()
                        .rounded_md()
                        .bg(theme.danger)
                        .text_sm()
                        .text_color(theme.danger_foreground)
                        .child(error),
                )
            })
            .child(Input::new(&self.recipients))
            .child(Input::new(&self.subject))
            .child(div().flex_1().min_h(px(200.)).child(Input::new(&self.body).h_full()))
            .child(
                div().flex().justify_end().child(
                    Button::new("send-button")
                        .label("Send")
                        .small()
                        .primary()
                        .on_click(cx.listener(|view, _event, _window, cx| {
                            view.send(cx);
                        })),
                ),
            )
    }
}
