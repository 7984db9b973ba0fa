//! Mailbox view - the list of emails in one mailbox

use gpui::prelude::*;
use gpui::*;
use gpui_component::ActiveTheme;
use mail::MailboxPanel;

use crate::app::CourierApp;
use crate::components::EmailRow;

/// Heading plus one clickable row per email
#[derive(IntoElement)]
pub struct MailboxView {
    panel: MailboxPanel,
    app: Entity<CourierApp>,
}

impl MailboxView {
    pub fn new(panel: MailboxPanel, app: Entity<CourierApp>) -> Self {
        Self { panel, app }
    }
}

impl RenderOnce for MailboxView {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let MailboxPanel {
            title,
            rows,
            loading,
            ..
        } = self.panel;
        let is_empty = !loading && rows.is_empty();
        let app = self.app;

        div()
            .flex()
            .flex_col()
            .size_full()
            .child(
                div()
                    .px_4()
                    .pt_8()
                    .pb_3()
                    .border_b_1()
                    .border_color(theme.border)
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .child(title),
            )
            .when(loading, |el| {
                el.child(
                    div()
                        .p_4()
                        .text_sm()
                        .text_color(theme.muted_foreground)
                        .child("Loading..."),
                )
            })
            .when(is_empty, |el| {
                el.child(
                    div()
                        .p_4()
                        .text_sm()
                        .text_color(theme.muted_foreground)
                        .child("No emails"),
                )
            })
            .child(
                div()
                    .id("mailbox-rows")
                    .flex()
                    .flex_col()
                    .flex_1()
                    .overflow_y_scroll()
                    .children(rows.into_iter().map(|row| {
                        let index = row.index;
                        let app = app.clone();

                        div()
                            .id(ElementId::Name(format!("email-{}", index).into()))
                            .on_click(move |_event, _window, cx| {
                                app.update(cx, |app, cx| app.open_email(index, cx));
                            })
                            .child(EmailRow::new(row))
                    })),
            )
    }
}
