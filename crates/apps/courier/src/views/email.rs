//! Email view - a single email with Reply and Archive actions

use gpui::prelude::*;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{ActiveTheme, Sizable};
use mail::DetailPanel;

use crate::app::CourierApp;

#[derive(IntoElement)]
pub struct EmailView {
    panel: DetailPanel,
    app: Entity<CourierApp>,
}

impl EmailView {
    pub fn new(panel: DetailPanel, app: Entity<CourierApp>) -> Self {
        Self { panel, app }
    }
}

impl RenderOnce for EmailView {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let DetailPanel {
            headers,
            body,
            archive_button,
            loading,
        } = self.panel;

        let reply_app = self.app.clone();
        let archive_app = self.app;

        div()
            .flex()
            .flex_col()
            .size_full()
            // Header lines and actions
            .child(
                div()
                    .px_4()
                    .pt_8()
                    .pb_3()
                    .border_b_1()
                    .border_color(theme.border)
                    .flex()
                    .justify_between()
                    .items_start()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .text_sm()
                            .when(loading, |el| {
                                el.child(
                                    div().text_color(theme.muted_foreground).child("Loading..."),
                                )
                            })
                            .children(headers.into_iter().map(|line| {
                                div()
                                    .flex()
                                    .gap_1()
                                    .child(
                                        div()
                                            .font_weight(FontWeight::BOLD)
                                            .child(format!("{}:", line.label)),
                                    )
                                    .child(div().text_color(theme.foreground).child(line.value))
                            })),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_1()
                            .child(
                                Button::new("reply-button")
                                    .label("Reply")
                                    .small()
                                    .ghost()
                                    .on_click(move |_event, _window, cx| {
                                        reply_app.update(cx, |app, cx| app.reply(cx));
                                    }),
                            )
                            .when_some(archive_button, |el, label| {
                                el.child(
                                    Button::new("archive-button")
                                        .label(label)
                                        .small()
                                        .ghost()
                                        .on_click(move |_event, _window, cx| {
                                            archive_app.update(cx, |app, cx| app.toggle_archive(cx));
                                        }),
                                )
                            }),
                    ),
            )
            // Body, shown as plain text
            .child(
                div()
                    .id("email-body")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_4()
                    .text_sm()
                    .child(body),
            )
    }
}
