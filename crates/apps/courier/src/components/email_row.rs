//! Email row component - displays a single email in a mailbox list

use gpui::prelude::*;
use gpui::*;
use gpui_component::ActiveTheme;
use mail::MailboxRow;

/// One row of the mailbox list: sender, subject and timestamp
#[derive(IntoElement)]
pub struct EmailRow {
    row: MailboxRow,
}

impl EmailRow {
    pub fn new(row: MailboxRow) -> Self {
        Self { row }
    }
}

impl RenderOnce for EmailRow {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        // Read mail sits on the secondary background
        let (bg_color, weight) = if self.row.muted {
            (theme.secondary, FontWeight::NORMAL)
        } else {
            (theme.list, FontWeight::SEMIBOLD)
        };

        div()
            .w_full()
            .px_4()
            .py_3()
            .bg(bg_color)
            .border_b_1()
            .border_color(theme.border)
            .cursor_pointer()
            .hover(|style| style.bg(theme.list_hover))
            .flex()
            .items_center()
            .gap_4()
            .child(
                div()
                    .w(px(200.))
                    .flex_shrink_0()
                    .text_sm()
                    .font_weight(weight)
                    .text_color(theme.foreground)
                    .text_ellipsis()
                    .child(self.row.sender),
            )
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .text_sm()
                    .text_color(theme.foreground)
                    .text_ellipsis()
                    .child(self.row.subject),
            )
            .child(
                div()
                    .flex_shrink_0()
                    .text_xs()
                    .text_color(theme.muted_foreground)
                    .child(self.row.timestamp),
            )
    }
}
