//! Navigation bar entry

use gpui::prelude::*;
use gpui::*;
use gpui_component::ActiveTheme;

/// A single entry in the navigation bar
#[derive(IntoElement)]
pub struct NavItem {
    label: &'static str,
    is_selected: bool,
}

impl NavItem {
    pub fn new(label: &'static str, is_selected: bool) -> Self {
        Self { label, is_selected }
    }
}

impl RenderOnce for NavItem {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        let (bg_color, text_color, border_color) = if self.is_selected {
            (theme.list_active, theme.foreground, theme.list_active_border)
        } else {
            (theme.transparent, theme.muted_foreground, theme.transparent)
        };

        div()
            .w_full()
            .px_3()
            .py_2()
            .rounded_md()
            .bg(bg_color)
            .border_l_2()
            .border_color(border_color)
            .cursor_pointer()
            .hover(|style| style.bg(theme.list_hover))
            .text_sm()
            .text_color(text_color)
            .font_weight(if self.is_selected {
                FontWeight::MEDIUM
            } else {
                FontWeight::NORMAL
            })
            .child(self.label)
    }
}
