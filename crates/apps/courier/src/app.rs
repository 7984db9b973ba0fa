//! Root application component for Courier

use gpui::prelude::*;
use gpui::*;
use gpui_component::ActiveTheme;
use log::debug;
use mail::{
    Command, ComposeDraft, ComposePanel, Dispatcher, Mailbox, NavTarget, Screen, ViewController,
    ViewState, render,
};

use crate::components::NavItem;
use crate::views::{ComposeView, EmailView, MailboxView};

/// Navigation bar entries, top to bottom
const NAV_ITEMS: [(NavTarget, &str); 4] = [
    (NavTarget::Inbox, "Inbox"),
    (NavTarget::Sent, "Sent"),
    (NavTarget::Archived, "Archived"),
    (NavTarget::Compose, "Compose"),
];

/// Root application state
pub struct CourierApp {
    controller: ViewController,
    dispatcher: Dispatcher,
    /// Compose form for the current compose view, keyed by the controller
    /// generation it was built for
    compose_form: Option<(u64, Entity<ComposeView>)>,
}

impl CourierApp {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            controller: ViewController::new(),
            dispatcher,
            compose_form: None,
        }
    }

    /// Load the inbox
    pub fn start(&mut self, cx: &mut Context<Self>) {
        let commands = self.controller.start();
        self.dispatch(commands, cx);
    }

    pub fn navigate(&mut self, target: NavTarget, cx: &mut Context<Self>) {
        let commands = self.controller.navigate(target);
        self.dispatch(commands, cx);
        cx.notify();
    }

    pub fn open_email(&mut self, index: usize, cx: &mut Context<Self>) {
        let commands = self.controller.open_email(index);
        self.dispatch(commands, cx);
        cx.notify();
    }

    pub fn toggle_archive(&mut self, cx: &mut Context<Self>) {
        let commands = self.controller.toggle_archive();
        self.dispatch(commands, cx);
        cx.notify();
    }

    pub fn reply(&mut self, cx: &mut Context<Self>) {
        self.controller.reply();
        cx.notify();
    }

    pub fn submit(&mut self, draft: ComposeDraft, cx: &mut Context<Self>) {
        let commands = self.controller.submit_compose(draft);
        self.dispatch(commands, cx);
        cx.notify();
    }

    /// Run each command on the background executor and hand its result back
    /// to the controller on the main thread. Follow-up commands are
    /// dispatched the same way.
    fn dispatch(&mut self, commands: Vec<Command>, cx: &mut Context<Self>) {
        for command in commands {
            debug!("Dispatching {}", command.request());
            let dispatcher = self.dispatcher.clone();
            let background = cx.background_executor().clone();
            let job = command.clone();

            cx.spawn(async move |this, cx| {
                let result = background
                    .spawn(async move { dispatcher.execute(&job) })
                    .await;

                cx.update(|cx| {
                    this.update(cx, |app, cx| {
                        let follow_up = app.controller.complete(&command, result);
                        app.dispatch(follow_up, cx);
                        cx.notify();
                    })
                })
                .ok();
            })
            .detach();
        }
    }

    /// The nav entry highlighted for the current view
    fn active_nav(&self) -> Option<NavTarget> {
        match self.controller.state() {
            ViewState::List(view) => Some(match view.mailbox {
                Mailbox::Inbox => NavTarget::Inbox,
                Mailbox::Sent => NavTarget::Sent,
                Mailbox::Archive => NavTarget::Archived,
            }),
            ViewState::Compose(_) => Some(NavTarget::Compose),
            ViewState::Detail(_) => None,
        }
    }

    /// Get or create the form for the current compose view
    ///
    /// A new form is built whenever the controller enters a new compose
    /// view, so the inputs start from the controller's draft. Within one
    /// view only the error banner is refreshed, leaving typed text alone.
    fn compose_form(
        &mut self,
        panel: ComposePanel,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Entity<ComposeView> {
        let generation = self.controller.generation();
        let form = match &self.compose_form {
            Some((built_for, form)) if *built_for == generation => form.clone(),
            _ => {
                let app = cx.entity();
                let form = cx.new(|cx| ComposeView::new(&panel, app, window, cx));
                self.compose_form = Some((generation, form.clone()));
                form
            }
        };

        form.update(cx, |form, _| form.set_error(panel.error));
        form
    }

    fn render_nav(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let theme = cx.theme();
        let active = self.active_nav();

        div()
            .flex()
            .flex_col()
            .h_full()
            // App branding
            .child(
                div()
                    .pt_8() // Extra top padding for window controls
                    .pb_4()
                    .px_3()
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.foreground)
                            .child("Courier"),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .px_2()
                    .children(NAV_ITEMS.into_iter().map(|(target, label)| {
                        div()
                            .id(ElementId::Name(format!("nav-{}", label).into()))
                            .on_click(cx.listener(move |app, _event, _window, cx| {
                                app.navigate(target, cx);
                            }))
                            .child(NavItem::new(label, active == Some(target)))
                    })),
            )
    }
}

impl Render for CourierApp {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        // Clone theme colors upfront to avoid borrow conflicts
        let bg = theme.background;
        let fg = theme.foreground;
        let secondary_bg = theme.secondary;
        let border = theme.border;

        let nav = self.render_nav(cx);
        let app = cx.entity();
        let content = match render(self.controller.state()) {
            Screen::Mailbox(panel) => MailboxView::new(panel, app).into_any_element(),
            Screen::Detail(panel) => EmailView::new(panel, app).into_any_element(),
            Screen::Compose(panel) => self.compose_form(panel, window, cx).into_any_element(),
        };

        div()
            .flex()
            .flex_row()
            .size_full()
            .bg(bg)
            .text_color(fg)
            // Navigation bar
            .child(
                div()
                    .w(px(200.))
                    .h_full()
                    .bg(secondary_bg)
                    .border_r_1()
                    .border_color(border)
                    .child(nav),
            )
            // Active view
            .child(div().flex().flex_1().overflow_hidden().child(content))
    }
}
