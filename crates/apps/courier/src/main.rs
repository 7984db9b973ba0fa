//! Courier - A desktop client for the Letterbox webmail backend
//!
//! This is the main entry point for the Courier mail application.

use gpui::prelude::*;
use gpui::{Application, WindowOptions, px, size};
use gpui_component::{Theme, ThemeMode, TitleBar};
use log::{error, info, warn};
use mail::{BackendConfig, Dispatcher, HttpMailClient};
use std::sync::Arc;

mod app;
mod components;
mod views;

use app::CourierApp;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // Bootstrap config directory
    if let Err(e) = config::init() {
        error!("Failed to initialize config directory: {}", e);
    }

    let backend = BackendConfig::load().unwrap_or_else(|e| {
        warn!("Invalid backend configuration: {:#}", e);
        if let Some(path) = BackendConfig::default_config_path() {
            warn!(
                "To point Courier at your server, either:\n\
                 1. Write {{\"base_url\": \"...\"}} to: {}\n\
                 2. Or set the LETTERBOX_BASE_URL environment variable",
                path.display()
            );
        }
        BackendConfig::default()
    });

    let client = match HttpMailClient::from_config(&backend) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create backend client: {:#}", e);
            return;
        }
    };
    info!("Using backend at {}", client.base_url());
    let dispatcher = Dispatcher::new(Arc::new(client));

    Application::new().run(move |cx| {
        // Initialize gpui-component and set dark mode
        gpui_component::init(cx);
        Theme::change(ThemeMode::Dark, None, cx);

        let window_options = WindowOptions {
            window_bounds: Some(gpui::WindowBounds::Windowed(gpui::Bounds {
                origin: gpui::Point::default(),
                size: size(px(1000.), px(720.)),
            })),
            titlebar: Some(TitleBar::title_bar_options()),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| {
                let mut app = CourierApp::new(dispatcher);
                app.start(cx);
                app
            })
        })
        .expect("Failed to open window");

        info!("Courier started successfully");
    });
}
