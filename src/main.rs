//! Employee Manager GUI - desktop client for the Employee Management API
//!
//! Built with GPUI and Monokai Pro theme

mod app;
mod components;
mod handlers;
mod theme;

use gpui::{
    px, size, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app::App;
use employee_manager::config::ClientConfig;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        api_url = %config.api_url,
        token_file = %config.token_file.display(),
        start_route = %config.start_route,
        "starting employee manager"
    );

    Application::new().run(move |cx| {
        // Initialize gpui-component (required before using any component)
        gpui_component::init(cx);

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(1200.), px(800.)),
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Employee Manager")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let app_entity = cx.new(|cx| App::new(config, window, cx));

            // Resolve the start screen and begin watching the session store
            app_entity.update(cx, |app, cx| {
                app.initialize(cx);
                app.login_email.update(cx, |state, cx| {
                    state.focus(window, cx);
                });
            });

            // Wrap in Root for gpui-component theming support
            cx.new(|cx| Root::new(app_entity.clone(), window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "failed to open main window");
            cx.quit();
        }
    });

    Ok(())
}
