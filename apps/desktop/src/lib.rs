use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use enlist_domain::config::WindowConfig;
use enlist_registration::{RegisterForm, Registration};

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl DesktopApp {
    /// Takes title and size from the `[window]` config section.
    #[must_use]
    pub fn from_config(config: &WindowConfig) -> Self {
        Self { title: config.title.clone(), width: config.width, height: config.height }
    }

    /// Opens the window and blocks until it is closed.
    pub fn launch(self, registration: Registration) {
        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        tracing::info!(title = %self.title, "Launching desktop window");

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(registration.clone()))
            .launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        main {
            h1 { "Create an account" }
            RegisterForm {}
        }
    }
}
