use lumen::config::AppConfig;

#[cfg(not(target_arch = "wasm32"))]
fn init_runtime() {
    // A local .env (desktop dev) takes precedence over the bundled config
    dotenvy::dotenv().ok();

    let config = AppConfig::load_or_default();
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();
    tracing::debug!(?config, "configuration loaded");
}

#[cfg(target_arch = "wasm32")]
fn init_runtime() {}

fn main() {
    init_runtime();
    dioxus::launch(lumen::ui::App);
}
