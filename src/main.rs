use marquee::ui;

fn main() {
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "marquee=info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    dioxus::LaunchBuilder::new()
        .with_cfg(ui::make_config())
        .launch(ui::App);
}
