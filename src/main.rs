#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use portfolio_page::{config::PageConfig, frontend, logging};

    let config = PageConfig::from_browser();
    if let Err(error) = frontend::run(config) {
        logging::log_event(
            config.log_level,
            logging::LogLevel::Error,
            "mount_failed",
            serde_json::json!({ "reason": error.to_string() }),
        );
    }
}
