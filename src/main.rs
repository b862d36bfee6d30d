#[cfg(target_arch = "wasm32")]
fn main() {
    use presensi_frontend::config;
    use wasm_bindgen_futures::spawn_local;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting Presensi frontend: initializing runtime config");

    // Resolve ./config.json (or the window globals) before mounting so the
    // first API call already sees the configured base URL.
    spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        presensi_frontend::mount();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("presensi-frontend is a wasm application; build it with trunk");
}
