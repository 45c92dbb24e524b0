fn main() {
    env_logger::init();
    log::info!("rockfield starting up");

    if let Err(e) = rockfield::app::run() {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}
