//! Main application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting EnvPad");

    envpad_app::App::run();
}
