use anyhow::Context;
use klock_app::KlockAppBuilder;
use klock_clock::ClockApp;

const FONT_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../assets/fonts/DejaVuSansMono.ttf"
);

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("starting clock demo");

    let never = KlockAppBuilder::new()
        .title("Klock")
        .size(800, 600)
        .min_size(100, 100)
        .font_path(FONT_PATH)
        .run(ClockApp::new())
        .context("failed to start the clock demo")?;
    match never {}
}
