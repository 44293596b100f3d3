use anyhow::Context;
use klock_app::KlockAppBuilder;
use klock_paint::PaintApp;

const FONT_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../assets/fonts/DejaVuSansMono.ttf"
);

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("starting paint demo, press Esc to quit");

    let never = KlockAppBuilder::new()
        .title("Klock Paint")
        .size(400, 400)
        .min_size(100, 100)
        .font_path(FONT_PATH)
        .run(PaintApp::new())
        .context("failed to start the paint demo")?;
    match never {}
}
