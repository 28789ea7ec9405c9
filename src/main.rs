use saavn_tui::{
    config::Settings,
    ui::app::App,
    util::{hook::set_panic_hook, log::initialize_logging},
};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> color_eyre::Result<()> {
    setup()?;

    let settings = Settings::load()?;
    settings
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("invalid configuration: {e}"))?;

    let mut app = App::new(settings)?;
    app.run().await
}

fn setup() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    set_panic_hook();
    initialize_logging()
}
