#![warn(clippy::all, rust_2018_idioms)]

use vilij::{load_catalog, load_properties, Config, PropertyKey, PropertyText, VilijApp};

const WINDOW_WIDTH: f32 = 900.0;
const WINDOW_HEIGHT: f32 = 600.0;
const MIN_WINDOW_WIDTH: f32 = 600.0;
const MIN_WINDOW_HEIGHT: f32 = 400.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match Config::from_config_file() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("unable to load config file \".vilij\" from home directory: {err}");
            Config::default()
        }
    };
    let properties = load_properties(&config)?;
    let catalog = load_catalog(&config)?;
    log::debug!(
        "loaded {} properties and {} algorithm categories",
        properties.len(),
        catalog.num_categories()
    );

    let window_title = properties.text(PropertyKey::WindowTitle).to_owned();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };
    eframe::run_native(
        &window_title,
        native_options,
        Box::new(|cc| Ok(Box::new(VilijApp::new(cc, config, properties, catalog)))),
    )?;
    Ok(())
}
