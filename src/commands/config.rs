use anyhow::Result;

use magicicada_notify::config::{self, Settings};

pub fn run(init: bool) -> Result<()> {
    let path = config::settings_path()?;

    let settings = if init {
        let settings = Settings::init(&path)?;
        println!("Created {:?}", path);
        settings
    } else {
        Settings::load_from(&path)?
    };

    println!("Settings file: {:?}", path);
    println!("Application name: {}", settings.application_name());
    Ok(())
}
