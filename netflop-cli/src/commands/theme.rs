use anyhow::Context;
use netflop_config::Config;
use netflop_core::ThemeStore;
use netflop_model::Theme;
use tracing::warn;

pub fn run(config: &Config, value: Option<Theme>) -> anyhow::Result<()> {
    let store = ThemeStore::from_override(config.ui.theme_file.clone())
        .context("failed to locate the theme file")?;

    let theme = match value {
        Some(theme) => {
            if let Err(err) = store.save(theme) {
                warn!(path = %store.path().display(), error = %err, "theme not saved");
            }
            theme
        }
        None => store.load(),
    };
    println!("{theme}");
    Ok(())
}
