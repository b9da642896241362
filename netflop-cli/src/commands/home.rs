use anyhow::Context;
use netflop_config::Config;
use netflop_core::home::load_home;
use netflop_core::render::render_home;

pub async fn run(config: &Config) -> anyhow::Result<()> {
    let catalog = super::catalog(config)?;
    let images = super::images(config);

    let home = load_home(catalog.as_ref(), &images)
        .await
        .context("failed to load the home page")?;
    println!("{}", render_home(&home));
    Ok(())
}
