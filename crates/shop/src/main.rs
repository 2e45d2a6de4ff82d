use std::io::Write;

use anyhow::Context;

use charolis_events::LogNotifier;
use charolis_shop::config::ShopConfig;
use charolis_shop::presentation::Presenter;
use charolis_shop::scenario;

fn main() -> anyhow::Result<()> {
    let config = ShopConfig::from_env().context("invalid configuration")?;
    charolis_observability::init(config.log_format);

    tracing::debug!(?config, "configuration loaded");

    let presenter = Presenter::new(config.output, config.currency);
    let notifier = LogNotifier::new("email");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    scenario::run(&mut out, &presenter, &notifier)?;
    out.flush()?;

    Ok(())
}
