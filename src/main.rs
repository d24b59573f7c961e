//! Folio - static site generator for a single-page designer portfolio.

use anyhow::{Result, bail};
use clap::Parser;
use folio::{
    build::build_site,
    cli::{Cli, Commands},
    config::{SiteConfig, cfg, init_config},
    content, init, log,
    render::{self, RenderOptions},
    serve::serve_site,
    tenure,
};

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    init_config(load_config(cli)?);

    match &cli.command {
        Commands::Init { name } => init::new_site(&cfg(), name.is_some()),
        Commands::Build { .. } => build_site(&cfg()).map(|_| ()),
        Commands::Serve { .. } => {
            // A broken content file still serves the shell page and gets rebuilt on change
            if let Err(e) = build_site(&cfg()) {
                log!("error"; "{e:#}");
            }
            serve_site()
        }
        Commands::Check => check(&cfg()),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let config = SiteConfig::load(cli)?;

    let config_exists = config.config_path.exists();
    match (cli.is_init(), config_exists) {
        (true, true) => {
            bail!("Config file already exists. Remove it manually or init in a different path.")
        }
        (false, false) => bail!(
            "Config file not found: {}. Run `folio init` first.",
            config.config_path.display()
        ),
        _ => {}
    }

    if !cli.is_init() {
        config.validate()?;
    }

    Ok(config)
}

/// Load the content document and print what the build would produce.
fn check(config: &SiteConfig) -> Result<()> {
    let source = config.content_source();
    let content = content::load(&source)?;
    let options = RenderOptions::from_config(config);

    let featured = content.featured(config.site.featured_limit).count();
    let years = tenure::total_years(
        content.experience.iter().map(|e| e.period.as_str()),
        options.current_year,
    );
    let routes = render::routes(&content);

    log!("check"; "{}", source.describe());
    log!("check"; "{} ({})", content.site_info.name, content.site_info.role);
    log!("check"; "{} projects, {} featured", content.projects.len(), featured);
    log!("check"; "{} experience entries, {}+ years", content.experience.len(), years);
    log!("check"; "{} pages", routes.len());

    for route in &routes {
        if render::render_route(&content, &options, route).is_none() {
            bail!("route {} does not render", route.path());
        }
    }
    log!("check"; "ok");
    Ok(())
}
