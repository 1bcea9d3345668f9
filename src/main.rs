use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, Subcommand};
use rpgshelf::catalog::AnySource;
use rpgshelf::config::{CatalogLocation, DEFAULT_CATALOG, DEFAULT_IMAGE_DIR, SiteConfig};
use rpgshelf::logging::{LogConfig, init_logging};
use rpgshelf::view::View;
use rpgshelf::Session;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Browse a catalog of tabletop RPG systems and supplements",
    long_about = None
)]
struct Cli {
    /// Catalog document: a file path or an http(s) URL
    #[arg(long, global = true, value_name = "PATH_OR_URL", default_value = DEFAULT_CATALOG)]
    source: String,

    /// Directory prefix for family cover images
    #[arg(long, global = true, value_name = "DIR", default_value = DEFAULT_IMAGE_DIR)]
    image_dir: Utf8PathBuf,

    /// More log output (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Less log output (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the catalog grouped by system family as JSON
    Families,
    /// Print the markup of a view, drilling down from the home screen
    Render {
        /// System family to open
        #[arg(short = 's', long = "system")]
        system: Option<String>,
        /// Release of that family to open (requires --system)
        #[arg(short = 'r', long = "release", requires = "system")]
        release: Option<String>,
        /// Go back this many entries after drilling down
        #[arg(short = 'b', long = "back", default_value_t = 0)]
        back: usize,
        /// Print the resolved page as JSON instead of markup
        #[arg(long)]
        json: bool,
    },
    /// Open the interactive desktop viewer
    #[cfg(feature = "egui")]
    View,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose, cli.quiet));

    let config = SiteConfig::default()
        .with_catalog(CatalogLocation::parse(&cli.source))
        .with_image_dir(cli.image_dir);
    let source = AnySource::from_location(&config.catalog)
        .with_context(|| format!("Open catalog source {}", config.catalog))?;
    let mut session = Session::new(source, config);
    session.start()?;

    match cli.command {
        Command::Families => {
            if let Some(err) = session.failure() {
                bail!("{err}");
            }
            let json = serde_json::to_string_pretty(&session.families())?;
            println!("{}", json);
        }
        Command::Render {
            system,
            release,
            back,
            json,
        } => {
            if session.failure().is_none() {
                if let Some(family) = system {
                    session.navigate(View::family(&family))?;
                    if let Some(release) = release {
                        session.navigate(View::version(family, release))?;
                    }
                }
                if back > 0 {
                    session.back(back)?;
                }
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&session.page())?);
            } else {
                print!("{}", session.html());
            }
        }
        #[cfg(feature = "egui")]
        Command::View => rpgshelf::egui_app::run(session)?,
    }
    Ok(())
}
