use clap::{Parser, Subcommand};
use starboard::gallery::Gallery;
use starboard::{config, output, web};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

fn version_string() -> &'static str {
    let hash = env!("STARBOARD_GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup, called exactly once
        Box::leak(format!("{}@{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "starboard")]
#[command(about = "Image gallery with cached thumbnails and per-visitor stars")]
#[command(long_about = "\
Image gallery with cached thumbnails and per-visitor stars

A directory of images becomes a gallery. Thumbnails are cropped to fill a
fixed box and cached on first use; visitors star images, and stars are kept
in a JSON file next to the images.

Data layout:

  photos/                  # data_dir
  ├── starboard.toml       # Config (optional)
  ├── stars.json           # Star store: image -> visitor ids
  ├── dawn.jpg             # Images: jpg, jpeg, png, gif (top level only)
  ├── dusk.png
  └── thumbs/              # Thumbnail cache, one file per image
      ├── dawn.jpg
      └── dusk.png

Run 'starboard gen-config' to generate a documented starboard.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file (missing = defaults)
    #[arg(long, default_value = "starboard.toml", global = true)]
    config: PathBuf,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the images in the data directory
    Scan,
    /// Generate every missing thumbnail
    Thumbs,
    /// Toggle a visitor's star on an image
    Star {
        image: String,
        #[arg(long)]
        visitor: String,
    },
    /// Show all stars
    Stars,
    /// Delete an image's cached thumbnail
    Invalidate { image: String },
    /// Serve the JSON API
    Serve {
        /// Listen address (overrides server.host)
        #[arg(long)]
        host: Option<IpAddr>,
        /// Listen port (overrides server.port)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print a stock starboard.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let load = || -> Result<config::GalleryConfig, config::ConfigError> {
        let config = config::load_config(&cli.config)?;
        tracing::debug!(
            path = %cli.config.display(),
            data_dir = %config.data_dir.display(),
            "config loaded"
        );
        Ok(config)
    };

    match cli.command {
        Command::Scan => {
            let config = load()?;
            let gallery = Gallery::open(&config);
            let images = gallery.images()?;
            output::print_scan_output(
                &images,
                &config.data_dir,
                &config.thumbs_path(),
                &config.store_path(),
            );
        }
        Command::Thumbs => {
            let config = load()?;
            init_thread_pool(&config.processing);
            let gallery = Gallery::open(&config);
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_warm_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            let stats = gallery.warm_thumbnails(Some(tx));
            printer.join().ok();
            println!("Cache: {}", stats?);
        }
        Command::Star { image, visitor } => {
            let config = load()?;
            let gallery = Gallery::open(&config);
            let starred = gallery.toggle_star(&image, &visitor)?;
            println!("{}", output::format_toggle(&image, &visitor, starred));
        }
        Command::Stars => {
            let config = load()?;
            let gallery = Gallery::open(&config);
            output::print_stars(&gallery.stars()?);
        }
        Command::Invalidate { image } => {
            let config = load()?;
            let gallery = Gallery::open(&config);
            let removed = gallery.invalidate(&image)?;
            println!("{}", output::format_invalidate(&image, removed));
        }
        Command::Serve { host, port } => {
            let config = load()?;
            let host = match host {
                Some(h) => h,
                None => config.server.host.parse()?,
            };
            let addr = SocketAddr::new(host, port.unwrap_or(config.server.port));
            let gallery = Gallery::open(&config);
            println!("Serving {} on http://{addr}", config.data_dir.display());
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(web::serve(gallery, addr))?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr; stdout is reserved for command output.
fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("starboard={level},tower_http={level}").into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores: user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
