use anyhow::Result;
use camera_dashboard::{console, Config};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "camera-dashboard")]
#[command(about = "Drive the camera dashboard pages from the terminal")]
struct Cli {
    /// Configuration file (extension optional)
    #[arg(short, long, default_value = "config/camera-dashboard")]
    config: String,

    /// Start with the sidebar collapsed
    #[arg(long)]
    sidebar_hidden: bool,

    #[command(subcommand)]
    page: Page,
}

#[derive(Subcommand, Debug)]
enum Page {
    /// Landing page (sidebar only)
    Dashboard,
    /// Live camera with recording controls
    LiveCam,
    /// Recorded room video player
    RoomVideo,
    /// Review a captured image
    Validation {
        /// Page location, including the `id` and `title` query
        #[arg(long, default_value = console::DEFAULT_PAGE_URL)]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("Camera dashboard v{}", env!("CARGO_PKG_VERSION"));
    info!("Opening {:?}", cli.page);

    match cli.page {
        Page::Dashboard => console::run_dashboard(cli.sidebar_hidden).await,
        Page::LiveCam => console::run_live_cam(&cfg, cli.sidebar_hidden).await,
        Page::RoomVideo => console::run_room_video(&cfg, cli.sidebar_hidden).await,
        Page::Validation { url } => console::run_validation(&cfg, &url).await,
    }
}
