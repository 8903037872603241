use chrono::Utc;
use clap::Parser;
use clap::Subcommand;
use ragequit::config::AppConfig;
use ragequit::database::Database;
use ragequit::models::*;
use ragequit::Result;
use tracing::info;

#[derive(Parser)]
#[command(name = "ragequit")]
#[command(about = "RageQuit CLI: ingest game rage data, recompute scores, serve the API")]
#[command(version)]
struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides config)
        #[arg(long)]
        port: Option<u16>,
        /// Disable CORS regardless of config
        #[arg(long)]
        no_cors: bool,
    },
    /// Fetch reviews, achievements and Reddit posts for all tracked games
    Fetch,
    /// Recompute rage scores for all games from stored raw data
    Recompute,
    /// Run a full update: fetch then recompute
    Update,
    /// Seed a small deterministic dataset for local development
    Seed,
    /// List games with their current scores
    List {
        /// Maximum number of games to show
        #[arg(short, long, default_value = "50")]
        limit: i64,
    },
    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        ragequit::logging::init_logging_with_level("debug")?;
    } else {
        ragequit::logging::init_logging()?;
    }

    // Load configuration
    let config = AppConfig::load()?;
    info!("Configuration loaded successfully");

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_cors,
        } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let enable_cors = config.server.enable_cors && !no_cors;
            ragequit::api::serve_api(&config, host, port, enable_cors).await?;
        }
        Commands::Fetch => {
            let db = connect(&config).await?;
            ragequit::ingest::run_ingest(&db, &config).await?;
            println!("Fetched raw data for all tracked games.");
        }
        Commands::Recompute => {
            let db = connect(&config).await?;
            ragequit::recompute::compute_all_scores(&db).await?;
            println!("Computed rage scores for all games.");
        }
        Commands::Update => {
            let db = connect(&config).await?;
            ragequit::ingest::run_ingest(&db, &config).await?;
            ragequit::recompute::compute_all_scores(&db).await?;
            println!("Full update finished.");
        }
        Commands::Seed => {
            let db = connect(&config).await?;
            handle_seed_command(&db).await?;
        }
        Commands::List { limit } => {
            let db = connect(&config).await?;
            handle_list_command(&db, limit).await?;
        }
        Commands::Config => {
            handle_config_command(&config);
        }
    }

    Ok(())
}

async fn connect(config: &AppConfig) -> Result<Database> {
    let db = Database::from_config(config).await?;
    db.init_schema().await?;
    Ok(db)
}

async fn handle_list_command(db: &Database, limit: i64) -> Result<()> {
    let games = db.list_games_with_scores(limit, 0).await?;
    println!("Found {} scored games:", games.len());
    for game in games {
        println!(
            "  - {} ({}) | rage: {:.1}",
            game.name, game.slug, game.rage_score
        );
    }
    Ok(())
}

fn handle_config_command(config: &AppConfig) {
    println!("RageQuit Configuration:");
    println!();

    println!("Database:");
    println!("  URL: {}", config.database_url());
    println!("  Max connections: {}", config.max_connections());
    println!("  Connection timeout: {}s", config.connection_timeout());
    println!();

    println!("Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  Backtrace: {}", config.logging.backtrace);
    println!();

    println!("Server:");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!("  CORS: {}", config.server.enable_cors);
    println!();

    println!("Ingest:");
    println!("  Review pages: {}", config.ingest.review_pages);
    println!("  Reviews per page: {}", config.ingest.reviews_per_page);
    println!("  Reddit pages: {}", config.ingest.reddit_pages);
    println!("  Page pause: {}ms", config.ingest.page_pause_ms);
    println!("  Tracked games:");
    for game in config.tracked_games() {
        println!(
            "    - {} (app id {})",
            game.name, game.steam_app_id
        );
    }
}

/// Seed three games with hand-written reviews and achievement curves,
/// mirroring the shape of real ingested data.
async fn handle_seed_command(db: &Database) -> Result<()> {
    let now = Utc::now();

    let seeds: [(i64, &str, &str, bool, &[&str], &[(&str, &str, f64)]); 3] = [
        (
            1245620,
            "Elden Ring",
            "elden-ring",
            false,
            &[
                "This game is pure bullshit. Unfair bosses, impossible rng, I rage quit.",
                "Laggy mess on my PC, crashes at Malenia every time.",
                "Amazing but cheap boss design, controller through the wall levels of rage.",
                "Uninstalling after yet another crash during a boss fight.",
            ],
            &[
                ("start_game", "First Steps", 85.0),
                ("beat_margit", "Margit Felled", 60.0),
                ("beat_malenia", "Defeat Malenia", 18.0),
            ],
        ),
        (
            268910,
            "Cuphead",
            "cuphead",
            false,
            &[
                "Beautiful but unfair as hell. Bullshit boss patterns.",
                "Rage quit after 3 hours on one boss.",
                "Controls are fine but difficulty is insane.",
            ],
            &[
                ("tutorial", "Finish Tutorial", 90.0),
                ("first_island", "First Isle", 55.0),
                ("final_boss", "Final Boss", 10.0),
            ],
        ),
        (
            413150,
            "Stardew Valley",
            "stardew-valley",
            true,
            &[
                "Most relaxing game ever.",
                "Cozy farming, zero rage.",
                "Great chill game, no unfair stuff.",
            ],
            &[
                ("start_farm", "New Farmer", 80.0),
                ("first_year", "One Year In", 60.0),
                ("community_center", "Community Restored", 40.0),
            ],
        ),
    ];

    for (steam_app_id, name, slug, is_positive, reviews, achievements) in seeds {
        let game = db
            .upsert_game(&UpsertGameRequest {
                steam_app_id,
                name: name.to_string(),
                slug: slug.to_string(),
            })
            .await?;

        for (i, text) in reviews.iter().enumerate() {
            db.insert_review(&InsertReviewRequest {
                game_id: game.id,
                steam_review_id: format!("{}_{}", slug, i + 1),
                is_positive,
                language: Some("en".to_string()),
                review_text: Some((*text).to_string()),
                created_at_steam: Some(now),
            })
            .await?;
        }

        for &(api_name, display_name, percent) in achievements {
            db.upsert_achievement(&InsertAchievementRequest {
                game_id: game.id,
                api_name: api_name.to_string(),
                display_name: Some(display_name.to_string()),
                description: None,
                percent,
            })
            .await?;
        }

        println!("Seeded {} ({} reviews)", name, reviews.len());
    }

    println!("Seeded dummy data. Run `ragequit recompute` to score it.");
    Ok(())
}
