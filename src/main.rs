use actix_web::{web, App, HttpServer};
use anyhow::Context;
use clap::Parser;

mod api;
mod cli;
mod error;
mod metrics;
mod models;
mod registry;
mod state;

use cli::CommandArgs;
use models::{default_seed, Activity, SeedSet};
use state::new_state;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CommandArgs::parse();
    let bind_address = format!("{}:{}", args.address, args.port);

    let activities = load_activities(&args)?;
    log::info!("Loaded {} activities", activities.len());

    let state = new_state(activities, args.enforce_capacity);
    if args.enforce_capacity {
        log::info!("Capacity enforcement enabled");
    }

    let static_dir = args.static_dir.clone();
    if !static_dir.is_dir() {
        log::warn!(
            "Static directory {} not found, /static will not be served",
            static_dir.display()
        );
    }

    print_banner(&args);

    HttpServer::new(move || {
        let static_dir = static_dir.clone();
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(move |cfg| api::configure(cfg, &static_dir))
    })
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {}", bind_address))?
    .run()
    .await
    .context("server error")
}

fn load_activities(args: &CommandArgs) -> anyhow::Result<Vec<Activity>> {
    let seed = match &args.seed_file {
        Some(path) => {
            log::info!("Loading activities from {}", path.display());
            SeedSet::from_file(path)
                .with_context(|| format!("failed to load seed file {}", path.display()))?
        }
        None => default_seed(),
    };

    Ok(seed.into_activities().context("invalid activity seed")?)
}

fn print_banner(args: &CommandArgs) {
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║      Activity Signup v{:<36}║", env!("CARGO_PKG_VERSION"));
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();
    println!("🚀 Server starting on http://{}:{}", args.address, args.port);
    println!();
    println!("📋 Available endpoints:");
    println!("  GET    /                                  - Redirect to landing page");
    println!("  GET    /activities                        - List all activities");
    println!("  POST   /activities/{{name}}/signup?email=   - Sign up a student");
    println!("  DELETE /activities/{{name}}/signup?email=   - Unregister a student");
    println!("  GET    /metrics                           - Prometheus metrics");
    println!("  GET    /health                            - Health check");
    println!("═══════════════════════════════════════════════════════════");
}
