// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Vitrine server binary.

use std::path::PathBuf;

use axum::http::HeaderValue;
use clap::{Parser, Subcommand};
use tower_http::{
	cors::{AllowOrigin, Any, CorsLayer},
	trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vitrine_server::{create_app_state, create_router};
use vitrine_server_config::ServerConfig;
use vitrine_server_db::{create_pool, run_migrations, seed_demo_content, seed_settings};

/// Vitrine server - site content and CMS admin API.
#[derive(Parser, Debug)]
#[command(name = "vitrine-server", about = "Vitrine site and CMS server", version)]
struct Args {
	/// Config file to load instead of /etc/vitrine/server.toml
	#[arg(long, global = true, env = "VITRINE_SERVER_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Run the HTTP server (default)
	Serve,
	/// Create or refresh the fixed site settings
	Seed {
		/// Also insert sample pages, services, testimonials and questions
		#[arg(long)]
		demo: bool,
	},
	/// Show version information
	Version,
}

fn init_tracing(config: &ServerConfig) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| config.logging.level.clone().into());
	let registry = tracing_subscriber::registry().with(filter);
	if config.logging.json {
		registry
			.with(tracing_subscriber::fmt::layer().json())
			.init();
	} else {
		registry.with(tracing_subscriber::fmt::layer()).init();
	}
}

fn cors_layer(origins: &[String]) -> CorsLayer {
	let allow_origin = if origins.is_empty() {
		AllowOrigin::from(Any)
	} else {
		let parsed: Vec<HeaderValue> = origins
			.iter()
			.filter_map(|origin| match HeaderValue::from_str(origin) {
				Ok(value) => Some(value),
				Err(_) => {
					tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
					None
				}
			})
			.collect();
		AllowOrigin::list(parsed)
	};
	CorsLayer::new()
		.allow_origin(allow_origin)
		.allow_methods(Any)
		.allow_headers(Any)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	let command = args.command.unwrap_or(Command::Serve);
	if let Command::Version = command {
		println!("vitrine-server {}", env!("CARGO_PKG_VERSION"));
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => vitrine_server_config::load_config_with_file(path)?,
		None => vitrine_server_config::load_config()?,
	};

	init_tracing(&config);

	let pool = create_pool(&config.database.url).await?;
	run_migrations(&pool).await?;

	match command {
		Command::Seed { demo } => {
			let settings = seed_settings(&pool).await?;
			tracing::info!(settings, "site settings seeded");
			if demo {
				let summary = seed_demo_content(&pool).await?;
				tracing::info!(?summary, "demo content seeded");
			}
			return Ok(());
		}
		Command::Serve | Command::Version => {}
	}

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		database = %config.database.url,
		uploads = %config.uploads.dir.display(),
		"starting vitrine-server"
	);

	// Missing keys are added on every start; stored values are kept.
	seed_settings(&pool).await?;

	let state = create_app_state(pool, &config).await;
	let app = create_router(state)
		.layer(TraceLayer::new_for_http())
		.layer(cors_layer(&config.http.cors_origins));

	let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
	tracing::info!(addr = %config.socket_addr(), base_url = %config.http.base_url, "listening");

	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	Ok(())
}
