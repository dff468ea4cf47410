mod config;
mod routes;
mod services;
mod state;
mod supabase;

use std::sync::Arc;

use config::SiteConfig;
use state::AppState;
use supabase::gotrue::GoTrueClient;
use supabase::postgrest::PostgrestClient;
use supabase::{AuthProvider, RecordStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = SiteConfig::from_env()?;

    let (auth, records): (Option<Arc<dyn AuthProvider>>, Option<Arc<dyn RecordStore>>) = match &config.supabase {
        Some(supabase) => {
            let http = supabase::http_client(config.timeouts)?;
            tracing::info!(url = %supabase.url, table = %config.opt_in_table, "supabase backend configured");
            let auth: Arc<dyn AuthProvider> = Arc::new(GoTrueClient::new(http.clone(), supabase));
            let records: Arc<dyn RecordStore> = Arc::new(PostgrestClient::new(http, supabase));
            (Some(auth), Some(records))
        }
        None => {
            tracing::warn!("SUPABASE_URL not set; auth and opt-in endpoints disabled");
            (None, None)
        }
    };

    let port = config.port;
    let state = AppState::new(auth, records, config);
    let app = routes::app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "techfriends listening");
    axum::serve(listener, app).await?;
    Ok(())
}
