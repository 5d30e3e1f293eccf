//! # Checkout Session
//!
//! Creates Stripe checkout sessions for the marketing site's pricing page.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export SITE_BASE_URL=https://contestra.com
//! export CORS_ALLOWED_ORIGINS=https://contestra.com,https://www.contestra.com
//!
//! # Run the server
//! checkout-session
//! ```

use checkout_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let checkout_path = state.config.checkout_path.clone();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.provider.provider_name());
    info!(
        "Allowed origins: {:?} (default {})",
        state.config.origins.allowed_origins(),
        state.config.origins.default_origin()
    );

    let app = routes::create_router(state);

    info!("Checkout session service starting on http://{}", addr);
    info!("Checkout: POST http://{}{}", addr, checkout_path);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  Checkout Session
  ━━━━━━━━━━━━━━━━
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
