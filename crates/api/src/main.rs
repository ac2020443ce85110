use std::env;
use std::sync::Arc;

use petcare_auth::{StaticTokenVerifier, VerifiedProfile};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    petcare_observability::init();

    // The real identity provider plugs in here. For local development a
    // single token can be injected via PETCARE_DEV_TOKEN.
    let mut verifier = StaticTokenVerifier::new();
    if let Ok(token) = env::var("PETCARE_DEV_TOKEN") {
        verifier = verifier.with_token(
            token,
            VerifiedProfile {
                id: "dev-1".into(),
                email: "dev@example.com".into(),
                first_name: "Dev".into(),
                last_name: "User".into(),
                role: "PET_OWNER".into(),
                is_verified: true,
            },
        );
    }

    let app = petcare_api::build_app(Arc::new(verifier));

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8080);
    let address = format!("0.0.0.0:{port}");
    tracing::info!(%address, "starting petcare api");

    let listener = tokio::net::TcpListener::bind(&address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
