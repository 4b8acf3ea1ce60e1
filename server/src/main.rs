use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::telemetry::init_tracing();

    let pool = db::establish_connection().await?;
    db::run_migrations(&pool).await?;

    let addr = "0.0.0.0:3000";
    let app = server::app(pool);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Serving on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
