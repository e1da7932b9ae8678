use crate::ServerConfig;
use std::sync::Arc;
use wallet_owner_store::{WalletOwnerStorage, WalletOwnerStore};

/// Spawn the wallet owners HTTP server using the given ServerConfig.  The returned JoinHandle can be
/// awaited to run the server, or aborted to shut it down.
pub async fn spawn_server(
    server_config: ServerConfig,
) -> anyhow::Result<tokio::task::JoinHandle<()>> {
    tracing::debug!("{:?}", server_config);

    let wallet_owner_store = WalletOwnerStore::new(open_wallet_owner_storage(&server_config).await?);

    let middleware_stack = tower::ServiceBuilder::new()
        .layer(tower_http::compression::CompressionLayer::new())
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(
                    tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO),
                )
                .on_response(tower_http::trace::DefaultOnResponse::new().level(tracing::Level::INFO)),
        )
        .layer(tower_http::cors::CorsLayer::permissive())
        .into_inner();

    let app = axum::Router::new()
        .merge(crate::services::wallet_owners::get_routes(wallet_owner_store))
        .layer(middleware_stack)
        .route("/health", axum::routing::get(|| async { "OK" }));

    // This has to be 0.0.0.0 otherwise it won't work in a docker container.
    // 127.0.0.1 is only the loopback device, and isn't available outside the host.
    let listener =
        tokio::net::TcpListener::bind(format!("0.0.0.0:{}", server_config.listen_port)).await?;
    tracing::info!(
        "wallet owners server listening on port {}",
        server_config.listen_port
    );

    Ok(tokio::task::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            tracing::error!("wallet owners server stopped with error: {}", err);
        }
    }))
}

async fn open_wallet_owner_storage(
    server_config: &ServerConfig,
) -> anyhow::Result<Arc<dyn WalletOwnerStorage>> {
    let database_url = server_config.database_url.as_str();
    if database_url.starts_with("memory://") {
        tracing::info!("storing wallet owners in memory; they will be lost on exit");
        Ok(Arc::new(
            wallet_owner_storage_mock::WalletOwnerStorageMock::new(),
        ))
    } else if database_url.starts_with("sqlite:") {
        #[cfg(feature = "sqlite")]
        {
            use anyhow::Context;

            let max_connections =
                if database_url.contains(":memory:") || database_url.contains("mode=memory") {
                    1
                } else {
                    server_config.database_max_connections
                };
            let sqlite_pool = sqlx::sqlite::SqlitePoolOptions::new()
                .max_connections(max_connections)
                .acquire_timeout(std::time::Duration::from_secs(3))
                .connect(database_url)
                .await
                .context("can't connect to database")?;
            Ok(Arc::new(
                wallet_owner_storage_sqlite::WalletOwnerStorageSQLite::open_and_run_migrations(
                    sqlite_pool,
                )
                .await?,
            ))
        }

        #[cfg(not(feature = "sqlite"))]
        {
            anyhow::bail!("sqlite database is only supported if the `sqlite` feature was enabled when building");
        }
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://")
    {
        #[cfg(feature = "postgres")]
        {
            use anyhow::Context;

            let pg_pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(server_config.database_max_connections)
                .acquire_timeout(std::time::Duration::from_secs(3))
                .connect(database_url)
                .await
                .context("can't connect to database")?;
            Ok(Arc::new(
                wallet_owner_storage_postgres::WalletOwnerStoragePostgres::open_and_run_migrations(
                    pg_pool,
                )
                .await?,
            ))
        }

        #[cfg(not(feature = "postgres"))]
        {
            anyhow::bail!("postgres database is only supported if the `postgres` feature was enabled when building");
        }
    } else {
        anyhow::bail!(
            "unsupported database scheme; database URL was: {:?}",
            database_url
        );
    }
}
