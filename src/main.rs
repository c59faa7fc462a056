use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use dotenvy::dotenv;

use tarjetas_api::config::{DatabaseConfig, EnvironmentConfig};
use tarjetas_api::database;
use tarjetas_api::routes::create_router;
use tarjetas_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    info!("🃏 Tarjetas API");
    info!("==============");

    let config = EnvironmentConfig::from_env().context("configuración del servidor inválida")?;
    let db_config = DatabaseConfig::from_env().context("configuración de base de datos inválida")?;

    // Inicializar base de datos
    let pool = match database::connect(&db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if config.init_schema {
        database::ensure_schema(&pool)
            .await
            .context("no se pudo crear el esquema")?;
        info!("🧱 Esquema verificado (tarjeta, categoria)");
    }

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("dirección de escucha inválida: {}", config.server_url()))?;

    if config.is_development() {
        info!("🔓 Modo desarrollo");
    }

    let app = create_router(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    / - Liveness");
    info!("   GET    /tarjeta - Listar tarjetas");
    info!("   POST   /tarjeta - Crear tarjeta");
    info!("   PUT    /tarjeta/:tarj_id - Actualizar tarjeta");
    info!("   DELETE /tarjeta/:tarj_id - Eliminar tarjeta");
    info!("   GET    /categoria - Listar categorias");
    info!("   POST   /categoria - Crear categoria");
    info!("   PUT    /categoria/:id - Actualizar categoria");
    info!("   DELETE /categoria/:id - Eliminar categoria");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
