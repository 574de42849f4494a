// src/config.rs

use std::{env, net::SocketAddr, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::{FilialRepository, MagazinRepository, ProviderRepository, StaffRepository},
    services::{FilialService, MagazinService, ProviderService, StaffService},
};

// Configuração lida das variáveis de ambiente (.env em desenvolvimento)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .context("DB_MAX_CONNECTIONS inválido")?;

        let acquire_timeout_secs: u64 = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "3".to_string())
            .parse()
            .context("DB_ACQUIRE_TIMEOUT_SECS inválido")?;

        let bind_addr = env::var("HTTP_BIND")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .context("HTTP_BIND inválido")?;

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            bind_addr,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub filial_service: FilialService,
    pub magazin_service: MagazinService,
    pub provider_service: ProviderService,
    pub staff_service: StaffService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool))
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_pool(db_pool: PgPool) -> Self {
        Self {
            filial_service: FilialService::postgres(FilialRepository::new(db_pool.clone())),
            magazin_service: MagazinService::postgres(MagazinRepository::new(db_pool.clone())),
            provider_service: ProviderService::postgres(ProviderRepository::new(db_pool.clone())),
            staff_service: StaffService::postgres(StaffRepository::new(db_pool.clone())),
            db_pool,
        }
    }
}
