use crate::shared::api_utils::{get, put, ApiTransport};
use crate::shared::error::{ConsoleError, ConsoleResult};
use contracts::domain::a004_store_config::StoreConfig;

const PATH: &str = "/configuracoes/";

pub async fn fetch<A>(api: &A) -> ConsoleResult<StoreConfig>
where
    A: ApiTransport + ?Sized,
{
    get(api, PATH, "").await
}

/// Проверить, привести маски и сохранить настройки магазина
pub async fn save<A>(api: &A, config: &StoreConfig) -> ConsoleResult<StoreConfig>
where
    A: ApiTransport + ?Sized,
{
    if let Err(errors) = config.validate() {
        let message = errors
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ConsoleError::Validation(message));
    }
    let normalized = config.normalized();
    tracing::info!("saving store configuration for '{}'", normalized.nome_empresa);
    put(api, PATH, &normalized).await
}
