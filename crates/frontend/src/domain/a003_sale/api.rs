use crate::shared::api_utils::{get, post, put, ApiTransport};
use crate::shared::error::{ConsoleError, ConsoleResult};
use contracts::domain::a003_sale::{Sale, SaleDto, SaleId};
use contracts::domain::common::AggregateRoot;

pub async fn fetch_by_id<A>(api: &A, id: SaleId) -> ConsoleResult<Sale>
where
    A: ApiTransport + ?Sized,
{
    get(api, &Sale::element_path(id), "").await
}

/// Создание продажи. Остаток проверяет вызывающий код (см. `Console::record_sale`),
/// сервер проверяет его ещё раз.
pub async fn create<A>(api: &A, dto: &SaleDto) -> ConsoleResult<Sale>
where
    A: ApiTransport + ?Sized,
{
    dto.validate().map_err(ConsoleError::Validation)?;
    post(api, &Sale::collection_path(), dto).await
}

pub async fn update<A>(api: &A, id: SaleId, dto: &SaleDto) -> ConsoleResult<Sale>
where
    A: ApiTransport + ?Sized,
{
    dto.validate().map_err(ConsoleError::Validation)?;
    put(api, &Sale::element_path(id), dto).await
}

pub async fn delete_by_id<A>(api: &A, id: SaleId) -> ConsoleResult<()>
where
    A: ApiTransport + ?Sized,
{
    api.delete(&Sale::element_path(id)).await
}
