use crate::shared::api_utils::{get, post, put, ApiTransport};
use crate::shared::error::{ConsoleError, ConsoleResult};
use contracts::domain::a001_category::{Category, CategoryDto, CategoryId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::list::ListResponse;

/// Все категории; `only_active` добавляет `ativo=true`
pub async fn fetch_all<A>(api: &A, only_active: bool) -> ConsoleResult<Vec<Category>>
where
    A: ApiTransport + ?Sized,
{
    let query = if only_active { "ativo=true" } else { "" };
    let list: ListResponse<Category> = get(api, &Category::collection_path(), query).await?;
    Ok(list.items)
}

pub async fn fetch_by_id<A>(api: &A, id: CategoryId) -> ConsoleResult<Category>
where
    A: ApiTransport + ?Sized,
{
    get(api, &Category::element_path(id), "").await
}

pub async fn create<A>(api: &A, dto: &CategoryDto) -> ConsoleResult<Category>
where
    A: ApiTransport + ?Sized,
{
    dto.validate().map_err(ConsoleError::Validation)?;
    post(api, &Category::collection_path(), dto).await
}

pub async fn update<A>(api: &A, id: CategoryId, dto: &CategoryDto) -> ConsoleResult<Category>
where
    A: ApiTransport + ?Sized,
{
    dto.validate().map_err(ConsoleError::Validation)?;
    put(api, &Category::element_path(id), dto).await
}

pub async fn delete_by_id<A>(api: &A, id: CategoryId) -> ConsoleResult<()>
where
    A: ApiTransport + ?Sized,
{
    api.delete(&Category::element_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::FakeTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_active_categories() {
        let api = FakeTransport::new();
        api.reply(json!([
            {"id": 1, "nome": "Eletrônicos", "produtos_count": 4},
            {"id": 2, "nome": "Roupas", "produtos_count": 0}
        ]));

        let categories = fetch_all(&api, true).await.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].nome, "Eletrônicos");

        let call = &api.calls()[0];
        assert_eq!(call.path, "/categorias/");
        assert_eq!(call.query, "ativo=true");
    }

    #[tokio::test]
    async fn test_blank_name_is_not_sent() {
        let api = FakeTransport::new();
        let dto = CategoryDto {
            nome: "  ".into(),
            descricao: None,
            ativo: true,
        };
        assert!(matches!(
            create(&api, &dto).await.unwrap_err(),
            ConsoleError::Validation(_)
        ));
        assert!(api.calls().is_empty());
    }
}
