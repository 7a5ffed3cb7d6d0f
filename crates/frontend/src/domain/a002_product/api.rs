use crate::shared::api_utils::{get, post, put, ApiTransport};
use crate::shared::error::{ConsoleError, ConsoleResult};
use contracts::domain::a002_product::{Product, ProductDto, ProductId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::list::ListResponse;

pub async fn fetch_by_id<A>(api: &A, id: ProductId) -> ConsoleResult<Product>
where
    A: ApiTransport + ?Sized,
{
    get(api, &Product::element_path(id), "").await
}

pub async fn create<A>(api: &A, dto: &ProductDto) -> ConsoleResult<Product>
where
    A: ApiTransport + ?Sized,
{
    dto.validate().map_err(ConsoleError::Validation)?;
    post(api, &Product::collection_path(), dto).await
}

pub async fn update<A>(api: &A, id: ProductId, dto: &ProductDto) -> ConsoleResult<Product>
where
    A: ApiTransport + ?Sized,
{
    dto.validate().map_err(ConsoleError::Validation)?;
    put(api, &Product::element_path(id), dto).await
}

pub async fn delete_by_id<A>(api: &A, id: ProductId) -> ConsoleResult<()>
where
    A: ApiTransport + ?Sized,
{
    api.delete(&Product::element_path(id)).await
}

/// Товары с остатком ниже порога (`/produtos/estoque_baixo/`)
pub async fn fetch_low_stock<A>(api: &A) -> ConsoleResult<Vec<Product>>
where
    A: ApiTransport + ?Sized,
{
    let path = format!("{}estoque_baixo/", Product::collection_path());
    let list: ListResponse<Product> = get(api, &path, "").await?;
    Ok(list.items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::FakeTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_low_stock_endpoint() {
        let api = FakeTransport::new();
        api.reply(json!([{"id": 9, "nome": "Cabo", "preco": 5, "estoque": 2}]));
        let products = fetch_low_stock(&api).await.unwrap();
        assert_eq!(products[0].estoque, 2);
        assert_eq!(api.calls()[0].path, "/produtos/estoque_baixo/");
    }

    #[tokio::test]
    async fn test_update_sends_dto_to_element_path() {
        let api = FakeTransport::new();
        api.reply(json!({"id": 3, "nome": "Mouse", "preco": "60.00", "estoque": 5, "categoria": 1}));
        let dto = ProductDto {
            nome: "Mouse".into(),
            preco: 60.0,
            estoque: 5,
            categoria: Some(1),
            ..Default::default()
        };
        let product = update(&api, 3, &dto).await.unwrap();
        assert_eq!(product.preco, 60.0);

        let call = &api.calls()[0];
        assert_eq!(call.method, "PUT");
        assert_eq!(call.path, "/produtos/3/");
        assert_eq!(call.body.as_ref().unwrap()["categoria"], 1);
    }
}
