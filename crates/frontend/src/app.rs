//! Screen composition: one owned controller per screen, sharing a transport

use crate::dashboards::d400_store_stats::StatsLoader;
use crate::domain::a002_product::{self, ProductListController};
use crate::domain::a003_sale::{self, SaleListController};
use crate::shared::api_utils::{ApiTransport, HttpTransport};
use crate::shared::config::{Config, ListsConfig};
use crate::shared::error::{ConsoleError, ConsoleResult};
use contracts::domain::a003_sale::{Sale, SaleDto};

pub struct Console<T: ApiTransport + Clone> {
    transport: T,
    pub products: ProductListController<T>,
    pub sales: SaleListController<T>,
    pub dashboard: StatsLoader<T>,
}

impl Console<HttpTransport> {
    pub fn from_config(config: &Config) -> ConsoleResult<Self> {
        let transport = HttpTransport::new(&config.api.base_url, config.api.timeout())?;
        tracing::info!("store API at {}", transport.base_url());
        Ok(Self::new(transport, &config.lists))
    }
}

impl<T: ApiTransport + Clone> Console<T> {
    pub fn new(transport: T, lists: &ListsConfig) -> Self {
        Self {
            products: ProductListController::new(transport.clone(), lists.products_page_size),
            sales: SaleListController::new(transport.clone(), lists.sales_page_size),
            dashboard: StatsLoader::new(transport.clone()),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Зарегистрировать продажу.
    ///
    /// The product's current stock is checked before posting; the store checks
    /// again and may still answer with a conflict. After a successful post both
    /// lists are refreshed, since the sale changes the product's stock. A failed
    /// refresh is kept in that controller's error state and does not fail the sale.
    pub async fn record_sale(&self, dto: &SaleDto) -> ConsoleResult<Sale> {
        dto.validate().map_err(ConsoleError::Validation)?;

        let product = a002_product::api::fetch_by_id(&self.transport, dto.produto).await?;
        if !product.ativo {
            return Err(ConsoleError::Conflict(format!(
                "Produto '{}' está inativo",
                product.nome
            )));
        }
        dto.check_stock(product.estoque)
            .map_err(ConsoleError::Conflict)?;

        let sale = a003_sale::api::create(&self.transport, dto).await?;
        tracing::info!(
            "sale #{} recorded: {} x {}",
            sale.id,
            dto.quantidade,
            product.nome
        );

        let (sales, products) = tokio::join!(self.sales.refresh(), self.products.refresh());
        if let Err(e) = sales.and(products) {
            tracing::warn!("lists not refreshed after sale: {}", e);
        }
        Ok(sale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::FakeTransport;
    use serde_json::json;

    fn console(api: &FakeTransport) -> Console<FakeTransport> {
        Console::new(api.clone(), &ListsConfig::default())
    }

    fn sale(quantidade: u32) -> SaleDto {
        SaleDto {
            produto: 7,
            quantidade,
            preco_unitario: None,
            observacoes: None,
        }
    }

    #[tokio::test]
    async fn test_insufficient_stock_is_a_conflict() {
        let api = FakeTransport::new();
        let c = console(&api);
        api.reply(json!({"id": 7, "nome": "Teclado", "preco": 100, "estoque": 2}));

        let err = c.record_sale(&sale(5)).await.unwrap_err();
        assert_eq!(
            err,
            ConsoleError::Conflict("Estoque insuficiente. Disponível: 2 unidades.".into())
        );
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_sale_refreshes_both_lists() {
        let api = FakeTransport::new();
        let c = console(&api);
        api.reply(json!({"id": 7, "nome": "Teclado", "preco": 100, "estoque": 10}));
        api.reply(json!({"id": 99, "produto": 7, "quantidade": 3, "valor_total": "300.00"}));
        api.reply(json!({"count": 1, "results": [{"id": 99, "quantidade": 3, "valor_total": "300.00"}]}));
        api.reply(json!({"count": 1, "results": [{"id": 7, "nome": "Teclado", "preco": 100, "estoque": 7}]}));

        let recorded = c.record_sale(&sale(3)).await.unwrap();
        assert_eq!(recorded.id, 99);

        let paths: Vec<_> = api.calls().into_iter().map(|call| (call.method, call.path)).collect();
        assert_eq!(
            paths,
            vec![
                ("GET", "/produtos/7/".to_string()),
                ("POST", "/vendas/".to_string()),
                ("GET", "/vendas/".to_string()),
                ("GET", "/produtos/".to_string()),
            ]
        );
        assert_eq!(c.sales.current_aggregates().total_value, 300.0);
        assert_eq!(c.products.current_page().items[0].estoque, 7);
    }

    #[tokio::test]
    async fn test_inactive_product_cannot_be_sold() {
        let api = FakeTransport::new();
        let c = console(&api);
        api.reply(json!({"id": 7, "nome": "Teclado", "preco": 100, "estoque": 10, "ativo": false}));
        assert!(matches!(
            c.record_sale(&sale(1)).await.unwrap_err(),
            ConsoleError::Conflict(_)
        ));
    }
}
