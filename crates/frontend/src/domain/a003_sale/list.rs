use crate::shared::list::{FieldKind, FilterField, ListController, ListScreen};
use contracts::domain::a003_sale::Sale;

pub const PRODUCT: &str = "product";
pub const CATEGORY: &str = "category";
pub const DATE_FROM: &str = "date_from";
pub const DATE_TO: &str = "date_to";

/// Журнал продаж
pub struct SalesScreen;

impl ListScreen for SalesScreen {
    type Item = Sale;

    const NAME: &'static str = "sales";
    const PATH: &'static str = "/vendas/";
    const FIELDS: &'static [FilterField] = &[
        FilterField::new(PRODUCT, "produto", FieldKind::Reference),
        FilterField::new(CATEGORY, "categoria", FieldKind::Reference),
        FilterField::new(DATE_FROM, "data_inicio", FieldKind::Date),
        FilterField::new(DATE_TO, "data_fim", FieldKind::Date),
    ];

    fn amount(item: &Sale) -> f64 {
        item.valor_total
    }

    fn units(item: &Sale) -> f64 {
        item.quantidade as f64
    }
}

pub type SaleListController<T> = ListController<SalesScreen, T>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::FilterValue;
    use crate::shared::testing::FakeTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_sales_totals_and_ticket() {
        let api = FakeTransport::new();
        let sales = SaleListController::new(api.clone(), 15);
        api.reply(json!({"count": 2, "results": [
            {"id": 1, "produto_nome": "A", "quantidade": 2, "valor_total": "100.00"},
            {"id": 2, "produto_nome": "B", "quantidade": 1, "valor_total": "50.00"}
        ]}));
        sales.refresh().await.unwrap();

        let totals = sales.current_aggregates();
        assert_eq!(totals.total_value, 150.0);
        assert_eq!(totals.total_units, 3.0);
        assert_eq!(totals.per_unit_average, 50.0);
        assert_eq!(totals.mean, 75.0);
    }

    #[tokio::test]
    async fn test_date_range_query() {
        let api = FakeTransport::new();
        let sales = SaleListController::new(api.clone(), 15);
        api.reply(json!([]));
        sales
            .set_filter(DATE_TO, FilterValue::Date("2024-06-30".into()))
            .await
            .unwrap();
        api.reply(json!([]));
        sales
            .set_filter(DATE_FROM, FilterValue::Date("2024-06-01".into()))
            .await
            .unwrap();

        assert_eq!(
            api.queries()[1],
            "data_inicio=2024-06-01&data_fim=2024-06-30&page=1&page_size=15"
        );
    }
}
