use crate::shared::api_utils::{get, ApiTransport};
use crate::shared::error::ConsoleResult;
use contracts::dashboards::d400_store_stats::dto::{
    CategorySales, DailySales, DashboardStats, TopProduct,
};
use contracts::shared::list::ListResponse;

pub async fn fetch_stats<A>(api: &A) -> ConsoleResult<DashboardStats>
where
    A: ApiTransport + ?Sized,
{
    get(api, "/dashboard/stats/", "").await
}

/// Продажи по дням за последние `days` дней
pub async fn fetch_daily_sales<A>(api: &A, days: u32) -> ConsoleResult<Vec<DailySales>>
where
    A: ApiTransport + ?Sized,
{
    let list: ListResponse<DailySales> =
        get(api, "/dashboard/grafico-vendas/", &format!("dias={}", days)).await?;
    Ok(list.items)
}

pub async fn fetch_top_products<A>(api: &A, limit: u32) -> ConsoleResult<Vec<TopProduct>>
where
    A: ApiTransport + ?Sized,
{
    let list: ListResponse<TopProduct> =
        get(api, "/dashboard/grafico-produtos/", &format!("limite={}", limit)).await?;
    Ok(list.items)
}

pub async fn fetch_sales_by_category<A>(api: &A) -> ConsoleResult<Vec<CategorySales>>
where
    A: ApiTransport + ?Sized,
{
    let list: ListResponse<CategorySales> = get(api, "/dashboard/grafico-categorias/", "").await?;
    Ok(list.items)
}
