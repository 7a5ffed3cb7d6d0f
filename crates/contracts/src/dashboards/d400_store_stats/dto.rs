use crate::shared::lenient::{count_or_zero, number_or_zero};
use serde::{Deserialize, Serialize};

/// Default number of days for the sales-per-day chart
pub const DEFAULT_CHART_DAYS: u32 = 30;
/// Default number of rows for the top products chart
pub const DEFAULT_TOP_PRODUCTS: u32 = 10;

/// Headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    #[serde(deserialize_with = "count_or_zero")]
    pub total_produtos: i64,
    #[serde(deserialize_with = "count_or_zero")]
    pub produtos_ativos: i64,
    #[serde(deserialize_with = "count_or_zero")]
    pub produtos_estoque_baixo: i64,
    /// Revenue today
    #[serde(deserialize_with = "number_or_zero")]
    pub total_vendas_hoje: f64,
    /// Revenue in the current month
    #[serde(deserialize_with = "number_or_zero")]
    pub total_vendas_mes: f64,
    #[serde(deserialize_with = "count_or_zero")]
    pub quantidade_vendas_hoje: i64,
    #[serde(deserialize_with = "count_or_zero")]
    pub quantidade_vendas_mes: i64,
    /// None when nothing was sold yet
    pub produto_mais_vendido: Option<String>,
    pub categoria_mais_vendida: Option<String>,
}

/// One point of the sales-per-day series
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailySales {
    /// Date in format "YYYY-MM-DD"
    pub data: String,
    #[serde(deserialize_with = "number_or_zero")]
    pub total_vendas: f64,
    #[serde(deserialize_with = "count_or_zero")]
    pub quantidade_vendas: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TopProduct {
    pub nome: String,
    pub categoria: Option<String>,
    /// Units sold
    #[serde(deserialize_with = "count_or_zero")]
    pub total_vendido: i64,
    #[serde(deserialize_with = "number_or_zero")]
    pub valor_total: f64,
    #[serde(deserialize_with = "count_or_zero")]
    pub estoque_atual: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorySales {
    pub categoria: String,
    #[serde(deserialize_with = "count_or_zero")]
    pub total_produtos: i64,
    #[serde(deserialize_with = "number_or_zero")]
    pub total_vendas: f64,
    #[serde(deserialize_with = "count_or_zero")]
    pub quantidade_vendida: i64,
}

/// Everything the dashboard screen shows, loaded together
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub daily_sales: Vec<DailySales>,
    pub top_products: Vec<TopProduct>,
    pub by_category: Vec<CategorySales>,
}
