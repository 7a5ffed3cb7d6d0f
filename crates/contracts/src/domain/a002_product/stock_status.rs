use serde::{Deserialize, Serialize};

/// Порог "низкого остатка": всё, что ниже, но больше нуля
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Состояние остатка товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[serde(rename = "sem_estoque")]
    OutOfStock,
    #[serde(rename = "estoque_baixo")]
    Low,
    Ok,
}

impl StockStatus {
    /// Код статуса в том виде, в каком его отдаёт магазин
    pub fn code(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "sem_estoque",
            StockStatus::Low => "estoque_baixo",
            StockStatus::Ok => "ok",
        }
    }

    /// Метка для вывода рядом с остатком
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "SEM ESTOQUE",
            StockStatus::Low => "BAIXO",
            StockStatus::Ok => "OK",
        }
    }
}

/// Классификация остатка. Отрицательный остаток считается нулевым.
pub fn classify(stock: i64) -> StockStatus {
    if stock <= 0 {
        StockStatus::OutOfStock
    } else if stock < LOW_STOCK_THRESHOLD {
        StockStatus::Low
    } else {
        StockStatus::Ok
    }
}
