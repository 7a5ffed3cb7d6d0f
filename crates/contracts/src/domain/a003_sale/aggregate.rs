use crate::domain::a002_product::ProductId;
use crate::domain::common::AggregateRoot;
use crate::shared::lenient::{count_or_zero, number_or_zero};
use serde::{Deserialize, Serialize};

pub type SaleId = i64;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Продажа (строка журнала продаж)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,

    /// Ссылка на товар; в списочной выдаче отсутствует
    #[serde(default)]
    pub produto: Option<ProductId>,

    #[serde(default)]
    pub produto_nome: Option<String>,

    #[serde(default)]
    pub categoria_nome: Option<String>,

    #[serde(default, deserialize_with = "count_or_zero")]
    pub quantidade: i64,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub preco_unitario: f64,

    /// Считается сервером как preco_unitario * quantidade
    #[serde(default, deserialize_with = "number_or_zero")]
    pub valor_total: f64,

    #[serde(default)]
    pub data_venda: Option<String>,

    #[serde(default)]
    pub observacoes: Option<String>,
}

impl AggregateRoot for Sale {
    type Id = SaleId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_name() -> &'static str {
        "vendas"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDto {
    pub produto: ProductId,
    pub quantidade: u32,
    /// Если не указана, сервер берёт текущую цену товара
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preco_unitario: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

impl SaleDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.quantidade == 0 {
            return Err("A quantidade deve ser maior que zero".into());
        }
        if let Some(price) = self.preco_unitario {
            if !price.is_finite() || price <= 0.0 {
                return Err("O preço unitário deve ser maior que zero".into());
            }
        }
        Ok(())
    }

    /// Проверка остатка перед созданием продажи
    pub fn check_stock(&self, available: i64) -> Result<(), String> {
        if available < self.quantidade as i64 {
            return Err(format!(
                "Estoque insuficiente. Disponível: {} unidades.",
                available.max(0)
            ));
        }
        Ok(())
    }
}
