use super::stock_status::{classify, StockStatus};
use crate::domain::a001_category::CategoryId;
use crate::domain::common::AggregateRoot;
use crate::shared::lenient::{count_or_zero, number_or_zero};
use serde::{Deserialize, Serialize};

pub type ProductId = i64;

fn default_true() -> bool {
    true
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога
///
/// The list endpoint returns a reduced shape (no `descricao`, no `categoria`
/// id); every field outside `id` is therefore optional on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    #[serde(default)]
    pub nome: String,

    #[serde(default)]
    pub descricao: Option<String>,

    #[serde(default, deserialize_with = "number_or_zero")]
    pub preco: f64,

    #[serde(default, deserialize_with = "count_or_zero")]
    pub estoque: i64,

    #[serde(default)]
    pub categoria: Option<CategoryId>,

    #[serde(default)]
    pub categoria_nome: Option<String>,

    #[serde(default = "default_true")]
    pub ativo: bool,

    #[serde(default)]
    pub criado_em: Option<String>,

    #[serde(default)]
    pub atualizado_em: Option<String>,
}

impl Product {
    /// Статус остатка считается на клиенте, серверный `estoque_status` не используется
    pub fn stock_status(&self) -> StockStatus {
        classify(self.estoque)
    }

    /// Доступен ли товар для продажи
    pub fn is_available(&self) -> bool {
        self.ativo && self.estoque > 0
    }

    /// Стоимость остатка по текущей цене
    pub fn stock_value(&self) -> f64 {
        self.preco * self.estoque.max(0) as f64
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_name() -> &'static str {
        "produtos"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    pub preco: f64,
    pub estoque: u32,
    pub categoria: Option<CategoryId>,
    #[serde(default = "default_true")]
    pub ativo: bool,
}

impl Default for ProductDto {
    fn default() -> Self {
        Self {
            nome: String::new(),
            descricao: None,
            preco: 0.0,
            estoque: 0,
            categoria: None,
            ativo: true,
        }
    }
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.nome.trim().is_empty() {
            return Err("O nome do produto é obrigatório".into());
        }
        if self.nome.chars().count() > 200 {
            return Err("O nome do produto não pode exceder 200 caracteres".into());
        }
        if !self.preco.is_finite() || self.preco <= 0.0 {
            return Err("O preço deve ser maior que zero.".into());
        }
        if self.categoria.is_none() {
            return Err("A categoria é obrigatória".into());
        }
        Ok(())
    }
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            nome: p.nome.clone(),
            descricao: p.descricao.clone(),
            preco: p.preco,
            estoque: p.estoque.clamp(0, u32::MAX as i64) as u32,
            categoria: p.categoria,
            ativo: p.ativo,
        }
    }
}
