use crate::domain::common::AggregateRoot;
use crate::shared::lenient::count_or_zero;
use serde::{Deserialize, Serialize};

pub type CategoryId = i64;

fn default_true() -> bool {
    true
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    #[serde(default)]
    pub nome: String,

    #[serde(default)]
    pub descricao: Option<String>,

    #[serde(default = "default_true")]
    pub ativo: bool,

    #[serde(default)]
    pub criado_em: Option<String>,

    /// Количество активных товаров категории (считается сервером)
    #[serde(default, deserialize_with = "count_or_zero")]
    pub produtos_count: i64,
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_name() -> &'static str {
        "categorias"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(default = "default_true")]
    pub ativo: bool,
}

impl Default for CategoryDto {
    fn default() -> Self {
        Self {
            nome: String::new(),
            descricao: None,
            ativo: true,
        }
    }
}

impl CategoryDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.nome.trim().is_empty() {
            return Err("O nome da categoria é obrigatório".into());
        }
        if self.nome.chars().count() > 100 {
            return Err("O nome da categoria não pode exceder 100 caracteres".into());
        }
        Ok(())
    }
}

impl From<&Category> for CategoryDto {
    fn from(c: &Category) -> Self {
        Self {
            nome: c.nome.clone(),
            descricao: c.descricao.clone(),
            ativo: c.ativo,
        }
    }
}
