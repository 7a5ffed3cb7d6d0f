use serde::{Deserialize, Serialize};

/// Виды PDF-отчётов, которые умеет строить магазин
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Продажи за период
    Sales,
    /// Остатки на складе
    Stock,
}

impl ReportKind {
    /// Путь относительно базового URL API
    pub fn path(&self) -> &'static str {
        match self {
            ReportKind::Sales => "/relatorios/vendas/pdf/",
            ReportKind::Stock => "/relatorios/estoque/pdf/",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ReportKind::Sales => "vendas",
            ReportKind::Stock => "estoque",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "vendas" | "sales" => Some(ReportKind::Sales),
            "estoque" | "stock" => Some(ReportKind::Stock),
            _ => None,
        }
    }
}

/// Элемент списка `/relatorios/`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailableReport {
    pub tipo: String,
    pub nome: String,
    pub descricao: String,
    pub url: Option<String>,
}

impl AvailableReport {
    pub fn kind(&self) -> Option<ReportKind> {
        ReportKind::from_code(&self.tipo)
    }
}
