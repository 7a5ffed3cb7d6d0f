use serde::{Deserialize, Serialize};
use std::fmt;

/// CEP: ровно 8 цифр после удаления маски
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Принимает "01310-100", "01310100", "01.310-100" и т.п.
    pub fn parse(input: &str) -> Result<Self, String> {
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() != 8 {
            return Err("CEP deve ter 8 dígitos".into());
        }
        Ok(Self(digits))
    }

    /// Только цифры, как уходит в URL поиска
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Маска 00000-000, как хранится в настройках магазина
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.0[..5], &self.0[5..])
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Адрес, найденный по CEP
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub endereco: String,
    #[serde(default)]
    pub complemento: Option<String>,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub cidade: String,
    #[serde(default)]
    pub uf: String,
}
