use super::postal_code::{Address, PostalCode};
use serde::{Deserialize, Serialize};

/// Список UF Бразилии
pub const BRAZILIAN_STATES: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// Настройки магазина (единственная запись)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    // Данные компании
    pub nome_empresa: String,
    pub cnpj: String,

    // Адрес
    pub cep: String,
    pub endereco: String,
    pub numero: String,
    pub complemento: String,
    pub bairro: String,
    pub cidade: String,
    pub uf: String,

    // Контакты
    pub telefone: String,
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub atualizado_em: Option<String>,
}

fn only_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

impl StoreConfig {
    /// Проверка перед сохранением. Возвращает все найденные ошибки по полям.
    pub fn validate(&self) -> Result<(), Vec<(&'static str, String)>> {
        let mut errors = Vec::new();

        let required = [
            ("nome_empresa", &self.nome_empresa, "Nome da empresa é obrigatório"),
            ("cep", &self.cep, "CEP é obrigatório"),
            ("endereco", &self.endereco, "Endereço é obrigatório"),
            ("cidade", &self.cidade, "Cidade é obrigatória"),
            ("uf", &self.uf, "UF é obrigatório"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.push((field, message.to_string()));
            }
        }

        if !self.cep.trim().is_empty() {
            if let Err(e) = PostalCode::parse(&self.cep) {
                errors.push(("cep", e));
            }
        }
        if !self.uf.trim().is_empty()
            && !BRAZILIAN_STATES.contains(&self.uf.trim().to_uppercase().as_str())
        {
            errors.push(("uf", format!("UF desconhecida: {}", self.uf.trim())));
        }
        if !self.cnpj.trim().is_empty() && only_digits(&self.cnpj).len() != 14 {
            errors.push(("cnpj", "CNPJ deve ter 14 dígitos".to_string()));
        }
        if !self.email.trim().is_empty() && !looks_like_email(self.email.trim()) {
            errors.push(("email", "Email inválido".to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Приведение масок: CEP 00000-000, CNPJ 00.000.000/0000-00, UF в верхнем регистре
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        if let Ok(cep) = PostalCode::parse(&self.cep) {
            out.cep = cep.formatted();
        }
        let cnpj = only_digits(&self.cnpj);
        if cnpj.len() == 14 {
            out.cnpj = format!(
                "{}.{}.{}/{}-{}",
                &cnpj[..2],
                &cnpj[2..5],
                &cnpj[5..8],
                &cnpj[8..12],
                &cnpj[12..]
            );
        }
        out.uf = self.uf.trim().to_uppercase();
        out
    }

    /// Заполнить адрес из результата поиска по CEP.
    /// Complement is only replaced when the lookup returned one.
    pub fn apply_address(&mut self, address: &Address) {
        if !address.cep.is_empty() {
            self.cep = address.cep.clone();
        }
        self.endereco = address.endereco.clone();
        self.bairro = address.bairro.clone();
        self.cidade = address.cidade.clone();
        self.uf = address.uf.clone();
        if let Some(c) = address.complemento.as_ref().filter(|c| !c.trim().is_empty()) {
            self.complemento = c.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> StoreConfig {
        StoreConfig {
            nome_empresa: "Loja Exemplo".into(),
            cep: "01310100".into(),
            endereco: "Avenida Paulista".into(),
            cidade: "São Paulo".into(),
            uf: "sp".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_missing_required_fields_are_all_reported() {
        let errors = StoreConfig::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec!["nome_empresa", "cep", "endereco", "cidade", "uf"]);
    }

    #[test]
    fn test_optional_fields_checked_only_when_present() {
        let mut cfg = valid();
        cfg.cnpj = "123".into();
        cfg.email = "not-an-email".into();
        let errors = cfg.validate().unwrap_err();
        assert!(errors.iter().any(|(f, _)| *f == "cnpj"));
        assert!(errors.iter().any(|(f, _)| *f == "email"));

        cfg.cnpj = "11222333000181".into();
        cfg.email = "contato@loja.com.br".into();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_normalized_masks() {
        let mut cfg = valid();
        cfg.cnpj = "11222333000181".into();
        let n = cfg.normalized();
        assert_eq!(n.cep, "01310-100");
        assert_eq!(n.cnpj, "11.222.333/0001-81");
        assert_eq!(n.uf, "SP");
    }

    #[test]
    fn test_apply_address_keeps_complement_when_lookup_has_none() {
        let mut cfg = valid();
        cfg.complemento = "Sala 4".into();
        cfg.apply_address(&Address {
            success: true,
            cep: "20040-020".into(),
            endereco: "Avenida Rio Branco".into(),
            complemento: None,
            bairro: "Centro".into(),
            cidade: "Rio de Janeiro".into(),
            uf: "RJ".into(),
        });
        assert_eq!(cfg.complemento, "Sala 4");
        assert_eq!(cfg.cidade, "Rio de Janeiro");
        assert_eq!(cfg.cep, "20040-020");
    }
}
