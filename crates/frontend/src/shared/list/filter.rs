//! Filter vocabularies and query-string construction for list screens

use crate::shared::error::{ConsoleError, ConsoleResult};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Declared type of a filter field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, sent when non-blank after trim
    Text,
    /// Boolean, sent only when `true`
    Flag,
    /// `YYYY-MM-DD`, sent when non-blank
    Date,
    /// Id of another aggregate, sent when present
    Reference,
}

/// One entry of a screen's closed filter vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    /// Name used by callers (`set_filter("search", ..)`)
    pub key: &'static str,
    /// Query parameter the store expects
    pub param: &'static str,
    pub kind: FieldKind,
}

impl FilterField {
    pub const fn new(key: &'static str, param: &'static str, kind: FieldKind) -> Self {
        Self { key, param, kind }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Flag(bool),
    Date(String),
    Reference(Option<i64>),
}

impl FilterValue {
    fn kind(&self) -> FieldKind {
        match self {
            FilterValue::Text(_) => FieldKind::Text,
            FilterValue::Flag(_) => FieldKind::Flag,
            FilterValue::Date(_) => FieldKind::Date,
            FilterValue::Reference(_) => FieldKind::Reference,
        }
    }

    /// Значение параметра запроса или `None`, если поле считается пустым
    pub fn query_value(&self) -> Option<String> {
        match self {
            FilterValue::Text(s) => {
                let t = s.trim();
                (!t.is_empty()).then(|| t.to_string())
            }
            FilterValue::Flag(true) => Some("true".to_string()),
            FilterValue::Flag(false) => None,
            FilterValue::Date(s) => {
                let t = s.trim();
                (!t.is_empty()).then(|| t.to_string())
            }
            FilterValue::Reference(id) => id.map(|id| id.to_string()),
        }
    }

    /// Разбор значения из командной строки под тип поля
    pub fn parse_for(kind: FieldKind, raw: &str) -> ConsoleResult<Self> {
        let raw = raw.trim();
        Ok(match kind {
            FieldKind::Text => FilterValue::Text(raw.to_string()),
            FieldKind::Date => FilterValue::Date(raw.to_string()),
            FieldKind::Flag => match raw.to_ascii_lowercase().as_str() {
                "" | "false" | "0" | "no" => FilterValue::Flag(false),
                "true" | "1" | "yes" => FilterValue::Flag(true),
                other => {
                    return Err(ConsoleError::Validation(format!(
                        "expected true/false, got '{}'",
                        other
                    )))
                }
            },
            FieldKind::Reference if raw.is_empty() => FilterValue::Reference(None),
            FieldKind::Reference => FilterValue::Reference(Some(raw.parse().map_err(|_| {
                ConsoleError::Validation(format!("expected a numeric id, got '{}'", raw))
            })?)),
        })
    }
}

/// Проверка значения против объявленного типа поля
pub fn check_value(field: &FilterField, value: &FilterValue) -> ConsoleResult<()> {
    if value.kind() != field.kind {
        return Err(ConsoleError::Validation(format!(
            "field '{}' expects a {:?} value",
            field.key, field.kind
        )));
    }
    if let FilterValue::Date(s) = value {
        let s = s.trim();
        if !s.is_empty() && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_err() {
            return Err(ConsoleError::Validation(format!(
                "field '{}': '{}' is not a YYYY-MM-DD date",
                field.key, s
            )));
        }
    }
    Ok(())
}

/// Current filter values of one screen, keyed by [`FilterField::key`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    values: HashMap<&'static str, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: FilterValue) -> Self {
        self.values.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    pub(crate) fn insert(&mut self, key: &'static str, value: FilterValue) {
        self.values.insert(key, value);
    }

    /// Пары параметр/значение в порядке объявления полей, пустые пропускаются
    pub fn query_pairs(&self, fields: &[FilterField]) -> Vec<(&'static str, String)> {
        fields
            .iter()
            .filter_map(|f| {
                self.values
                    .get(f.key)
                    .and_then(FilterValue::query_value)
                    .map(|v| (f.param, v))
            })
            .collect()
    }
}

/// Собирает строку запроса: непустые фильтры, затем `page` и `page_size`
pub fn build_query(
    fields: &[FilterField],
    state: &FilterState,
    page_number: usize,
    page_size: usize,
) -> String {
    let mut pairs = state.query_pairs(fields);
    pairs.push(("page", page_number.to_string()));
    pairs.push(("page_size", page_size.to_string()));
    encode_pairs(&pairs)
}

pub fn encode_pairs(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn find_field<'a>(fields: &'a [FilterField], key: &str) -> Option<&'a FilterField> {
    fields.iter().find(|f| f.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FilterField] = &[
        FilterField::new("search", "busca", FieldKind::Text),
        FilterField::new("category", "categoria", FieldKind::Reference),
        FilterField::new("low_stock", "estoque_baixo", FieldKind::Flag),
        FilterField::new("date_from", "data_inicio", FieldKind::Date),
    ];

    #[test]
    fn test_blank_fields_are_omitted_in_declared_order() {
        let state = FilterState::new()
            .with("date_from", FilterValue::Date("2024-01-01".into()))
            .with("search", FilterValue::Text("   ".into()))
            .with("category", FilterValue::Reference(Some(5)))
            .with("low_stock", FilterValue::Flag(false));
        assert_eq!(
            build_query(FIELDS, &state, 1, 12),
            "categoria=5&data_inicio=2024-01-01&page=1&page_size=12"
        );
    }

    #[test]
    fn test_text_is_trimmed_and_encoded() {
        let state = FilterState::new().with("search", FilterValue::Text(" café & cia ".into()));
        assert_eq!(
            build_query(FIELDS, &state, 2, 15),
            "busca=caf%C3%A9%20%26%20cia&page=2&page_size=15"
        );
    }

    #[test]
    fn test_flag_sent_only_when_true() {
        let state = FilterState::new().with("low_stock", FilterValue::Flag(true));
        assert_eq!(state.query_pairs(FIELDS), vec![("estoque_baixo", "true".to_string())]);
    }

    #[test]
    fn test_check_value_types() {
        let date = find_field(FIELDS, "date_from").unwrap();
        assert!(check_value(date, &FilterValue::Date("2024-02-30".into())).is_err());
        assert!(check_value(date, &FilterValue::Date("".into())).is_ok());
        assert!(check_value(date, &FilterValue::Text("2024-02-01".into())).is_err());

        let category = find_field(FIELDS, "category").unwrap();
        assert!(check_value(category, &FilterValue::Reference(None)).is_ok());
    }

    #[test]
    fn test_parse_for() {
        assert_eq!(
            FilterValue::parse_for(FieldKind::Reference, "7").unwrap(),
            FilterValue::Reference(Some(7))
        );
        assert_eq!(
            FilterValue::parse_for(FieldKind::Flag, "yes").unwrap(),
            FilterValue::Flag(true)
        );
        assert!(FilterValue::parse_for(FieldKind::Reference, "abc").is_err());
    }
}
