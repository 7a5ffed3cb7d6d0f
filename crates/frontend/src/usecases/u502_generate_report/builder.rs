//! Filters for PDF reports.
//!
//! Reports are not paginated; otherwise the same emptiness rules as the list
//! screens apply (see [`FilterValue::query_value`]).

use crate::shared::date_utils::{iso_date, today, DatePreset};
use crate::shared::error::{ConsoleError, ConsoleResult};
use crate::shared::list::filter::{check_value, encode_pairs, find_field};
use crate::shared::list::{FieldKind, FilterField, FilterState, FilterValue};
use chrono::{DateTime, NaiveDate, Utc};
use contracts::usecases::u502_generate_report::ReportKind;

pub const DATE_FROM: &str = "date_from";
pub const DATE_TO: &str = "date_to";
pub const CATEGORY: &str = "category";
pub const PRODUCT: &str = "product";
pub const LOW_STOCK_ONLY: &str = "low_stock_only";

const SALES_FIELDS: &[FilterField] = &[
    FilterField::new(DATE_FROM, "data_inicio", FieldKind::Date),
    FilterField::new(DATE_TO, "data_fim", FieldKind::Date),
    FilterField::new(CATEGORY, "categoria", FieldKind::Reference),
    FilterField::new(PRODUCT, "produto", FieldKind::Reference),
];

const STOCK_FIELDS: &[FilterField] = &[
    FilterField::new(LOW_STOCK_ONLY, "apenas_baixo", FieldKind::Flag),
    FilterField::new(CATEGORY, "categoria", FieldKind::Reference),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ReportFilterBuilder {
    kind: ReportKind,
    filters: FilterState,
}

impl ReportFilterBuilder {
    pub fn new(kind: ReportKind) -> Self {
        Self {
            kind,
            filters: FilterState::new(),
        }
    }

    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    pub fn fields(&self) -> &'static [FilterField] {
        match self.kind {
            ReportKind::Sales => SALES_FIELDS,
            ReportKind::Stock => STOCK_FIELDS,
        }
    }

    pub fn set(&mut self, key: &str, value: FilterValue) -> ConsoleResult<&mut Self> {
        let field = find_field(self.fields(), key).ok_or_else(|| ConsoleError::InvalidField {
            screen: self.screen_name(),
            field: key.to_string(),
        })?;
        check_value(field, &value)?;
        self.filters.insert(field.key, value);
        Ok(self)
    }

    pub fn date_range(&mut self, from: NaiveDate, to: NaiveDate) -> ConsoleResult<&mut Self> {
        if from > to {
            return Err(ConsoleError::Validation(format!(
                "start date {} is after end date {}",
                iso_date(from),
                iso_date(to)
            )));
        }
        self.set(DATE_FROM, FilterValue::Date(iso_date(from)))?;
        self.set(DATE_TO, FilterValue::Date(iso_date(to)))
    }

    /// Диапазон дат относительно сегодняшнего дня на момент вызова
    pub fn preset(&mut self, preset: DatePreset) -> ConsoleResult<&mut Self> {
        self.preset_on(preset, today())
    }

    pub fn preset_on(&mut self, preset: DatePreset, today: NaiveDate) -> ConsoleResult<&mut Self> {
        let (from, to) = preset.range(today);
        self.date_range(from, to)
    }

    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        self.filters.query_pairs(self.fields())
    }

    pub fn query(&self) -> String {
        encode_pairs(&self.pairs())
    }

    /// Имя файла, если магазин не прислал `Content-Disposition`
    pub fn suggested_filename(&self, now: DateTime<Utc>) -> String {
        match self.kind {
            ReportKind::Sales => {
                let value = |key: &str| self.filters.get(key).and_then(FilterValue::query_value);
                format!(
                    "relatorio_vendas_{}_{}.pdf",
                    value(DATE_FROM).unwrap_or_else(|| "todas".into()),
                    value(DATE_TO).unwrap_or_else(|| "datas".into())
                )
            }
            ReportKind::Stock => {
                format!("relatorio_estoque_{}.pdf", now.format("%Y%m%dT%H%M%S"))
            }
        }
    }

    fn screen_name(&self) -> &'static str {
        match self.kind {
            ReportKind::Sales => "sales report",
            ReportKind::Stock => "stock report",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sales_payload_skips_empty_values() {
        let mut b = ReportFilterBuilder::new(ReportKind::Sales);
        b.set(DATE_FROM, FilterValue::Date("2024-06-01".into()))
            .unwrap()
            .set(DATE_TO, FilterValue::Date("".into()))
            .unwrap()
            .set(CATEGORY, FilterValue::Reference(Some(3)))
            .unwrap()
            .set(PRODUCT, FilterValue::Reference(None))
            .unwrap();
        assert_eq!(b.query(), "data_inicio=2024-06-01&categoria=3");
    }

    #[test]
    fn test_stock_payload() {
        let mut b = ReportFilterBuilder::new(ReportKind::Stock);
        assert_eq!(b.query(), "");
        b.set(LOW_STOCK_ONLY, FilterValue::Flag(true)).unwrap();
        assert_eq!(b.query(), "apenas_baixo=true");
        assert!(matches!(
            b.set(DATE_FROM, FilterValue::Date("2024-01-01".into())),
            Err(ConsoleError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_presets_use_given_day() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let mut b = ReportFilterBuilder::new(ReportKind::Sales);
        b.preset_on(DatePreset::Last7Days, today).unwrap();
        assert_eq!(b.query(), "data_inicio=2024-06-08&data_fim=2024-06-15");
        b.preset_on(DatePreset::Today, today).unwrap();
        assert_eq!(b.query(), "data_inicio=2024-06-15&data_fim=2024-06-15");
        b.preset_on(DatePreset::Last30Days, today).unwrap();
        assert_eq!(b.query(), "data_inicio=2024-05-16&data_fim=2024-06-15");
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let mut b = ReportFilterBuilder::new(ReportKind::Sales);
        let from = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(b.date_range(from, to).is_err());
        assert_eq!(b.query(), "");
    }

    #[test]
    fn test_suggested_filenames() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 45).unwrap();

        let mut sales = ReportFilterBuilder::new(ReportKind::Sales);
        assert_eq!(
            sales.suggested_filename(now),
            "relatorio_vendas_todas_datas.pdf"
        );
        sales
            .set(DATE_FROM, FilterValue::Date("2024-05-01".into()))
            .unwrap();
        assert_eq!(
            sales.suggested_filename(now),
            "relatorio_vendas_2024-05-01_datas.pdf"
        );

        let stock = ReportFilterBuilder::new(ReportKind::Stock);
        assert_eq!(
            stock.suggested_filename(now),
            "relatorio_estoque_20240601T123045.pdf"
        );
    }
}
