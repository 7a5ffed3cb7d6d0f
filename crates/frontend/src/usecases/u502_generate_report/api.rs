use super::builder::ReportFilterBuilder;
use crate::shared::api_utils::{get, ApiTransport};
use crate::shared::error::ConsoleResult;
use chrono::Utc;
use contracts::shared::list::ListResponse;
use contracts::usecases::u502_generate_report::AvailableReport;

/// PDF-отчёт, готовый к сохранению
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedReport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub async fn fetch_available<A>(api: &A) -> ConsoleResult<Vec<AvailableReport>>
where
    A: ApiTransport + ?Sized,
{
    let list: ListResponse<AvailableReport> = get(api, "/relatorios/", "").await?;
    Ok(list.items)
}

pub async fn generate<A>(api: &A, filters: &ReportFilterBuilder) -> ConsoleResult<GeneratedReport>
where
    A: ApiTransport + ?Sized,
{
    let kind = filters.kind();
    let query = filters.query();
    tracing::info!("generating {} report ({})", kind.code(), query);

    let document = api.get_document(kind.path(), &query).await?;
    let filename = document
        .filename
        .unwrap_or_else(|| filters.suggested_filename(Utc::now()));
    Ok(GeneratedReport {
        filename,
        bytes: document.bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::Document;
    use crate::shared::list::FilterValue;
    use crate::shared::testing::FakeTransport;
    use contracts::usecases::u502_generate_report::ReportKind;

    #[tokio::test]
    async fn test_sales_report_uses_derived_name_without_disposition() {
        let api = FakeTransport::new();
        api.reply_document(Document {
            bytes: b"%PDF".to_vec(),
            filename: None,
            content_type: Some("application/pdf".into()),
        });

        let mut filters = ReportFilterBuilder::new(ReportKind::Sales);
        filters
            .set("date_from", FilterValue::Date("2024-01-01".into()))
            .unwrap()
            .set("date_to", FilterValue::Date("2024-01-31".into()))
            .unwrap();
        let report = generate(&api, &filters).await.unwrap();

        assert_eq!(report.filename, "relatorio_vendas_2024-01-01_2024-01-31.pdf");
        assert_eq!(report.bytes, b"%PDF".to_vec());
        let call = &api.calls()[0];
        assert_eq!(call.path, "/relatorios/vendas/pdf/");
        assert_eq!(call.query, "data_inicio=2024-01-01&data_fim=2024-01-31");
    }

    #[tokio::test]
    async fn test_store_filename_wins() {
        let api = FakeTransport::new();
        api.reply_document(Document {
            bytes: vec![1, 2, 3],
            filename: Some("estoque.pdf".into()),
            content_type: None,
        });
        let filters = ReportFilterBuilder::new(ReportKind::Stock);
        let report = generate(&api, &filters).await.unwrap();
        assert_eq!(report.filename, "estoque.pdf");
    }
}
