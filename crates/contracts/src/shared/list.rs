use serde::{Deserialize, Deserializer, Serialize};

/// Ответ списочного эндпоинта
///
/// The store answers either with a paginated envelope
/// `{"count": N, "results": [...]}` or, for unpaged lists, with a bare array.
/// Both shapes decode into this type; for a bare array `total_count` is the
/// array length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawListResponse<T> {
    Paged {
        count: usize,
        results: Vec<T>,
    },
    Bare(Vec<T>),
}

impl<'de, T> Deserialize<'de> for ListResponse<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawListResponse::<T>::deserialize(deserializer)? {
            RawListResponse::Paged { count, results } => ListResponse {
                items: results,
                total_count: count,
            },
            RawListResponse::Bare(items) => {
                let total_count = items.len();
                ListResponse { items, total_count }
            }
        })
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}
