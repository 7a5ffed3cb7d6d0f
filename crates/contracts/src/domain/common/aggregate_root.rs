use super::AggregateId;

/// Трейт для записи, которая живёт во внешнем хранилище магазина
///
/// Определяет идентификатор экземпляра и путь ресурса REST API.
pub trait AggregateRoot {
    /// Тип идентификатора записи
    type Id: AggregateId;

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Имя коллекции в REST API (например, "produtos")
    fn collection_name() -> &'static str;

    /// Путь коллекции относительно базового URL API: "/produtos/"
    fn collection_path() -> String {
        format!("/{}/", Self::collection_name())
    }

    /// Путь конкретной записи: "/produtos/7/"
    fn element_path(id: Self::Id) -> String {
        format!("/{}/{}/", Self::collection_name(), id.as_string())
    }
}
