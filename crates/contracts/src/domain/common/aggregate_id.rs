use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов записей магазина
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку (в том виде, в каком он уходит в URL)
    fn as_string(&self) -> String;
}

// Магазин выдаёт целочисленные первичные ключи

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }
}
