use crate::shared::list::{FieldKind, FilterField, FilterState, FilterValue, ListController, ListScreen};
use contracts::domain::a002_product::Product;

pub const SEARCH: &str = "search";
pub const CATEGORY: &str = "category";
pub const LOW_STOCK: &str = "low_stock";
pub const ACTIVE: &str = "active";

/// Каталог товаров
pub struct ProductsScreen;

impl ListScreen for ProductsScreen {
    type Item = Product;

    const NAME: &'static str = "products";
    const PATH: &'static str = "/produtos/";
    const FIELDS: &'static [FilterField] = &[
        FilterField::new(SEARCH, "busca", FieldKind::Text),
        FilterField::new(CATEGORY, "categoria", FieldKind::Reference),
        FilterField::new(LOW_STOCK, "estoque_baixo", FieldKind::Flag),
        FilterField::new(ACTIVE, "ativo", FieldKind::Flag),
    ];

    /// Only active products are listed until the filter is changed
    fn default_filters() -> FilterState {
        FilterState::new().with(ACTIVE, FilterValue::Flag(true))
    }

    fn amount(item: &Product) -> f64 {
        item.stock_value()
    }

    fn units(item: &Product) -> f64 {
        item.estoque.max(0) as f64
    }
}

pub type ProductListController<T> = ListController<ProductsScreen, T>;
