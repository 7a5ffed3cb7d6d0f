pub mod controller;
pub mod filter;
pub mod page;
pub mod totals;

pub use controller::{ListController, ListScreen};
pub use filter::{FieldKind, FilterField, FilterState, FilterValue};
pub use page::Page;
pub use totals::AggregateSnapshot;
