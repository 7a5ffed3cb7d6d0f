//! Filtered, paginated list with aggregates over the visible page.
//!
//! Every state change that needs data issues a fetch tagged with a sequence
//! number. Only the response carrying the latest issued number is applied;
//! earlier ones (success or failure) are dropped when they arrive. The last
//! applied page stays visible while a fetch is in flight.

use super::filter::{build_query, check_value, find_field, FilterField, FilterState, FilterValue};
use super::page::{clamp_page, Page};
use super::totals::AggregateSnapshot;
use crate::shared::api_utils::{decode, ApiTransport};
use crate::shared::error::{ConsoleError, ConsoleResult};
use contracts::shared::list::ListResponse;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::marker::PhantomData;

/// Описание экрана списка: ресурс, словарь фильтров и агрегируемые поля
pub trait ListScreen {
    type Item: DeserializeOwned + Clone;

    /// Screen name used in errors and logs
    const NAME: &'static str;
    /// Collection path, e.g. `/produtos/`
    const PATH: &'static str;
    /// Closed filter vocabulary in query order
    const FIELDS: &'static [FilterField];

    fn default_filters() -> FilterState {
        FilterState::default()
    }

    /// Value summed into `total_value`
    fn amount(item: &Self::Item) -> f64;
    /// Value summed into `total_units`
    fn units(item: &Self::Item) -> f64;
}

struct ListState<I> {
    filters: FilterState,
    /// Requested position; `page` below holds what was last applied
    page_number: usize,
    page_size: usize,
    page: Page<I>,
    aggregates: AggregateSnapshot,
    issued_seq: u64,
    settled_seq: u64,
    error: Option<ConsoleError>,
}

pub struct ListController<S: ListScreen, T: ApiTransport> {
    transport: T,
    state: RefCell<ListState<S::Item>>,
    _screen: PhantomData<S>,
}

impl<S: ListScreen, T: ApiTransport> ListController<S, T> {
    /// Controller with default filters and an empty page. Nothing is fetched
    /// until [`refresh`](Self::refresh) or another operation is called.
    pub fn new(transport: T, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            transport,
            state: RefCell::new(ListState {
                filters: S::default_filters(),
                page_number: 1,
                page_size,
                page: Page::empty(page_size),
                aggregates: AggregateSnapshot::default(),
                issued_seq: 0,
                settled_seq: 0,
                error: None,
            }),
            _screen: PhantomData,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Изменить один фильтр. Неизвестное поле или значение не того типа
    /// отклоняются без изменения состояния.
    pub async fn set_filter(&self, key: &str, value: FilterValue) -> ConsoleResult<()> {
        let field = find_field(S::FIELDS, key).ok_or_else(|| ConsoleError::InvalidField {
            screen: S::NAME,
            field: key.to_string(),
        })?;
        check_value(field, &value)?;
        {
            let mut st = self.state.borrow_mut();
            st.filters.insert(field.key, value);
            st.page_number = 1;
        }
        self.fetch().await
    }

    /// Несколько фильтров за один запрос. Either all changes are accepted or
    /// none is applied.
    pub async fn set_filters(&self, changes: &[(&str, FilterValue)]) -> ConsoleResult<()> {
        let mut checked = Vec::with_capacity(changes.len());
        for (key, value) in changes {
            let field = find_field(S::FIELDS, key).ok_or_else(|| ConsoleError::InvalidField {
                screen: S::NAME,
                field: key.to_string(),
            })?;
            check_value(field, value)?;
            checked.push((field.key, value.clone()));
        }
        {
            let mut st = self.state.borrow_mut();
            for (key, value) in checked {
                st.filters.insert(key, value);
            }
            st.page_number = 1;
        }
        self.fetch().await
    }

    /// Сбросить фильтры к значениям экрана по умолчанию
    pub async fn clear_filters(&self) -> ConsoleResult<()> {
        {
            let mut st = self.state.borrow_mut();
            st.filters = S::default_filters();
            st.page_number = 1;
        }
        self.fetch().await
    }

    /// Перейти на страницу `n`; номер ограничивается `[1, total_pages]`
    pub async fn set_page(&self, n: usize) -> ConsoleResult<()> {
        {
            let mut st = self.state.borrow_mut();
            st.page_number = clamp_page(n, st.page.total_count, st.page_size);
        }
        self.fetch().await
    }

    pub async fn next_page(&self) -> ConsoleResult<()> {
        let n = self.state.borrow().page_number + 1;
        self.set_page(n).await
    }

    pub async fn prev_page(&self) -> ConsoleResult<()> {
        let n = self.state.borrow().page_number.saturating_sub(1);
        self.set_page(n).await
    }

    pub async fn set_page_size(&self, page_size: usize) -> ConsoleResult<()> {
        if page_size == 0 {
            return Err(ConsoleError::Validation(
                "page size must be greater than zero".into(),
            ));
        }
        {
            let mut st = self.state.borrow_mut();
            st.page_size = page_size;
            st.page_number = 1;
        }
        self.fetch().await
    }

    /// Повторить текущий запрос без изменений
    pub async fn refresh(&self) -> ConsoleResult<()> {
        self.fetch().await
    }

    pub fn current_page(&self) -> Page<S::Item> {
        self.state.borrow().page.clone()
    }

    pub fn current_aggregates(&self) -> AggregateSnapshot {
        self.state.borrow().aggregates
    }

    pub fn filters(&self) -> FilterState {
        self.state.borrow().filters.clone()
    }

    /// Query string the next fetch would send
    pub fn current_query(&self) -> String {
        let st = self.state.borrow();
        build_query(S::FIELDS, &st.filters, st.page_number, st.page_size)
    }

    pub fn error(&self) -> Option<ConsoleError> {
        self.state.borrow().error.clone()
    }

    pub fn dismiss_error(&self) {
        self.state.borrow_mut().error = None;
    }

    /// True while the latest issued fetch has not completed
    pub fn is_loading(&self) -> bool {
        let st = self.state.borrow();
        st.settled_seq != st.issued_seq
    }

    /// Returns `Ok` when the response was applied or superseded; the error of
    /// the latest fetch is both stored and returned.
    ///
    /// When the total shrinks below the requested page, the clamped page is
    /// fetched before anything is stored, so `page.items` always belong to
    /// `page.page_number`.
    async fn fetch(&self) -> ConsoleResult<()> {
        loop {
            let (seq, query, requested) = {
                let mut st = self.state.borrow_mut();
                st.issued_seq += 1;
                let query = build_query(S::FIELDS, &st.filters, st.page_number, st.page_size);
                (st.issued_seq, query, st.page_number)
            };
            tracing::debug!("{}: fetch #{} {}?{}", S::NAME, seq, S::PATH, query);

            let result = match self.transport.get_json(S::PATH, &query).await {
                Ok(value) => decode::<ListResponse<S::Item>>(value),
                Err(e) => Err(e),
            };

            let mut st = self.state.borrow_mut();
            if seq != st.issued_seq {
                tracing::debug!(
                    "{}: discarding response #{} (latest is #{})",
                    S::NAME,
                    seq,
                    st.issued_seq
                );
                return Ok(());
            }

            let response = match result {
                Ok(response) => response,
                Err(e) => {
                    st.settled_seq = seq;
                    tracing::warn!("{}: fetch #{} failed: {}", S::NAME, seq, e);
                    st.error = Some(e.clone());
                    return Err(e);
                }
            };

            let page_size = st.page_size;
            let page_number = clamp_page(requested, response.total_count, page_size);
            if page_number != requested {
                tracing::info!(
                    "{}: page {} is past the end ({} rows), loading page {}",
                    S::NAME,
                    requested,
                    response.total_count,
                    page_number
                );
                st.page_number = page_number;
                continue;
            }

            st.settled_seq = seq;
            st.aggregates = AggregateSnapshot::compute(&response.items, S::amount, S::units);
            st.page = Page {
                items: response.items,
                total_count: response.total_count,
                page_size,
                page_number,
            };
            st.error = None;
            tracing::info!(
                "{}: page {}/{} loaded, {} of {} rows",
                S::NAME,
                page_number,
                st.page.total_pages(),
                st.page.items.len(),
                st.page.total_count
            );
            return Ok(());
        }
    }
}
