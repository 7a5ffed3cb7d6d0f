//! Dashboard data with the same latest-request-wins rule as the list screens

use super::api;
use crate::shared::api_utils::ApiTransport;
use crate::shared::error::{ConsoleError, ConsoleResult};
use contracts::dashboards::d400_store_stats::dto::{
    DashboardSnapshot, DEFAULT_CHART_DAYS, DEFAULT_TOP_PRODUCTS,
};
use std::cell::RefCell;

struct StatsState {
    days: u32,
    limit: u32,
    snapshot: Option<DashboardSnapshot>,
    issued_seq: u64,
    settled_seq: u64,
    error: Option<ConsoleError>,
}

pub struct StatsLoader<T: ApiTransport> {
    transport: T,
    state: RefCell<StatsState>,
}

impl<T: ApiTransport> StatsLoader<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: RefCell::new(StatsState {
                days: DEFAULT_CHART_DAYS,
                limit: DEFAULT_TOP_PRODUCTS,
                snapshot: None,
                issued_seq: 0,
                settled_seq: 0,
                error: None,
            }),
        }
    }

    /// Период графика продаж (`dias`) и размер топа товаров (`limite`)
    pub async fn load(&self, days: u32, limit: u32) -> ConsoleResult<()> {
        if days == 0 || limit == 0 {
            return Err(ConsoleError::Validation(
                "days and limit must be greater than zero".into(),
            ));
        }
        {
            let mut st = self.state.borrow_mut();
            st.days = days;
            st.limit = limit;
        }
        self.refresh().await
    }

    pub async fn set_days(&self, days: u32) -> ConsoleResult<()> {
        let limit = self.state.borrow().limit;
        self.load(days, limit).await
    }

    /// Загрузить все блоки дашборда. Ответ применяется, только если за это
    /// время не был выпущен более новый запрос.
    pub async fn refresh(&self) -> ConsoleResult<()> {
        let (seq, days, limit) = {
            let mut st = self.state.borrow_mut();
            st.issued_seq += 1;
            (st.issued_seq, st.days, st.limit)
        };
        tracing::debug!("dashboard: fetch #{} (dias={}, limite={})", seq, days, limit);

        let transport = &self.transport;
        let (stats, daily, top, by_category) = tokio::join!(
            api::fetch_stats(transport),
            api::fetch_daily_sales(transport, days),
            api::fetch_top_products(transport, limit),
            api::fetch_sales_by_category(transport),
        );
        let result = match (stats, daily, top, by_category) {
            (Ok(stats), Ok(daily_sales), Ok(top_products), Ok(by_category)) => {
                Ok(DashboardSnapshot {
                    stats,
                    daily_sales,
                    top_products,
                    by_category,
                })
            }
            (Err(e), _, _, _) | (_, Err(e), _, _) | (_, _, Err(e), _) | (_, _, _, Err(e)) => Err(e),
        };

        let mut st = self.state.borrow_mut();
        if seq != st.issued_seq {
            tracing::debug!("dashboard: discarding response #{}", seq);
            return Ok(());
        }
        st.settled_seq = seq;
        match result {
            Ok(snapshot) => {
                st.snapshot = Some(snapshot);
                st.error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("dashboard: fetch #{} failed: {}", seq, e);
                st.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Последние успешно загруженные данные
    pub fn snapshot(&self) -> Option<DashboardSnapshot> {
        self.state.borrow().snapshot.clone()
    }

    pub fn error(&self) -> Option<ConsoleError> {
        self.state.borrow().error.clone()
    }

    pub fn is_loading(&self) -> bool {
        let st = self.state.borrow();
        st.settled_seq != st.issued_seq
    }
}
