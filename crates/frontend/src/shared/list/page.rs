/// Страница списка, как её последний раз вернул магазин
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page_size: usize,
    /// 1-based
    pub page_number: usize,
}

impl<T> Page<T> {
    pub fn empty(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page_size,
            page_number: 1,
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count, self.page_size)
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page_number > 1
    }
}

/// Количество страниц; пустой список всё равно занимает одну страницу
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_count.div_ceil(page_size).max(1)
}

/// Номер страницы в пределах `[1, total_pages]`
pub fn clamp_page(page_number: usize, total_count: usize, page_size: usize) -> usize {
    page_number.clamp(1, total_pages(total_count, page_size))
}
