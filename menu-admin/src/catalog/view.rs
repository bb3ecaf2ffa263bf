//! Derived catalog view
//!
//! Pure state container for the admin list screen: category/name
//! filters, sort key, pagination, and the bulk-selection set. All state
//! changes go through the reducer-style methods; [`CatalogView::page`]
//! derives the visible slice on demand, so it is safe to call at any
//! time relative to subscription pushes.

use std::collections::HashSet;

use shared::PaginatedResponse;
use shared::models::{CatalogItem, Language};

/// Sort key for the derived view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Insertion order, as delivered by the subscription
    #[default]
    Insertion,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

/// Filtered, sorted, paginated view over the cached catalog
#[derive(Debug, Clone)]
pub struct CatalogView {
    items: Vec<CatalogItem>,
    language: Language,
    /// Exact-match category label filter, empty = all
    category_filter: String,
    /// Case-insensitive substring filter on the localized name
    name_filter: String,
    sort: SortKey,
    /// 1-based page number
    page: u32,
    page_size: usize,
    selected: HashSet<String>,
}

impl CatalogView {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            language: Language::default(),
            category_filter: String::new(),
            name_filter: String::new(),
            sort: SortKey::default(),
            page: 1,
            page_size: page_size.max(1),
            selected: HashSet::new(),
        }
    }

    // =========================================================================
    // Reducers
    // =========================================================================

    /// Replace the cached items from a subscription snapshot.
    pub fn set_items(&mut self, items: Vec<CatalogItem>) {
        self.items = items;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Change the category filter. Resets to page 1 and clears the
    /// selection.
    pub fn set_category_filter(&mut self, category: impl Into<String>) {
        self.category_filter = category.into();
        self.page = 1;
        self.selected.clear();
    }

    /// Change the name filter. Resets to page 1; the selection is
    /// cleared only if that is an actual page change.
    pub fn set_name_filter(&mut self, filter: impl Into<String>) {
        self.name_filter = filter.into();
        self.set_page(1);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Go to a page (1-based). Moving to a different page clears the
    /// selection.
    pub fn set_page(&mut self, page: u32) {
        let page = page.max(1);
        if page != self.page {
            self.page = page;
            self.selected.clear();
        }
    }

    /// Change the page size (viewport change). Returns to page 1 and
    /// clears the selection.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        if page_size != self.page_size {
            self.page_size = page_size;
            self.page = 1;
            self.selected.clear();
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn toggle_selected(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Select exactly the currently visible page, replacing any prior
    /// selection.
    pub fn select_visible(&mut self) {
        self.selected = self
            .page()
            .data
            .iter()
            .filter_map(|item| item.id.clone())
            .collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    // =========================================================================
    // Derived view
    // =========================================================================

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn current_page(&self) -> u32 {
        self.page
    }

    fn filtered(&self) -> Vec<&CatalogItem> {
        let name_needle = self.name_filter.to_lowercase();
        let mut filtered: Vec<&CatalogItem> = self
            .items
            .iter()
            .filter(|item| {
                self.category_filter.is_empty() || item.category == self.category_filter
            })
            .filter(|item| {
                name_needle.is_empty()
                    || item
                        .display_name(self.language)
                        .to_lowercase()
                        .contains(&name_needle)
            })
            .collect();

        match self.sort {
            SortKey::Insertion => {}
            SortKey::PriceAsc => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortKey::PriceDesc => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortKey::NameAsc => filtered.sort_by(|a, b| {
                a.display_name(self.language)
                    .to_lowercase()
                    .cmp(&b.display_name(self.language).to_lowercase())
            }),
            SortKey::NameDesc => filtered.sort_by(|a, b| {
                b.display_name(self.language)
                    .to_lowercase()
                    .cmp(&a.display_name(self.language).to_lowercase())
            }),
        }

        filtered
    }

    /// Current page of the filtered, sorted view.
    pub fn page(&self) -> PaginatedResponse<CatalogItem> {
        let filtered = self.filtered();
        let total = filtered.len() as u64;
        let start = (self.page as usize - 1) * self.page_size;
        let data: Vec<CatalogItem> = filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();
        PaginatedResponse::new(data, total, self.page, self.page_size as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::LocalizedText;

    fn item(id: &str, name: &str, category: &str, price: f64) -> CatalogItem {
        CatalogItem {
            id: Some(id.to_string()),
            name: LocalizedText::new(name),
            category: category.to_string(),
            price,
            ..Default::default()
        }
    }

    fn sample_view() -> CatalogView {
        let mut view = CatalogView::new(10);
        view.set_items(vec![
            item("m1", "Борщ", "Супы", 45.0),
            item("m2", "Окрошка", "Супы", 40.0),
            item("m3", "Цезарь", "Салаты", 80.0),
            item("m4", "Греческий", "Салаты", 65.0),
            item("m5", "Борщ зелёный", "Супы", 50.0),
        ]);
        view
    }

    #[test]
    fn test_category_filter_exact_match() {
        let mut view = sample_view();
        view.set_category_filter("Супы");
        let page = view.page();
        assert_eq!(page.total, 3);
        assert!(page.data.iter().all(|i| i.category == "Супы"));

        view.set_category_filter("");
        assert_eq!(view.page().total, 5);
    }

    #[test]
    fn test_name_filter_case_insensitive_substring() {
        let mut view = sample_view();
        view.set_name_filter("борщ");
        let page = view.page();
        assert_eq!(page.total, 2);
        for included in &page.data {
            assert!(
                included
                    .display_name(Language::Ru)
                    .to_lowercase()
                    .contains("борщ")
            );
        }
    }

    #[test]
    fn test_name_filter_uses_active_language() {
        let mut view = CatalogView::new(10);
        view.set_items(vec![CatalogItem {
            id: Some("m1".into()),
            name: LocalizedText::with_translations("Борщ", "Borș", "Borscht"),
            ..Default::default()
        }]);
        view.set_language(Language::En);
        view.set_name_filter("borsch");
        assert_eq!(view.page().total, 1);

        view.set_name_filter("борщ");
        assert_eq!(view.page().total, 0);
    }

    #[test]
    fn test_price_sort_total_order() {
        let mut view = sample_view();
        view.set_sort(SortKey::PriceAsc);
        let prices: Vec<f64> = view.page().data.iter().map(|i| i.price).collect();
        assert_eq!(prices, vec![40.0, 45.0, 50.0, 65.0, 80.0]);

        view.set_sort(SortKey::PriceDesc);
        let prices: Vec<f64> = view.page().data.iter().map(|i| i.price).collect();
        assert_eq!(prices, vec![80.0, 65.0, 50.0, 45.0, 40.0]);
    }

    #[test]
    fn test_absent_price_sorts_as_zero() {
        let mut view = CatalogView::new(10);
        view.set_items(vec![item("m1", "a", "", 10.0), item("m2", "b", "", 0.0)]);
        view.set_sort(SortKey::PriceAsc);
        assert_eq!(view.page().data[0].id.as_deref(), Some("m2"));
    }

    #[test]
    fn test_pagination_reproduces_sequence_exactly_once() {
        let mut view = CatalogView::new(2);
        view.set_items(
            (0..5)
                .map(|i| item(&format!("m{i}"), &format!("item{i}"), "", i as f64))
                .collect(),
        );

        let first = view.page();
        assert_eq!(first.total_pages, 3);

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            view.set_page(page);
            seen.extend(view.page().data.iter().map(|i| i.id.clone().unwrap()));
        }
        assert_eq!(seen, vec!["m0", "m1", "m2", "m3", "m4"]);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut view = sample_view();
        view.set_page(3);
        view.set_category_filter("Супы");
        assert_eq!(view.current_page(), 1);

        view.set_page(2);
        view.set_name_filter("борщ");
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_select_visible_is_page_scoped() {
        let mut view = sample_view();
        view.set_page_size(2);
        view.select_visible();
        assert_eq!(view.selected_count(), 2);
        assert!(view.is_selected("m1"));
        assert!(view.is_selected("m2"));
        assert!(!view.is_selected("m3"));
    }

    #[test]
    fn test_selection_cleared_on_filter_and_page_change() {
        let mut view = sample_view();
        view.toggle_selected("m1");
        view.set_page(2);
        assert_eq!(view.selected_count(), 0);

        view.set_page(1);
        view.toggle_selected("m1");
        view.set_category_filter("Супы");
        assert_eq!(view.selected_count(), 0);
    }

    #[test]
    fn test_toggle_selection() {
        let mut view = sample_view();
        view.toggle_selected("m1");
        assert!(view.is_selected("m1"));
        view.toggle_selected("m1");
        assert!(!view.is_selected("m1"));
    }
}
