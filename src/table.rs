//! Client-side list handling: every list view fetches its collection once,
//! then filters, sorts, and paginates it in memory.

use crate::models::account::Account;
use crate::session::Role;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    #[default]
    Any,
    /// Only accounts without a department.
    Unassigned,
    Id(Uuid),
}

#[derive(Debug, Clone, Default)]
pub struct AccountFilter {
    /// Case-insensitive substring match across name, username, email, phone.
    pub search: Option<String>,
    pub role: Option<Role>,
    pub department: DepartmentFilter,
}

impl AccountFilter {
    pub fn matches(&self, account: &Account) -> bool {
        if let Some(needle) = &self.search {
            let needle = needle.trim().to_lowercase();
            if !needle.is_empty() {
                let fields = [
                    account.first_name.as_str(),
                    account.last_name.as_str(),
                    account.username.as_str(),
                    account.email.as_str(),
                    account.phone.as_deref().unwrap_or(""),
                ];
                if !fields.iter().any(|f| f.to_lowercase().contains(&needle)) {
                    return false;
                }
            }
        }

        if let Some(role) = self.role {
            if !account.roles.contains(&role) {
                return false;
            }
        }

        match self.department {
            DepartmentFilter::Any => {}
            DepartmentFilter::Unassigned => {
                if account.department_id.is_some() {
                    return false;
                }
            }
            DepartmentFilter::Id(id) => {
                if account.department_id != Some(id) {
                    return false;
                }
            }
        }

        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

pub fn sort_rows<T, K: Ord>(rows: &mut [T], key: impl Fn(&T) -> K, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = key(a).cmp(&key(b));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self { page: 0, page_size }
    }

    pub fn page_count(&self, total: usize) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        (total.div_ceil(self.page_size)).max(1)
    }

    /// Slice of the current page; an out-of-range page index is clamped to
    /// the last page.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        if self.page_size == 0 {
            return rows;
        }
        let page = self.page.min(self.page_count(rows.len()) - 1);
        let start = (page * self.page_size).min(rows.len());
        let end = (start + self.page_size).min(rows.len());
        &rows[start..end]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountSortKey {
    CreatedAt,
    Name,
}

/// State behind the accounts list view: the fetched snapshot plus filter,
/// sort, and pagination. Filter changes reset the page index.
#[derive(Debug, Clone)]
pub struct AccountTable {
    rows: Vec<Account>,
    filter: AccountFilter,
    sort_key: AccountSortKey,
    direction: SortDirection,
    pagination: Pagination,
}

impl AccountTable {
    pub fn new(rows: Vec<Account>, page_size: usize) -> Self {
        Self {
            rows,
            filter: AccountFilter::default(),
            sort_key: AccountSortKey::CreatedAt,
            direction: SortDirection::Descending,
            pagination: Pagination::new(page_size),
        }
    }

    /// Replaces the snapshot after a refetch.
    pub fn set_rows(&mut self, rows: Vec<Account>) {
        self.rows = rows;
        self.pagination.page = 0;
    }

    pub fn set_filter(&mut self, filter: AccountFilter) {
        self.filter = filter;
        self.pagination.page = 0;
    }

    pub fn filter(&self) -> &AccountFilter {
        &self.filter
    }

    pub fn set_sort(&mut self, key: AccountSortKey, direction: SortDirection) {
        self.sort_key = key;
        self.direction = direction;
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggle();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.page = page;
    }

    pub fn page(&self) -> usize {
        self.pagination.page
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.filtered().len())
    }

    /// Filtered and sorted rows, before pagination.
    pub fn filtered(&self) -> Vec<&Account> {
        let mut rows: Vec<&Account> = self
            .rows
            .iter()
            .filter(|account| self.filter.matches(account))
            .collect();
        match self.sort_key {
            AccountSortKey::CreatedAt => sort_rows(&mut rows, |a| a.created_at, self.direction),
            AccountSortKey::Name => sort_rows(
                &mut rows,
                |a| (a.last_name.to_lowercase(), a.first_name.to_lowercase()),
                self.direction,
            ),
        }
        rows
    }

    /// The rows of the current page.
    pub fn visible(&self) -> Vec<&Account> {
        let filtered = self.filtered();
        self.pagination.slice(&filtered).to_vec()
    }
}
