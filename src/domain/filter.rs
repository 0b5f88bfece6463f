//! Example query descriptor.
//!
//! A filter restricts a read (id, substring matches), optionally orders
//! it by a single column and optionally paginates it.

use serde::Deserialize;

use crate::config::{ORDER_BY_EMAIL, ORDER_BY_FIRST_NAME, ORDER_BY_SURNAME, SORT_ASCENDING};

/// Query descriptor for example reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExampleFilter {
    /// Exact id match, `0` (or any non-positive value) means unset
    pub id: i64,
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    /// One of `firstname`, `surname`, `email` (case-insensitive)
    pub order_by: Option<String>,
    /// `asc` sorts ascending, anything else descending
    pub sort_by: Option<String>,
    /// 1-based page number, `<= 0` means no pagination
    pub current_page: i64,
    pub page_size: i64,
}

/// Text column of an example that can be searched or ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleField {
    FirstName,
    Surname,
    Email,
}

/// Ordering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Resolved single-key ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleSort {
    pub field: ExampleField,
    pub direction: SortDirection,
}

impl ExampleField {
    /// Match an `order_by` value, in `firstname`, `surname`, `email` priority.
    pub fn parse(order_by: &str) -> Option<Self> {
        let order_by = order_by.to_lowercase();
        [
            (ORDER_BY_FIRST_NAME, ExampleField::FirstName),
            (ORDER_BY_SURNAME, ExampleField::Surname),
            (ORDER_BY_EMAIL, ExampleField::Email),
        ]
        .into_iter()
        .find(|(name, _)| *name == order_by)
        .map(|(_, field)| field)
    }
}

impl SortDirection {
    /// Anything other than `asc` (case-insensitive), including absence, is descending.
    pub fn parse(sort_by: Option<&str>) -> Self {
        match sort_by {
            Some(value) if value.eq_ignore_ascii_case(SORT_ASCENDING) => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}

impl ExampleFilter {
    /// Filter matching a single id
    pub fn by_id(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Resolved ordering, `None` when `order_by` is absent or unrecognized
    pub fn sort(&self) -> Option<ExampleSort> {
        let field = ExampleField::parse(self.order_by.as_deref()?)?;
        Some(ExampleSort {
            field,
            direction: SortDirection::parse(self.sort_by.as_deref()),
        })
    }

    /// Whether a page slice was requested
    pub fn is_paginated(&self) -> bool {
        self.current_page > 0
    }

    /// Calculate offset for database query
    pub fn offset(&self) -> u64 {
        let skip = self.current_page.saturating_sub(1).saturating_mul(self.page_size);
        u64::try_from(skip).unwrap_or(0)
    }

    /// Number of records to take, non-positive page sizes take nothing
    pub fn limit(&self) -> u64 {
        u64::try_from(self.page_size).unwrap_or(0)
    }

    /// Non-blank text predicates, in first name, surname, email order
    pub fn text_terms(&self) -> [(ExampleField, Option<&str>); 3] {
        [
            (ExampleField::FirstName, non_blank(&self.first_name)),
            (ExampleField::Surname, non_blank(&self.surname)),
            (ExampleField::Email, non_blank(&self.email)),
        ]
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
