use crate::errors::{AppError, AppResult};
use std::collections::BTreeSet;

pub const YEARS: [u8; 4] = [1, 2, 3, 4];

/// Set of selected academic years. Defaults to all four.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearFilter {
    years: BTreeSet<u8>,
}

impl Default for YearFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl YearFilter {
    pub fn all() -> Self {
        Self {
            years: YEARS.into_iter().collect(),
        }
    }

    pub fn none() -> Self {
        Self {
            years: BTreeSet::new(),
        }
    }

    /// Builds a filter from user input, rejecting values outside 1..=4.
    pub fn from_years(years: &[u8]) -> AppResult<Self> {
        let mut set = BTreeSet::new();
        for &y in years {
            if !YEARS.contains(&y) {
                return Err(AppError::InvalidYear(y as i64));
            }
            set.insert(y);
        }
        Ok(Self { years: set })
    }

    pub fn select_all(&mut self) {
        self.years = YEARS.into_iter().collect();
    }

    pub fn clear_all(&mut self) {
        self.years.clear();
    }

    pub fn contains(&self, year: u8) -> bool {
        self.years.contains(&year)
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn years(&self) -> impl Iterator<Item = u8> + '_ {
        self.years.iter().copied()
    }

    /// "1, 3" style label for status lines.
    pub fn describe(&self) -> String {
        if self.years.len() == YEARS.len() {
            return "all years".to_string();
        }
        if self.years.is_empty() {
            return "no years".to_string();
        }
        let list: Vec<String> = self.years.iter().map(|y| y.to_string()).collect();
        format!("year {}", list.join(", "))
    }
}
