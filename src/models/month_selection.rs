//! Manual month selection model.
//!
//! A [`MonthSelection`] is the set of months (1 = January .. 12 = December)
//! the user marked as worked. Its cardinality overrides month inference.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The number of months in a calculation year.
pub const MONTHS_IN_YEAR: u32 = 12;

/// An ordered set of worked months, each in 1..=12.
///
/// # Example
///
/// ```
/// use decimo_engine::models::MonthSelection;
///
/// let mut selection = MonthSelection::first_n(3);
/// assert_eq!(selection.len(), 3);
///
/// selection.toggle(2).unwrap();
/// assert!(!selection.contains(2));
/// assert_eq!(selection.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct MonthSelection {
    months: BTreeSet<u32>,
}

impl MonthSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects months 1..=n, with n clamped to 12.
    pub fn first_n(n: u32) -> Self {
        Self {
            months: (1..=n.min(MONTHS_IN_YEAR)).collect(),
        }
    }

    /// Flips membership of `month`, returning whether it is now selected.
    pub fn toggle(&mut self, month: u32) -> EngineResult<bool> {
        Self::check_month(month)?;
        if self.months.remove(&month) {
            Ok(false)
        } else {
            self.months.insert(month);
            Ok(true)
        }
    }

    /// Removes every month from the selection.
    pub fn clear(&mut self) {
        self.months.clear();
    }

    /// Returns true if `month` is selected.
    pub fn contains(&self, month: u32) -> bool {
        self.months.contains(&month)
    }

    /// The number of selected months.
    pub fn len(&self) -> u32 {
        self.months.len() as u32
    }

    /// Returns true if no month is selected.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Iterates the selected months in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.months.iter().copied()
    }

    fn check_month(month: u32) -> EngineResult<()> {
        if (1..=MONTHS_IN_YEAR).contains(&month) {
            Ok(())
        } else {
            Err(EngineError::InvalidMonth { month })
        }
    }
}

impl TryFrom<Vec<u32>> for MonthSelection {
    type Error = EngineError;

    fn try_from(months: Vec<u32>) -> EngineResult<Self> {
        for &month in &months {
            Self::check_month(month)?;
        }
        Ok(Self {
            months: months.into_iter().collect(),
        })
    }
}

impl From<MonthSelection> for Vec<u32> {
    fn from(selection: MonthSelection) -> Self {
        selection.months.into_iter().collect()
    }
}
