//! In-memory list of expenses and their running total.
//!
//! The ledger keeps records in insertion order. The total is never stored:
//! [`Ledger::total`] sums the current amounts, so it cannot disagree with the
//! records.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Category, EngineError, MoneyCents, ResultEngine};

/// Identity of a record inside a ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Form data for a new expense, as handed back by the add-expense screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: MoneyCents,
    pub category: String,
    pub date: String,
}

impl NewExpense {
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        amount: MoneyCents,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            date: date.into(),
        }
    }
}

/// A stored expense. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExpenseRecord {
    id: ExpenseId,
    description: String,
    amount: MoneyCents,
    category: String,
    date: String,
}

impl ExpenseRecord {
    #[must_use]
    pub fn id(&self) -> ExpenseId {
        self.id
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn amount(&self) -> MoneyCents {
        self.amount
    }

    /// Category text exactly as entered.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn category_tag(&self) -> Category {
        Category::parse(&self.category)
    }

    /// Date text exactly as entered; never parsed.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }
}

#[derive(Clone, Debug, Default)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. No field is validated and a negative amount lowers
    /// the total.
    pub fn add(&mut self, expense: NewExpense) -> &ExpenseRecord {
        let NewExpense {
            description,
            amount,
            category,
            date,
        } = expense;
        let record = ExpenseRecord {
            id: ExpenseId::new(),
            description,
            amount,
            category,
            date,
        };
        tracing::debug!(id = %record.id, amount = %record.amount, "expense added");
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Removes the record with `id` and returns it.
    ///
    /// An unknown id leaves the ledger untouched.
    pub fn remove(&mut self, id: ExpenseId) -> ResultEngine<ExpenseRecord> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))?;
        let record = self.records.remove(index);
        tracing::debug!(id = %record.id, amount = %record.amount, "expense removed");
        Ok(record)
    }

    /// Empties the ledger and returns how many records were dropped.
    pub fn remove_all(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        tracing::debug!(removed, "ledger cleared");
        removed
    }

    /// Sum of the amounts currently in the ledger.
    ///
    /// Fails with [`EngineError::InvalidAmount`] when the sum does not fit in
    /// `i64` cents. The records are left as they are.
    pub fn total(&self) -> ResultEngine<MoneyCents> {
        MoneyCents::checked_sum(self.records.iter().map(ExpenseRecord::amount))
            .ok_or_else(|| EngineError::InvalidAmount("amount too large".to_string()))
    }

    #[must_use]
    pub fn get(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    #[must_use]
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a ExpenseRecord;
    type IntoIter = std::slice::Iter<'a, ExpenseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn expense(amount: i64) -> NewExpense {
        NewExpense::new("item", MoneyCents::new(amount), "Food", "2024-01-01")
    }

    #[test]
    fn add_keeps_fields_verbatim() {
        let mut ledger = Ledger::new();
        let record = ledger
            .add(NewExpense::new(
                "Lunch",
                MoneyCents::new(1250),
                "FOOD",
                "not a date",
            ))
            .clone();

        assert_eq!(record.description(), "Lunch");
        assert_eq!(record.category(), "FOOD");
        assert_eq!(record.category_tag(), Category::Food);
        assert_eq!(record.date(), "not a date");
        assert_eq!(ledger.get(record.id()), Some(&record));
    }

    #[test]
    fn records_keep_insertion_order() {
        let mut ledger = Ledger::new();
        let ids: Vec<_> = (1..=4).map(|n| ledger.add(expense(n)).id()).collect();
        let listed: Vec<_> = ledger.iter().map(ExpenseRecord::id).collect();
        assert_eq!(ids, listed);
    }

    #[test]
    fn negative_amount_lowers_total() {
        let mut ledger = Ledger::new();
        ledger.add(expense(1000));
        ledger.add(expense(-250));
        assert_eq!(ledger.total(), Ok(MoneyCents::new(750)));
    }

    #[test]
    fn total_out_of_range_is_an_error() {
        let mut ledger = Ledger::new();
        let huge: MoneyCents = "92233720368547758.07".parse().unwrap();
        ledger.add(NewExpense::new("huge", huge, "Other", ""));
        let small = ledger.add(expense(1)).id();

        assert!(matches!(
            ledger.total(),
            Err(EngineError::InvalidAmount(_))
        ));
        assert_eq!(ledger.len(), 2);

        ledger.remove(small).unwrap();
        assert_eq!(ledger.total(), Ok(huge));
        ledger.add(expense(-5));
        ledger.add(expense(3));
        assert_eq!(ledger.total(), Ok(MoneyCents::new(i64::MAX - 2)));
    }

    #[test]
    fn remove_unknown_id_is_not_found() {
        let mut ledger = Ledger::new();
        ledger.add(expense(100));

        let mut other = Ledger::new();
        let foreign = other.add(expense(100)).id();

        let err = ledger.remove(foreign).unwrap_err();
        assert_eq!(err, EngineError::KeyNotFound(foreign.to_string()));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total(), Ok(MoneyCents::new(100)));
    }

    #[test]
    fn remove_twice_fails_the_second_time() {
        let mut ledger = Ledger::new();
        let id = ledger.add(expense(100)).id();
        assert!(ledger.remove(id).is_ok());
        assert!(matches!(
            ledger.remove(id),
            Err(EngineError::KeyNotFound(_))
        ));
    }

    #[derive(Clone, Debug)]
    enum Op {
        Add(i64),
        Remove(usize),
        RemoveAll,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => (-1_000_000i64..1_000_000i64).prop_map(Op::Add),
            3 => any::<usize>().prop_map(Op::Remove),
            1 => Just(Op::RemoveAll),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: whatever the sequence of operations, the total is the sum
        /// of the amounts still present, and zero right after `remove_all`.
        #[test]
        fn total_tracks_present_records(ops in prop::collection::vec(op(), 0..64)) {
            let mut ledger = Ledger::new();
            let mut model: Vec<(ExpenseId, i64)> = Vec::new();

            for op in ops {
                match op {
                    Op::Add(cents) => {
                        let id = ledger.add(expense(cents)).id();
                        model.push((id, cents));
                    }
                    Op::Remove(pick) => {
                        if model.is_empty() {
                            continue;
                        }
                        let (id, cents) = model.remove(pick % model.len());
                        let removed = ledger.remove(id).unwrap();
                        prop_assert_eq!(removed.amount().cents(), cents);
                    }
                    Op::RemoveAll => {
                        let removed = ledger.remove_all();
                        prop_assert_eq!(removed, model.len());
                        model.clear();
                        prop_assert_eq!(ledger.total(), Ok(MoneyCents::ZERO));
                    }
                }

                let expected: i64 = model.iter().map(|(_, cents)| cents).sum();
                prop_assert_eq!(ledger.total().map(MoneyCents::cents), Ok(expected));
                prop_assert_eq!(ledger.len(), model.len());
            }
        }
    }
}
