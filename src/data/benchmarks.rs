//! Per-rank benchmark averages.

use std::collections::BTreeSet;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::DataError;
use crate::models::{Rank, Stat};

/// Built-in per-game averages, one row per rank in `Rank::ALL` order,
/// columns in `Stat::ALL` order.
const BUILTIN: [[f64; 10]; 8] = [
    // score goals assists saves shots shoot% boost speed ssonic low-boost
    [250.0, 0.8, 0.4, 1.2, 2.5, 25.0, 45.0, 800.0, 15.0, 30.0],
    [350.0, 1.0, 0.6, 1.5, 3.5, 28.0, 50.0, 950.0, 20.0, 25.0],
    [450.0, 1.2, 0.8, 1.8, 4.5, 32.0, 55.0, 1100.0, 25.0, 20.0],
    [550.0, 1.4, 1.0, 2.0, 5.5, 35.0, 60.0, 1200.0, 30.0, 15.0],
    [650.0, 1.6, 1.2, 2.3, 6.5, 38.0, 65.0, 1300.0, 35.0, 12.0],
    [750.0, 1.8, 1.4, 2.5, 7.5, 42.0, 70.0, 1400.0, 40.0, 10.0],
    [850.0, 2.0, 1.6, 2.8, 8.5, 45.0, 75.0, 1500.0, 45.0, 8.0],
    [950.0, 2.2, 1.8, 3.0, 9.5, 48.0, 80.0, 1600.0, 50.0, 5.0],
];

/// Benchmarks for a single rank, in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct StatLine(Vec<(Stat, f64)>);

impl StatLine {
    pub fn get(&self, stat: Stat) -> Option<f64> {
        self.0.iter().find(|(s, _)| *s == stat).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        self.0.iter().copied()
    }

    pub fn stats(&self) -> impl Iterator<Item = Stat> + '_ {
        self.0.iter().map(|(s, _)| *s)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for StatLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (stat, value) in &self.0 {
            map.serialize_entry(stat, value)?;
        }
        map.end()
    }
}

/// Rank → stat → benchmark value, ordered by rank progression.
///
/// Every rank carries the same stat set; [`BenchmarkTable::from_rows`]
/// refuses anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkTable {
    rows: Vec<(Rank, StatLine)>,
}

impl BenchmarkTable {
    /// The shipped benchmark table covering every rank.
    pub fn builtin() -> Self {
        let rows = Rank::ALL
            .iter()
            .zip(BUILTIN.iter())
            .map(|(rank, values)| {
                let line = Stat::ALL.iter().copied().zip(values.iter().copied()).collect();
                (*rank, StatLine(line))
            })
            .collect();
        Self { rows }
    }

    /// Build a table from explicit rows. Rows are reordered by rank
    /// progression; stat order within a row is kept.
    pub fn from_rows(rows: Vec<(Rank, Vec<(Stat, f64)>)>) -> Result<Self, DataError> {
        if rows.is_empty() {
            return Err(DataError::EmptyTable);
        }

        let mut seen = BTreeSet::new();
        for (rank, line) in &rows {
            if !seen.insert(*rank) {
                return Err(DataError::DuplicateRank(*rank));
            }
            let unique: BTreeSet<Stat> = line.iter().map(|(s, _)| *s).collect();
            if unique.len() != line.len() {
                return Err(DataError::DuplicateStat(*rank));
            }
        }

        let mut rows: Vec<(Rank, StatLine)> = rows
            .into_iter()
            .map(|(rank, line)| (rank, StatLine(line)))
            .collect();
        rows.sort_by_key(|(rank, _)| *rank);

        let expected: BTreeSet<Stat> = rows[0].1.stats().collect();
        for (rank, line) in &rows[1..] {
            let found: BTreeSet<Stat> = line.stats().collect();
            if found != expected {
                return Err(DataError::InconsistentStats(*rank));
            }
        }

        Ok(Self { rows })
    }

    pub fn for_rank(&self, rank: Rank) -> Option<&StatLine> {
        self.rows.iter().find(|(r, _)| *r == rank).map(|(_, line)| line)
    }

    pub fn contains(&self, rank: Rank) -> bool {
        self.for_rank(rank).is_some()
    }

    /// Ranks present in the table, lowest first.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.rows.iter().map(|(r, _)| *r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rank, &StatLine)> + '_ {
        self.rows.iter().map(|(r, line)| (*r, line))
    }

    /// Benchmark for one rank and stat, 0 when either is absent.
    pub fn get_benchmark(&self, rank: Rank, stat: Stat) -> f64 {
        self.for_rank(rank).and_then(|l| l.get(stat)).unwrap_or(0.0)
    }

    /// The rank after `current` in this table, capped at the top.
    /// An unknown or missing `current` counts as the lowest rank.
    pub fn next_rank(&self, current: Option<Rank>) -> Rank {
        let idx = current
            .and_then(|c| self.rows.iter().position(|(r, _)| *r == c))
            .unwrap_or(0);
        let next = (idx + 1).min(self.rows.len() - 1);
        self.rows[next].0
    }
}

impl Serialize for BenchmarkTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (rank, line) in &self.rows {
            map.serialize_entry(rank, line)?;
        }
        map.end()
    }
}
