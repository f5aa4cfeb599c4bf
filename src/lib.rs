use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::iter::FromIterator;
use std::path::Path;
use tracing::warn;
pub mod cli;
pub mod display;
pub mod error;
pub mod figure;
pub mod render;

pub use error::StatsError;

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

pub const DEFAULT_STATS_FILE: &str = "stats.csv";

pub const COL_GENERATION: &str = "generation";
pub const COL_ENTROPY: &str = "entropy";
pub const COL_LIVE_CELLS: &str = "live_cells";
pub const REQUIRED_COLUMNS: [&str; 3] = [COL_GENERATION, COL_ENTROPY, COL_LIVE_CELLS];

/// cell values read as missing, as the default na values of pandas
pub const NULL_TOKENS: [&str; 17] = [
    "NA", "N/A", "n/a", "NULL", "null", "None", "NaN", "nan", "-NaN", "-nan", "<NA>", "#N/A",
    "#N/A N/A", "1.#IND", "-1.#IND", "1.#QNAN", "-1.#QNAN",
];

/// One row of the statistics csv, extra columns are ignored.
/// Empty, null-token or absent trailing numeric cells deserialize to None.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StatsRecord {
    pub generation: i64,
    #[serde(default, deserialize_with = "read_nullable")]
    pub entropy: Option<f64>,
    #[serde(default, deserialize_with = "read_nullable")]
    pub live_cells: Option<f64>,
}

fn read_nullable<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let cell = String::deserialize(deserializer)?;
    let cell = cell.trim();
    if cell.is_empty() || NULL_TOKENS.contains(&cell) {
        return Ok(None);
    }
    cell.parse::<f64>()
        .map(Some)
        .map_err(|e| serde::de::Error::custom(format!("invalid number {:?}: {}", cell, e)))
}

/// The main struct for the per-generation statistics,
/// kept as columns in file order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatsTable {
    generation: Vec<i64>,
    entropy: Vec<f64>,
    live_cells: Vec<f64>,
}

impl StatsTable {
    fn with_capacity(capacity: usize) -> StatsTable {
        StatsTable {
            generation: Vec::with_capacity(capacity),
            entropy: Vec::with_capacity(capacity),
            live_cells: Vec::with_capacity(capacity),
        }
    }

    /// Init a StatsTable from csv.
    /// Missing entropy or live cell values are stored as NAN,
    /// any other parsing problem is a format error.
    /// Order and continuity of the generations are not checked.
    pub fn from_csv<P: AsRef<Path>>(fin: P) -> Result<StatsTable, StatsError> {
        let path = fin.as_ref();
        let file = File::open(path).map_err(|source| StatsError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let table = StatsTable::from_reader(file, path)?;
        let missing = table.count_missing();
        if missing > 0 {
            warn!(
                "{} missing or non-finite values in {}, plotted as gaps",
                missing,
                path.display()
            );
        }
        Ok(table)
    }

    /// Reads the table from any reader; `origin` only names the source in errors.
    pub fn from_reader<R: Read>(rdr: R, origin: &Path) -> Result<StatsTable, StatsError> {
        // short rows leave the trailing cells missing
        let mut csv_rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(rdr);

        let headers = csv_rdr
            .headers()
            .map_err(|e| StatsError::from_csv_error(e, origin))?;
        let missing_cols: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();
        if !missing_cols.is_empty() {
            return Err(StatsError::Format {
                path: origin.to_path_buf(),
                message: format!("missing required column(s): {}", missing_cols.join(", ")),
            });
        }

        let mut table = StatsTable::with_capacity(1000);
        for result in csv_rdr.deserialize::<StatsRecord>() {
            let record = result.map_err(|e| StatsError::from_csv_error(e, origin))?;
            table.push(record);
        }
        Ok(table)
    }

    fn push(&mut self, record: StatsRecord) {
        self.generation.push(record.generation);
        self.entropy.push(record.entropy.unwrap_or(f64::NAN));
        self.live_cells.push(record.live_cells.unwrap_or(f64::NAN));
    }

    pub fn len(&self) -> usize {
        self.generation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generation.is_empty()
    }

    pub fn generation(&self) -> &[i64] {
        &self.generation
    }

    pub fn entropy(&self) -> &[f64] {
        &self.entropy
    }

    pub fn live_cells(&self) -> &[f64] {
        &self.live_cells
    }

    /// number of non-finite entropy and live cell values
    pub fn count_missing(&self) -> usize {
        self.entropy
            .iter()
            .chain(self.live_cells.iter())
            .filter(|v| !v.is_finite())
            .count()
    }
}

impl FromIterator<StatsRecord> for StatsTable {
    fn from_iter<I: IntoIterator<Item = StatsRecord>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut table = StatsTable::with_capacity(iter.size_hint().0);
        for record in iter {
            table.push(record);
        }
        table
    }
}

impl std::fmt::Display for StatsTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{},{},{}", COL_GENERATION, COL_ENTROPY, COL_LIVE_CELLS)?;
        for ((g, e), l) in self
            .generation
            .iter()
            .zip(self.entropy.iter())
            .zip(self.live_cells.iter())
        {
            writeln!(f, "{},{},{}", g, e, l)?
        }
        Ok(())
    }
}

/// min and max of the values, None for an empty iterator.
/// Filter out NAN before calling, it never compares.
pub fn min_and_max<T, I>(values: I) -> Option<(T, T)>
where
    T: PartialOrd + Copy,
    I: IntoIterator<Item = T>,
{
    let mut iter = values.into_iter();
    let first = iter.next()?;
    let (mut min, mut max) = (first, first);
    for v in iter {
        if v > max {
            max = v
        }
        if v < min {
            min = v
        }
    }
    Some((min, max))
}
