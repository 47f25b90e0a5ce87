//! Holiday sources.
//!
//! A source yields raw `YYYY-MM-DD` strings; validation happens when the
//! provider turns them into a [`wt_time::HolidaySet`]. Transports other than
//! a local file (an HTTP endpoint, a database) plug in by implementing
//! [`HolidaySource`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use wt_core::{Error, Result};
use wt_time::holiday_key;

use crate::colombia;

/// Something that can produce a list of holiday date strings.
pub trait HolidaySource: std::fmt::Debug + Send + Sync {
    /// Human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Fetch the list. Failures map to [`Error::UpstreamUnavailable`].
    fn fetch(&self) -> Result<Vec<String>>;
}

/// A JSON file holding an array of date strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    /// Read holidays from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("file:{}", path.display());
        Self { path, name }
    }

    /// The file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HolidaySource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<Vec<String>> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            Error::UpstreamUnavailable(format!("cannot read {}: {e}", self.path.display()))
        })?;
        let dates: Vec<String> = serde_json::from_str(&raw).map_err(|e| {
            Error::UpstreamUnavailable(format!(
                "{} is not a JSON string array: {e}",
                self.path.display()
            ))
        })?;
        debug!(source = %self.name, count = dates.len(), "read holiday file");
        Ok(dates)
    }
}

/// An in-memory list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSource {
    dates: Vec<String>,
}

impl StaticSource {
    /// Serve `dates` as-is.
    pub fn new<I, S>(dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dates: dates.into_iter().map(Into::into).collect(),
        }
    }

    /// The rule-based Colombian holidays for `from..=to`.
    pub fn colombia(from: i32, to: i32) -> Self {
        Self {
            dates: (from..=to)
                .flat_map(colombia::holidays)
                .map(holiday_key)
                .collect(),
        }
    }
}

impl HolidaySource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(&self) -> Result<Vec<String>> {
        Ok(self.dates.clone())
    }
}
