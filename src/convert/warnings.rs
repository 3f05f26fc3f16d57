//! Non-fatal warnings collected during conversion.
//!
//! Logical failures never abort a run or change the output text; the
//! converter degrades as documented and records what happened here, for a
//! summary on stderr after the run.

/// Warning types that can occur during conversion
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertWarning {
    /// COPY block whose table has no CREATE TABLE in the dump; the block is
    /// dropped from the output entirely.
    DroppedCopyBlock { table: String },
    /// Data row with more or fewer tab-separated values than the table has
    /// columns; the INSERT names only the leading columns.
    RowWidthMismatch {
        table: String,
        columns: usize,
        values: usize,
    },
}

impl std::fmt::Display for ConvertWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertWarning::DroppedCopyBlock { table } => {
                write!(
                    f,
                    "COPY block for table '{}' dropped: no CREATE TABLE found in dump",
                    table
                )
            }
            ConvertWarning::RowWidthMismatch {
                table,
                columns,
                values,
            } => {
                write!(
                    f,
                    "row in table '{}' has {} values for {} columns",
                    table, values, columns
                )
            }
        }
    }
}

/// Collects warnings during conversion
#[derive(Debug, Default)]
pub struct WarningCollector {
    warnings: Vec<ConvertWarning>,
    max_warnings: usize,
}

impl WarningCollector {
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
            max_warnings: 100, // Limit to avoid memory issues
        }
    }

    /// Add a warning, deduplicating repeats of the same event.
    pub fn add(&mut self, warning: ConvertWarning) {
        if self.warnings.len() < self.max_warnings && !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    pub fn warnings(&self) -> &[ConvertWarning] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn count(&self) -> usize {
        self.warnings.len()
    }

    pub fn into_warnings(self) -> Vec<ConvertWarning> {
        self.warnings
    }
}
