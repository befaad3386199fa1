use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result as AnyhowResult};

pub const REPORT_COLUMNS: [&str; 5] = ["Number", "Input string", "Given Name", "Score", "ID"];

/// The two lookup strategies a batch report carries per query. `Mongo` is
/// the historical label of the direct catalog search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    Direct,
    Fuzzy,
}

impl MatchStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            MatchStrategy::Direct => "Mongo",
            MatchStrategy::Fuzzy => "Fuzzy",
        }
    }
}

/// Payload of one report row. A query with no hit writes the default:
/// empty name, empty id, zero score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportRow {
    pub given_name: String,
    pub score: f32,
    pub id: String,
}

/// CSV report with the fixed five-column layout. Rows are only ever written
/// in pairs, so the two-rows-per-query shape holds by construction.
pub struct CsvReport {
    writer: BufWriter<File>,
    pairs: usize,
}

impl CsvReport {
    pub fn create(path: &Path) -> AnyhowResult<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create report at {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", REPORT_COLUMNS.join(","))?;
        Ok(Self { writer, pairs: 0 })
    }

    /// Appends the direct and fuzzy rows of one query, in that order, both
    /// tagged with the same base sequence number.
    pub fn write_pair(
        &mut self,
        sequence: usize,
        input: &str,
        direct: &ReportRow,
        fuzzy: &ReportRow,
    ) -> AnyhowResult<()> {
        self.write_row(sequence, MatchStrategy::Direct, input, direct)?;
        self.write_row(sequence, MatchStrategy::Fuzzy, input, fuzzy)?;
        self.pairs += 1;
        Ok(())
    }

    fn write_row(
        &mut self,
        sequence: usize,
        strategy: MatchStrategy,
        input: &str,
        row: &ReportRow,
    ) -> AnyhowResult<()> {
        let number = format!("{}.{}", sequence, strategy.label());
        let fields = [
            escape_field(&number),
            escape_field(input),
            escape_field(&row.given_name),
            escape_field(&format!("{:.2}", row.score)),
            escape_field(&row.id),
        ];
        writeln!(self.writer, "{}", fields.join(","))?;
        Ok(())
    }

    /// Flushes the report and returns how many query pairs were written.
    pub fn finish(mut self) -> AnyhowResult<usize> {
        self.writer.flush().context("Failed to flush report")?;
        Ok(self.pairs)
    }
}

pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Splits one CSV line back into fields, honoring quoted fields and doubled
/// quotes. The table renderer reads reports back through this.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Default report path: fixed prefix plus a timestamp, like the original
/// batch runs produced.
pub fn default_report_path(prefix: &str) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("{}_{}.csv", prefix, timestamp))
}
