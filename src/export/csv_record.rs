//! CSV export of a calculation.
//!
//! A calculation is exported as two rows, a header and a value row, separated by
//! `;` so that decimal commas in spreadsheet locales never collide with the
//! delimiter. Values are raw numbers without locale formatting.

use std::io;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationInput, CalculationOutput};

/// Field delimiter used by the export.
pub const CSV_DELIMITER: u8 = b';';

/// Suggested file name for a downloaded export.
pub const EXPORT_FILE_NAME: &str = "vacation-calculator.csv";

/// Number of month columns in the export, regardless of the period length.
pub const EXPORTED_MONTHS: usize = 12;

/// One exported calculation, every field already rendered as text.
///
/// Month columns past the period length are blank. Periods longer than
/// [`EXPORTED_MONTHS`] export their oldest twelve months.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    /// Vacation start date, ISO format or blank.
    pub start_date: String,
    /// Vacation end date, ISO format or blank.
    pub end_date: String,
    /// Reference period length in months.
    pub period_months: String,
    /// Bonuses over the period.
    pub bonuses: String,
    /// Monthly incomes, oldest first.
    pub months: [String; EXPORTED_MONTHS],
    /// Payable days.
    pub paid_days: String,
    /// Total income.
    pub total_income: String,
    /// Average monthly income.
    pub avg_monthly: String,
    /// Average daily income.
    pub avg_daily: String,
    /// Vacation pay.
    pub vacation_pay: String,
}

impl ExportRecord {
    /// Renders an input snapshot and its output.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_pay::export::ExportRecord;
    /// use vacation_pay::models::{CalculationInput, CalculationOutput};
    /// use rust_decimal::Decimal;
    ///
    /// let mut input = CalculationInput::default();
    /// input.resize_months(2);
    /// input.monthly_incomes = vec![Decimal::new(100, 0), Decimal::new(250, 1)];
    ///
    /// let record = ExportRecord::build(&input, &CalculationOutput::default());
    /// assert_eq!(record.months[0], "100");
    /// assert_eq!(record.months[1], "25");
    /// assert_eq!(record.months[2], "");
    /// assert_eq!(record.start_date, "");
    /// ```
    pub fn build(input: &CalculationInput, output: &CalculationOutput) -> Self {
        let exported = (input.months_count as usize).min(EXPORTED_MONTHS);
        let months = std::array::from_fn(|i| {
            if i < exported {
                input
                    .monthly_incomes
                    .get(i)
                    .map(|v| v.normalize().to_string())
                    .unwrap_or_else(|| "0".to_string())
            } else {
                String::new()
            }
        });

        Self {
            start_date: input.start_date.map(|d| d.to_string()).unwrap_or_default(),
            end_date: input.end_date.map(|d| d.to_string()).unwrap_or_default(),
            period_months: input.months_count.to_string(),
            bonuses: input.bonuses.normalize().to_string(),
            months,
            paid_days: output.paid_days.to_string(),
            total_income: output.total_income.normalize().to_string(),
            avg_monthly: output.avg_monthly.normalize().to_string(),
            avg_daily: output.avg_daily.normalize().to_string(),
            vacation_pay: output.vacation_pay.normalize().to_string(),
        }
    }

    /// Column names, in export order.
    pub fn header() -> Vec<String> {
        let mut header = vec![
            "start_date".to_string(),
            "end_date".to_string(),
            "period_months".to_string(),
            "bonuses".to_string(),
        ];
        header.extend((1..=EXPORTED_MONTHS).map(|i| format!("month_{}", i)));
        header.extend(
            ["paid_days", "total_income", "avg_monthly", "avg_daily", "vacation_pay"]
                .map(String::from),
        );
        header
    }

    /// Field values, in export order.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.start_date.as_str(),
            self.end_date.as_str(),
            self.period_months.as_str(),
            self.bonuses.as_str(),
        ];
        fields.extend(self.months.iter().map(String::as_str));
        fields.extend([
            self.paid_days.as_str(),
            self.total_income.as_str(),
            self.avg_monthly.as_str(),
            self.avg_daily.as_str(),
            self.vacation_pay.as_str(),
        ]);
        fields
    }
}

fn writer_builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .delimiter(CSV_DELIMITER)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'));
    builder
}

/// Writes the header and value rows of a record.
pub fn write_csv<W: io::Write>(writer: W, record: &ExportRecord) -> EngineResult<()> {
    let mut wtr = writer_builder().from_writer(writer);
    wtr.write_record(ExportRecord::header())?;
    wtr.write_record(record.fields())?;
    wtr.flush().map_err(|e| EngineError::ExportError {
        message: format!("Failed to flush CSV export: {}", e),
    })
}

/// Renders the header and value rows of a record as a string.
///
/// # Example
///
/// ```
/// use vacation_pay::export::{ExportRecord, to_csv_string};
/// use vacation_pay::models::{CalculationInput, CalculationOutput};
///
/// let record = ExportRecord::build(&CalculationInput::default(), &CalculationOutput::default());
/// let csv = to_csv_string(&record).unwrap();
/// assert!(csv.starts_with("start_date;end_date;period_months;bonuses;month_1;"));
/// assert_eq!(csv.lines().count(), 2);
/// ```
pub fn to_csv_string(record: &ExportRecord) -> EngineResult<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, record)?;
    into_utf8(buffer)
}

/// Renders a single row with the export's delimiter and quoting rules.
///
/// Fields containing the delimiter, a quote or a line break are wrapped in quotes
/// with inner quotes doubled. No line terminator is appended.
///
/// # Example
///
/// ```
/// use vacation_pay::export::to_csv_row;
///
/// let row = to_csv_row(["plain", "a;b", "say \"hi\""]).unwrap();
/// assert_eq!(row, "plain;\"a;b\";\"say \"\"hi\"\"\"");
/// ```
pub fn to_csv_row<I, S>(fields: I) -> EngineResult<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut buffer = Vec::new();
    {
        let mut wtr = writer_builder().from_writer(&mut buffer);
        wtr.write_record(fields)?;
        wtr.flush().map_err(|e| EngineError::ExportError {
            message: format!("Failed to flush CSV row: {}", e),
        })?;
    }
    let mut row = into_utf8(buffer)?;
    if row.ends_with('\n') {
        row.pop();
    }
    Ok(row)
}

fn into_utf8(buffer: Vec<u8>) -> EngineResult<String> {
    String::from_utf8(buffer).map_err(|e| EngineError::ExportError {
        message: format!("CSV export is not valid UTF-8: {}", e),
    })
}
