pub mod export {
    use chrono::NaiveDate;
    use clap::ValueEnum;

    use crate::constants::constants::{COLUMNS, EXPORT_DATE_FORMAT, EXPORT_PREFIX};
    use crate::errors::errors::AppError;
    use crate::events::events::EventRow;

    const BOM: &str = "\u{feff}";

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    pub enum Format {
        /// Comma-separated, with a UTF-8 byte order mark for spreadsheets.
        Csv,
        /// Tab-separated, for pasting into Excel.
        Tsv,
        Json,
    }

    impl Format {
        fn extension(self) -> &'static str {
            match self {
                Format::Csv => "csv",
                Format::Tsv => "txt",
                Format::Json => "json",
            }
        }
    }

    pub fn file_name(format: Format, today: NaiveDate) -> String {
        format!(
            "{}-{}.{}",
            EXPORT_PREFIX,
            today.format(EXPORT_DATE_FORMAT),
            format.extension()
        )
    }

    fn quote(field: &str, separator: char) -> String {
        if field.contains(|c: char| c == separator || c == '"' || c == '\n' || c == '\r') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn delimited(rows: &[EventRow], separator: char) -> String {
        let sep = separator.to_string();
        let join = |fields: [&str; 4]| {
            fields
                .iter()
                .map(|field| quote(field, separator))
                .collect::<Vec<_>>()
                .join(sep.as_str())
        };

        let mut out = join(COLUMNS);
        out.push('\n');
        for row in rows {
            out.push_str(&join([
                row.date.as_str(),
                row.event.as_str(),
                row.description.as_str(),
                row.link.as_str(),
            ]));
            out.push('\n');
        }
        out
    }

    pub fn render(rows: &[EventRow], format: Format) -> Result<String, AppError> {
        Ok(match format {
            Format::Csv => format!("{}{}", BOM, delimited(rows, ',')),
            Format::Tsv => delimited(rows, '\t'),
            Format::Json => serde_json::to_string_pretty(rows)?,
        })
    }

}
