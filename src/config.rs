pub mod config {
    use std::path::PathBuf;

    use chrono::NaiveDate;
    use clap::Parser;

    use crate::constants::constants::{
        DEFAULT_EXCLUDE_KEYWORDS, ENV_EXCLUDE, ENV_FORMAT, ENV_INSTITUTIONS, ENV_OUT_DIR,
    };
    use crate::dates::dates::{Clock, FixedClock, SystemClock};
    use crate::events::events::SearchScope;
    use crate::export::export::Format;

    /// Filter saved search API responses down to upcoming student events.
    #[derive(Parser, Debug)]
    #[command(name = "event-scout", version)]
    pub struct Cli {
        /// Search API responses (JSON with an "organic" array).
        #[arg(required = true)]
        pub responses: Vec<PathBuf>,

        /// Institution web site to favour (repeatable).
        #[arg(long = "institution", env = ENV_INSTITUTIONS, value_delimiter = ',')]
        pub institutions: Vec<String>,

        /// Keep only results hosted on a registered institution.
        #[arg(long)]
        pub institutions_only: bool,

        /// Keywords that drop a result (defaults to hospitality/culinary terms).
        #[arg(long, env = ENV_EXCLUDE, value_delimiter = ',')]
        pub exclude: Vec<String>,

        #[arg(long, value_enum, env = ENV_FORMAT, default_value_t = Format::Csv)]
        pub format: Format,

        /// Write the export into this directory instead of stdout.
        #[arg(long, env = ENV_OUT_DIR)]
        pub out_dir: Option<PathBuf>,

        /// Pretend today is this date (YYYY-MM-DD).
        #[arg(long, value_parser = parse_day)]
        pub today: Option<NaiveDate>,

        /// Log every result before filtering.
        #[arg(long)]
        pub debug: bool,
    }

    fn parse_day(s: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
    }

    impl Cli {
        pub fn scope(&self) -> SearchScope {
            if self.institutions_only {
                SearchScope::InstitutionsOnly
            } else {
                SearchScope::Web
            }
        }

        pub fn exclude_keywords(&self) -> Vec<String> {
            if self.exclude.is_empty() {
                DEFAULT_EXCLUDE_KEYWORDS.iter().map(|k| k.to_string()).collect()
            } else {
                self.exclude.clone()
            }
        }

        pub fn clock(&self) -> Box<dyn Clock> {
            match self.today {
                Some(date) => Box::new(FixedClock(date)),
                None => Box::new(SystemClock),
            }
        }
    }

}
