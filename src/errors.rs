pub mod errors {
    use std::io;
    use std::path::PathBuf;

    use quick_error::quick_error;

    quick_error! {
        #[derive(Debug, PartialEq, Eq)]
        pub enum DateError {
            Unconfirmed {
                display("date is not confirmed yet")
            }
            Empty {
                display("empty date string")
            }
            Unrecognized(input: String) {
                display("no date layout matches {:?}", input)
            }
            OutOfRange(input: String) {
                display("{:?} is not a calendar date", input)
            }
        }
    }

    quick_error! {
        #[derive(Debug, PartialEq, Eq)]
        pub enum InstitutionError {
            InvalidUrl(url: String) {
                display("not a web address (must start with http): {}", url)
            }
            Duplicate(url: String) {
                display("institution already registered: {}", url)
            }
        }
    }

    quick_error! {
        #[derive(Debug)]
        pub enum AppError {
            Io(err: io::Error) {
                from()
                display("I/O error: {}", err)
                source(err)
            }
            Json(err: serde_json::Error) {
                from()
                display("JSON error: {}", err)
                source(err)
            }
            Read(path: PathBuf, err: io::Error) {
                display("cannot read {}: {}", path.display(), err)
                source(err)
            }
            Parse(path: PathBuf, err: serde_json::Error) {
                display("cannot parse {}: {}", path.display(), err)
                source(err)
            }
        }
    }
}
