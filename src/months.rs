pub mod months {
    /// French month tokens and their two-digit month numbers.
    ///
    /// Order matters: the tokens are joined into a regex alternation, which
    /// picks the first alternative that matches, so full names come before
    /// the abbreviations they start with.
    pub const MONTHS: &[(&str, &str)] = &[
        ("janvier", "01"),
        ("février", "02"),
        ("fevrier", "02"),
        ("mars", "03"),
        ("avril", "04"),
        ("mai", "05"),
        ("juin", "06"),
        ("juillet", "07"),
        ("août", "08"),
        ("aout", "08"),
        ("septembre", "09"),
        ("octobre", "10"),
        ("novembre", "11"),
        ("décembre", "12"),
        ("decembre", "12"),
        ("jan", "01"),
        ("fév", "02"),
        ("fev", "02"),
        ("mar", "03"),
        ("avr", "04"),
        ("sept", "09"),
        ("oct", "10"),
        ("nov", "11"),
        ("déc", "12"),
        ("dec", "12"),
    ];

    pub fn month_number(token: &str) -> Option<&'static str> {
        MONTHS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, number)| *number)
    }

    pub fn alternation() -> String {
        MONTHS
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join("|")
    }

}
