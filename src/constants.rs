pub mod constants {
    pub const UNCONFIRMED_DATE: &str = "Date à confirmer";
    pub const PAGE_PREFIX_CHARS: usize = 5000;
    pub const EXPORT_PREFIX: &str = "evenements-vdn";
    pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";
    pub const COLUMNS: [&str; 4] = ["Date", "Événement", "Description", "Lien"];

    pub const DEFAULT_EXCLUDE_KEYWORDS: &[&str] = &[
        "tourisme",
        "hôtellerie",
        "restauration",
        "cuisine",
        "gastronomie",
        "hôtelier",
        "culinaire",
        "arts culinaires",
        "service en salle",
    ];

    pub const ENV_INSTITUTIONS: &str = "EVENT_SCOUT_INSTITUTIONS";
    pub const ENV_EXCLUDE: &str = "EVENT_SCOUT_EXCLUDE";
    pub const ENV_FORMAT: &str = "EVENT_SCOUT_FORMAT";
    pub const ENV_OUT_DIR: &str = "EVENT_SCOUT_OUT_DIR";
}
