pub mod events {
    use std::collections::HashSet;

    use serde::{Deserialize, Serialize};

    use crate::constants::constants::{PAGE_PREFIX_CHARS, UNCONFIRMED_DATE};
    use crate::dates::dates::{is_future_at, Clock};
    use crate::extract::extract::extract_date_at;
    use crate::institutions::institutions::InstitutionList;

    /// One organic hit from the search API.
    #[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
    pub struct SearchResult {
        #[serde(default)]
        pub title: String,
        #[serde(default)]
        pub snippet: String,
        #[serde(default)]
        pub link: String,
    }

    #[derive(Deserialize, Debug, Default)]
    pub struct SearchResponse {
        #[serde(default)]
        pub organic: Vec<SearchResult>,
    }

    #[derive(Serialize, Debug, Clone, PartialEq, Eq)]
    pub struct EventRow {
        #[serde(rename = "Date")]
        pub date: String,
        #[serde(rename = "Événement")]
        pub event: String,
        #[serde(rename = "Description")]
        pub description: String,
        #[serde(rename = "Lien")]
        pub link: String,
    }

    impl EventRow {
        fn new(item: &SearchResult, date: String) -> EventRow {
            EventRow {
                date,
                event: item.title.clone(),
                description: item.snippet.clone(),
                link: item.link.clone(),
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum SearchScope {
        /// Everything, with registered institutions listed first.
        Web,
        InstitutionsOnly,
    }

    /// Best-effort access to a result's web page.
    pub trait PageSource {
        fn page_text(&self, url: &str) -> Option<String>;
    }

    pub struct FilterOptions<'a> {
        pub exclude: &'a [String],
        pub scope: SearchScope,
        pub institutions: &'a InstitutionList,
        pub pages: Option<&'a dyn PageSource>,
        pub clock: &'a dyn Clock,
    }

    #[derive(Debug, Default)]
    pub struct FilterReport {
        pub kept: Vec<EventRow>,
        pub raw: Vec<EventRow>,
        pub excluded: usize,
        pub out_of_scope: usize,
        pub past: usize,
    }

    /// Flattens several responses, dropping link-less and repeated results.
    pub fn merge_responses(responses: Vec<SearchResponse>) -> Vec<SearchResult> {
        let mut seen = HashSet::new();
        responses
            .into_iter()
            .flat_map(|response| response.organic)
            .filter(|item| !item.link.is_empty() && seen.insert(item.link.clone()))
            .collect()
    }

    pub fn is_excluded(item: &SearchResult, keywords: &[String]) -> bool {
        let title = item.title.to_lowercase();
        let snippet = item.snippet.to_lowercase();
        keywords.iter().any(|keyword| {
            let keyword = keyword.to_lowercase();
            title.contains(&keyword) || snippet.contains(&keyword)
        })
    }

    fn page_prefix(text: &str) -> &str {
        match text.char_indices().nth(PAGE_PREFIX_CHARS) {
            Some((end, _)) => &text[..end],
            None => text,
        }
    }

    pub fn resolve_date(
        item: &SearchResult,
        pages: Option<&dyn PageSource>,
        clock: &dyn Clock,
    ) -> String {
        let text = format!("{} {}", item.snippet, item.title);
        if let Some(date) = extract_date_at(&text, clock) {
            return date;
        }

        let from_page = match pages {
            Some(pages) if !item.link.is_empty() => pages
                .page_text(&item.link)
                .and_then(|page| extract_date_at(page_prefix(&page), clock)),
            _ => None,
        };
        if let Some(ref date) = from_page {
            tracing::debug!("found {} on page {}", date, item.link);
        }

        from_page.unwrap_or_else(|| UNCONFIRMED_DATE.to_string())
    }

    pub fn filter_events(results: &[SearchResult], options: &FilterOptions) -> FilterReport {
        let mut report = FilterReport::default();
        let mut preferred = Vec::new();
        let mut others = Vec::new();

        for item in results {
            let date = resolve_date(item, options.pages, options.clock);
            let row = EventRow::new(item, date);
            report.raw.push(row.clone());

            if is_excluded(item, options.exclude) {
                tracing::debug!("excluded by keyword: {}", item.title);
                report.excluded += 1;
                continue;
            }

            let from_institution = options.institutions.matches(&item.link);
            if options.scope == SearchScope::InstitutionsOnly && !from_institution {
                report.out_of_scope += 1;
                continue;
            }

            if !is_future_at(&row.date, options.clock) {
                tracing::debug!("past event ({}): {}", row.date, item.title);
                report.past += 1;
                continue;
            }

            if from_institution {
                preferred.push(row);
            } else {
                others.push(row);
            }
        }

        report.kept = preferred;
        report.kept.append(&mut others);
        report
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::constants::constants::DEFAULT_EXCLUDE_KEYWORDS;
        use crate::dates::dates::FixedClock;
        use chrono::NaiveDate;
        use std::cell::Cell;

        fn clock() -> FixedClock {
            FixedClock(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        }

        fn result(title: &str, snippet: &str, link: &str) -> SearchResult {
            SearchResult {
                title: title.to_string(),
                snippet: snippet.to_string(),
                link: link.to_string(),
            }
        }

        fn default_keywords() -> Vec<String> {
            DEFAULT_EXCLUDE_KEYWORDS.iter().map(|k| k.to_string()).collect()
        }

        struct StaticPage {
            text: String,
            calls: Cell<usize>,
        }

        impl PageSource for StaticPage {
            fn page_text(&self, _url: &str) -> Option<String> {
                self.calls.set(self.calls.get() + 1);
                Some(self.text.clone())
            }
        }

        #[test]
        fn parses_api_response() {
            let json = r#"{
                "searchParameters": {"q": "forum des métiers"},
                "organic": [
                    {"title": "Forum", "snippet": "le 12 juin", "link": "https://a.fr/forum", "position": 1},
                    {"title": "Sans lien"}
                ]
            }"#;
            let response: SearchResponse = serde_json::from_str(json).unwrap();
            assert_eq!(response.organic.len(), 2);
            assert_eq!(response.organic[1].link, "");
        }

        #[test]
        fn response_without_results_is_empty() {
            let response: SearchResponse = serde_json::from_str("{}").unwrap();
            assert!(response.organic.is_empty());
        }

        #[test]
        fn merge_drops_duplicates_and_missing_links() {
            let first = SearchResponse {
                organic: vec![result("A", "", "https://a.fr"), result("B", "", "")],
            };
            let second = SearchResponse {
                organic: vec![result("A again", "", "https://a.fr"), result("C", "", "https://c.fr")],
            };
            let merged = merge_responses(vec![first, second]);
            let titles: Vec<_> = merged.iter().map(|r| r.title.as_str()).collect();
            assert_eq!(titles, vec!["A", "C"]);
        }

        #[test]
        fn keyword_exclusion_checks_title_and_snippet() {
            let keywords = default_keywords();
            assert!(is_excluded(&result("Forum Hôtellerie", "", ""), &keywords));
            assert!(is_excluded(&result("Salon", "Arts culinaires et plus", ""), &keywords));
            assert!(!is_excluded(&result("Forum ingénieurs", "nucléaire", ""), &keywords));
        }

        #[test]
        fn date_comes_from_snippet_then_title() {
            let item = result("Forum 3 mars 2026", "Rendez-vous le 12 juin 2025", "https://a.fr");
            assert_eq!(resolve_date(&item, None, &clock()), "12/06/2025");
        }

        #[test]
        fn missing_date_is_unconfirmed() {
            let item = result("Forum", "bientôt", "https://a.fr");
            assert_eq!(resolve_date(&item, None, &clock()), UNCONFIRMED_DATE);
        }

        #[test]
        fn page_is_consulted_only_when_needed() {
            let page = StaticPage {
                text: "<html>Ouvert le 20 septembre 2025</html>".to_string(),
                calls: Cell::new(0),
            };
            let dated = result("Forum 4 juillet 2025", "", "https://a.fr");
            assert_eq!(resolve_date(&dated, Some(&page), &clock()), "4/07/2025");
            assert_eq!(page.calls.get(), 0);

            let undated = result("Forum", "", "https://a.fr");
            assert_eq!(resolve_date(&undated, Some(&page), &clock()), "20/09/2025");
            assert_eq!(page.calls.get(), 1);
        }

        #[test]
        fn only_the_page_prefix_is_searched() {
            let page = StaticPage {
                text: format!("{}12 juin 2025", "é".repeat(PAGE_PREFIX_CHARS)),
                calls: Cell::new(0),
            };
            let undated = result("Forum", "", "https://a.fr");
            assert_eq!(resolve_date(&undated, Some(&page), &clock()), UNCONFIRMED_DATE);
        }

        #[test]
        fn filter_drops_past_and_excluded_events() {
            let results = vec![
                result("Forum des métiers", "le 15 juin 2025", "https://a.fr/1"),
                result("Forum passé", "le 15 mai 2025", "https://a.fr/2"),
                result("Salon gastronomie", "le 20 juin 2025", "https://b.fr/3"),
                result("Portes ouvertes", "date à venir", "https://c.fr/4"),
            ];
            let exclude = default_keywords();
            let institutions = InstitutionList::new();
            let clock = clock();
            let options = FilterOptions {
                exclude: &exclude,
                scope: SearchScope::Web,
                institutions: &institutions,
                pages: None,
                clock: &clock,
            };

            let report = filter_events(&results, &options);
            assert_eq!(report.raw.len(), 4);
            assert_eq!(report.excluded, 1);
            assert_eq!(report.past, 1);
            let kept: Vec<_> = report.kept.iter().map(|r| r.date.as_str()).collect();
            assert_eq!(kept, vec!["15/06/2025", UNCONFIRMED_DATE]);
        }

        #[test]
        fn web_scope_lists_institutions_first() {
            let results = vec![
                result("Autre", "", "https://other.fr/a"),
                result("Centrale", "", "https://www.ec-lyon.fr/forum"),
            ];
            let mut institutions = InstitutionList::new();
            institutions.add("https://www.ec-lyon.fr/").unwrap();
            let clock = clock();
            let options = FilterOptions {
                exclude: &[],
                scope: SearchScope::Web,
                institutions: &institutions,
                pages: None,
                clock: &clock,
            };

            let report = filter_events(&results, &options);
            let titles: Vec<_> = report.kept.iter().map(|r| r.event.as_str()).collect();
            assert_eq!(titles, vec!["Centrale", "Autre"]);
            assert_eq!(report.out_of_scope, 0);
        }

        #[test]
        fn institutions_scope_drops_other_sites() {
            let results = vec![
                result("Autre", "", "https://other.fr/a"),
                result("Centrale", "", "https://www.ec-lyon.fr/forum"),
            ];
            let mut institutions = InstitutionList::new();
            institutions.add("https://www.ec-lyon.fr/").unwrap();
            let clock = clock();
            let options = FilterOptions {
                exclude: &[],
                scope: SearchScope::InstitutionsOnly,
                institutions: &institutions,
                pages: None,
                clock: &clock,
            };

            let report = filter_events(&results, &options);
            assert_eq!(report.kept.len(), 1);
            assert_eq!(report.kept[0].event, "Centrale");
            assert_eq!(report.out_of_scope, 1);
        }
    }
}
