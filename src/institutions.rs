pub mod institutions {
    use crate::errors::errors::InstitutionError;

    /// Institution web sites the caller wants to watch, in insertion order.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct InstitutionList {
        urls: Vec<String>,
    }

    impl InstitutionList {
        pub fn new() -> InstitutionList {
            InstitutionList::default()
        }

        pub fn add(&mut self, url: &str) -> Result<(), InstitutionError> {
            let url = url.trim();
            if !url.starts_with("http") {
                return Err(InstitutionError::InvalidUrl(url.to_string()));
            }
            if self.urls.iter().any(|known| known == url) {
                return Err(InstitutionError::Duplicate(url.to_string()));
            }
            self.urls.push(url.to_string());
            Ok(())
        }

        pub fn remove(&mut self, index: usize) -> Option<String> {
            if index < self.urls.len() {
                Some(self.urls.remove(index))
            } else {
                None
            }
        }

        pub fn len(&self) -> usize {
            self.urls.len()
        }

        pub fn is_empty(&self) -> bool {
            self.urls.is_empty()
        }

        pub fn iter(&self) -> impl Iterator<Item = &str> {
            self.urls.iter().map(String::as_str)
        }

        /// True when `link` is hosted on one of the registered domains.
        pub fn matches(&self, link: &str) -> bool {
            let domain = domain_of(link);
            !domain.is_empty() && self.iter().any(|url| domain_of(url) == domain)
        }
    }

    pub fn domain_of(url: &str) -> &str {
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url);
        rest.split('/').next().unwrap_or(rest)
    }

}
