use serde::Serialize;
use url::Url;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub struct Link {
    pub text: &'static str,
    pub href: &'static str,
}

pub type Links = &'static [Link];

impl Link {
    pub fn is_internal(&self) -> bool {
        self.href.starts_with('/')
    }

    /// Absolute URL this link points to. Internal paths are relative to
    /// `base_url`, including any sub-path it has; anything else must
    /// already be a full URL.
    pub fn resolve(&self, base_url: &Url) -> Result<Url, url::ParseError> {
        if self.is_internal() {
            base_url.join(self.href.trim_start_matches('/'))
        } else {
            Url::parse(self.href)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_links_join_base_url() {
        let base = Url::parse("https://example.com/").unwrap();
        let link = Link {
            text: "Work",
            href: "/work",
        };

        assert!(link.is_internal());
        assert_eq!(link.resolve(&base).unwrap().as_str(), "https://example.com/work");
    }

    #[test]
    fn internal_links_keep_base_sub_path() {
        let base = Url::parse("https://noraren0523.github.io/xue-ren-portfolio/").unwrap();
        let work = Link {
            text: "Work",
            href: "/work",
        };
        let home = Link {
            text: "Home",
            href: "/",
        };

        assert_eq!(
            work.resolve(&base).unwrap().as_str(),
            "https://noraren0523.github.io/xue-ren-portfolio/work"
        );
        assert_eq!(
            home.resolve(&base).unwrap().as_str(),
            "https://noraren0523.github.io/xue-ren-portfolio/"
        );
    }

    #[test]
    fn external_links_ignore_base_url() {
        let base = Url::parse("https://example.com/").unwrap();
        let link = Link {
            text: "Source",
            href: "https://github.com/",
        };

        assert!(!link.is_internal());
        assert_eq!(link.resolve(&base).unwrap().as_str(), "https://github.com/");
    }

    #[test]
    fn relative_non_path_is_rejected() {
        let base = Url::parse("https://example.com/").unwrap();
        let link = Link {
            text: "Broken",
            href: "work",
        };

        assert!(link.resolve(&base).is_err());
    }
}
