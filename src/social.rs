use serde::Serialize;
use url::Url;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub struct Social {
    pub name: &'static str,
    pub icon: &'static str,
    pub text: &'static str,
    pub href: &'static str,
}

pub type Socials = &'static [Social];

impl Social {
    /// Normalised URI scheme of the destination, e.g. `mailto` or `https`.
    /// `None` unless the href parses as a URI with something after the scheme.
    pub fn scheme(&self) -> Option<String> {
        let url = Url::parse(self.href).ok()?;

        if url.cannot_be_a_base() && url.path().is_empty() {
            return None;
        }

        Some(url.scheme().to_owned())
    }
}
