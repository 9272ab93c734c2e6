use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub struct Page {
    pub title: &'static str,
    pub description: &'static str,
}
