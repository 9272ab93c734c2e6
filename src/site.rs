use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub struct Site {
    pub title: &'static str,
    pub description: &'static str,
    pub author: &'static str,
}
