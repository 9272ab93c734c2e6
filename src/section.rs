use serde::Serialize;

use crate::{
    consts::{BLOG, PROJECTS, SEARCH, SITE, WORK},
    page::Page,
};

/// A rendered page of the site: where it is written, which template
/// renders it, and the page record it shows.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    #[serde(skip)]
    pub output_path: &'static str,
    #[serde(skip)]
    pub template_name: &'static str,
    pub path: &'static str,
    pub page: Page,
}

pub const HOME: Section = Section {
    output_path: "index.html",
    template_name: "index.html",
    path: "/",
    page: Page {
        title: SITE.title,
        description: SITE.description,
    },
};

pub const SECTIONS: &[Section] = &[
    HOME,
    Section {
        output_path: "work/index.html",
        template_name: "section.html",
        path: "/work",
        page: WORK,
    },
    Section {
        output_path: "blog/index.html",
        template_name: "section.html",
        path: "/blog",
        page: BLOG,
    },
    Section {
        output_path: "projects/index.html",
        template_name: "section.html",
        path: "/projects",
        page: PROJECTS,
    },
    Section {
        output_path: "search/index.html",
        template_name: "section.html",
        path: "/search",
        page: SEARCH,
    },
];
