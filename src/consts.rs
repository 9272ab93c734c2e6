use crate::{
    link::{Link, Links},
    page::Page,
    site::Site,
    social::{Social, Socials},
};

// Global
pub const SITE: Site = Site {
    title: "Xue Ren Portfolio",
    description: "Personal portfolio of Xue Ren — a full-stack software engineer specializing in React, TypeScript, and industrial automation integration. Building data-driven applications that connect manufacturing systems with elegant, modern web experiences.",
    author: "Nora Ren",
};

// Work Page
pub const WORK: Page = Page {
    title: "Work",
    description: "Places I have worked.",
};

// Blog Page
pub const BLOG: Page = Page {
    title: "Blog",
    description: "Writing on topics I am passionate about.",
};

// Projects Page
pub const PROJECTS: Page = Page {
    title: "Projects",
    description: "Recent projects I have worked on.",
};

// Search Page
pub const SEARCH: Page = Page {
    title: "Search",
    description: "Search all posts and projects by keyword.",
};

// Links
pub const LINKS: Links = &[
    Link {
        text: "Home",
        href: "/",
    },
    Link {
        text: "Work",
        href: "/work",
    },
    Link {
        text: "Blog",
        href: "/blog",
    },
    Link {
        text: "Projects",
        href: "/projects",
    },
];

// Socials
pub const SOCIALS: Socials = &[
    Social {
        name: "Email",
        icon: "email",
        text: "rx1996523@gmail.com",
        href: "mailto:rx1996523@gmail.com",
    },
    Social {
        name: "Github",
        icon: "github",
        text: "Nora Ren",
        href: "http://github.com/NoraRen0523/xue-ren-portfolio#",
    },
    Social {
        name: "LinkedIn",
        icon: "linkedin",
        text: "Nora Ren",
        href: "https://www.linkedin.com/in/xue-ren/",
    },
    // Social {
    //     name: "Twitter",
    //     icon: "twitter-x",
    //     text: "",
    //     href: "",
    // },
];

pub fn page(name: &str) -> Option<Page> {
    match name {
        "work" => Some(WORK),
        "blog" => Some(BLOG),
        "projects" => Some(PROJECTS),
        "search" => Some(SEARCH),
        _ => None,
    }
}
