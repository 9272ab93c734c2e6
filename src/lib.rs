pub mod builder;
pub mod config;
pub mod consts;
pub mod functions;
pub mod link;
pub mod page;
pub mod render;
pub mod section;
pub mod site;
pub mod social;

pub use consts::{BLOG, LINKS, PROJECTS, SEARCH, SITE, SOCIALS, WORK};
pub use link::{Link, Links};
pub use page::Page;
pub use site::Site;
pub use social::{Social, Socials};
