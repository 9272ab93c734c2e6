use std::path::Path;

use chrono::Utc;
use tera::Tera;

use crate::{
    config::Config,
    consts::{LINKS, SITE, SOCIALS},
    functions::{get_page::GetPage, get_url::GetURL, markdown::Markdown},
    section::Section,
};

pub fn setup_template_engine(template_dir: &Path, config: &Config) -> anyhow::Result<Tera> {
    let mut tera = Tera::new(&template_dir.join("**").join("*").to_string_lossy())?;

    println!(
        "loaded templates: {:?}",
        tera.get_template_names().collect::<Vec<_>>()
    );

    register(&mut tera, config);

    Ok(tera)
}

pub fn register(tera: &mut Tera, config: &Config) {
    tera.register_function("get_url", GetURL::new(config.base_url.clone()));
    tera.register_function("get_page", GetPage);
    tera.register_filter("markdown", Markdown);
}

pub fn site_context(config: &Config) -> tera::Context {
    let mut ctx = tera::Context::new();

    ctx.insert("config", config);
    ctx.insert("SITE", &SITE);
    ctx.insert("LINKS", LINKS);
    ctx.insert("SOCIALS", SOCIALS);
    ctx.insert("last_updated", &Utc::now().to_string());

    ctx
}

pub fn render_section(tera: &Tera, config: &Config, section: &Section) -> anyhow::Result<String> {
    let mut ctx = site_context(config);

    ctx.insert("page", &section.page);
    ctx.insert("current_url", &config.make_permalink(section.output_path)?);

    Ok(tera.render(section.template_name, &ctx)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{HOME, SECTIONS};

    const NAV: &str = r#"{% for link in LINKS %}[{{ link.TEXT }}|{{ link.HREF }}]{% endfor %}"#;
    const SOCIAL: &str = r#"{% for social in SOCIALS %}<a href="{{ social.HREF }}" data-icon="{{ social.ICON }}">{{ social.TEXT }}</a>{% endfor %}"#;

    fn config() -> Config {
        toml::from_str(
            r#"
            title = "Portfolio"
            base_url = "https://example.com/"
            "#,
        )
        .unwrap()
    }

    fn tera() -> Tera {
        let config = config();
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(vec![
            ("index.html", format!("{}|{}", NAV, SOCIAL)),
            (
                "section.html",
                "{{ page.TITLE }}: {{ page.DESCRIPTION }} @ {{ current_url }}".to_string(),
            ),
            (
                "lookup.html",
                r#"{% set p = get_page(name="projects") %}{{ p.TITLE }} {{ get_url(path="/blog") }} {{ "*hi*" | markdown(inline=true) }}"#
                    .to_string(),
            ),
        ])
        .unwrap();
        register(&mut tera, &config);
        tera
    }

    #[test]
    fn nav_keeps_declared_order() {
        let out = render_section(&tera(), &config(), &HOME).unwrap();
        assert!(out.starts_with("[Home|/][Work|/work][Blog|/blog][Projects|/projects]|"));
    }

    #[test]
    fn email_social_links_to_mailto() {
        let out = render_section(&tera(), &config(), &HOME).unwrap();
        assert!(out.contains(
            r#"<a href="mailto:rx1996523@gmail.com" data-icon="email">rx1996523@gmail.com</a>"#
        ));
    }

    #[test]
    fn section_gets_page_and_url() {
        let work = &SECTIONS[1];
        let out = render_section(&tera(), &config(), work).unwrap();
        assert_eq!(out, "Work: Places I have worked. @ https://example.com/work/");
    }

    #[test]
    fn functions_and_filters_are_registered() {
        let out = tera()
            .render("lookup.html", &site_context(&config()))
            .unwrap();
        assert_eq!(out, "Projects https://example.com/blog <em>hi</em>");
    }
}
