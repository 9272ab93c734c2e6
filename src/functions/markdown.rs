use std::collections::HashMap;

use pulldown_cmark::html;

/// Renders a string as markdown. With `inline=true` the wrapping paragraph
/// is dropped, for use inside headings and meta tags.
pub struct Markdown;

impl tera::Filter for Markdown {
    fn filter(
        &self,
        value: &tera::Value,
        args: &HashMap<String, tera::Value>,
    ) -> tera::Result<tera::Value> {
        let input = tera::from_value::<String>(value.clone())?;
        let inline = args
            .get("inline")
            .cloned()
            .map(tera::from_value::<bool>)
            .transpose()?
            .unwrap_or(false);

        let parser = pulldown_cmark::Parser::new(&input);

        let mut contents = String::new();
        html::push_html(&mut contents, parser);

        if inline {
            let trimmed = contents.trim_end();
            if let Some(inner) = trimmed
                .strip_prefix("<p>")
                .and_then(|s| s.strip_suffix("</p>"))
            {
                if !inner.contains("<p>") {
                    contents = inner.to_string();
                }
            }
        }

        Ok(tera::to_value(contents)?)
    }

    fn is_safe(&self) -> bool {
        true
    }
}
