use std::collections::HashMap;

pub mod get_page;
pub mod get_url;
pub mod markdown;

fn string_arg(args: &HashMap<String, tera::Value>, name: &str) -> tera::Result<String> {
    let value = args
        .get(name)
        .cloned()
        .ok_or_else(|| tera::Error::msg(format!("missing {}", name)))?;

    Ok(tera::from_value::<String>(value)?)
}
