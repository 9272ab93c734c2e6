use std::collections::HashMap;

use crate::consts;

use super::string_arg;

/// `get_page(name="work")`: one of the page records by key.
pub struct GetPage;

impl tera::Function for GetPage {
    fn call(&self, args: &HashMap<String, tera::Value>) -> tera::Result<tera::Value> {
        let name = string_arg(args, "name")?;

        match consts::page(&name) {
            Some(page) => Ok(tera::to_value(page)?),
            None => Err(format!("no such page {}", name).into()),
        }
    }

    fn is_safe(&self) -> bool {
        true
    }
}
