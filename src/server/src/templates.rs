use std::path::Path;

use libdevlog::model::DevLogPage;
use tera::{Context, Tera};

pub const INDEX_TEMPLATE: &str = "index.html";

const BUILTIN_INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// HTML templates for the dev log. `.html` templates are auto-escaped.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// The index template compiled into the binary.
    pub fn builtin() -> Result<Templates, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_TEMPLATE, BUILTIN_INDEX_TEMPLATE)?;
        Ok(Templates { tera })
    }

    /// Loads every `*.html` file under `dir`, which must provide `index.html`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Templates, tera::Error> {
        let dir = dir.as_ref();
        let glob = dir.join("**").join("*.html");
        log::debug!("Loading templates from {:?}", glob);
        let tera = Tera::new(&glob.to_string_lossy())?;

        if !tera.get_template_names().any(|name| name == INDEX_TEMPLATE) {
            return Err(tera::Error::msg(format!(
                "{} not found in template dir {}",
                INDEX_TEMPLATE,
                dir.display()
            )));
        }
        Ok(Templates { tera })
    }

    pub fn render_index(&self, page: &DevLogPage) -> Result<String, tera::Error> {
        let context = Context::from_serialize(page)?;
        self.tera.render(INDEX_TEMPLATE, &context)
    }
}
