use std::{
    fs::{self, create_dir_all, remove_dir_all},
    path::{Path, PathBuf},
};

use tera::Tera;
use walkdir::WalkDir;

use crate::{
    config::Config,
    render::{render_section, setup_template_engine},
    section::SECTIONS,
};

pub struct Context {
    home: PathBuf,
    output_dir: PathBuf,
    config: Config,
}

impl Context {
    pub fn new(home: PathBuf, output_dir: PathBuf, local: bool) -> anyhow::Result<Self> {
        let config = Config::load(&home, local)?;

        Ok(Self {
            home,
            output_dir,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn clean_output_dir(&self) -> anyhow::Result<()> {
        if self.output_dir.exists() {
            remove_dir_all(&self.output_dir)?;
        }
        create_dir_all(&self.output_dir)?;
        Ok(())
    }

    fn absolute<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.home.join(path.as_ref())
    }

    fn create_output_dir(&self, path: &Path) -> anyhow::Result<()> {
        let output = self.output_dir.join(path);
        Ok(fs::create_dir_all(output)?)
    }

    fn copy_to_output(&self, file: &Path, path: &Path) -> anyhow::Result<()> {
        path.parent()
            .map(|p| self.create_output_dir(p))
            .transpose()?;

        let output = self.output_dir.join(path);

        fs::copy(file, output)?;

        Ok(())
    }

    fn write_to_output(&self, path: &Path, contents: &str) -> anyhow::Result<()> {
        path.parent()
            .map(|p| self.create_output_dir(p))
            .transpose()?;

        let output = self.output_dir.join(path);

        fs::write(output, contents)?;

        Ok(())
    }
}

fn copy_static_files(context: &Context) -> anyhow::Result<()> {
    let static_dir: PathBuf = context.absolute("static");

    if !static_dir.is_dir() {
        return Ok(());
    }

    for entry in WalkDir::new(&static_dir) {
        let entry = entry?;

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(&static_dir)?;

        println!("copying {} to output", relative.display());

        context.copy_to_output(entry.path(), relative)?;
    }

    Ok(())
}

fn render_sections(context: &Context, tera: &Tera) -> anyhow::Result<()> {
    for section in SECTIONS {
        println!("rendering {}", section.output_path);

        let contents = render_section(tera, &context.config, section)?;

        context.write_to_output(Path::new(section.output_path), &contents)?;
    }

    Ok(())
}

/// Cleans the output directory, copies `static/` and renders every section.
pub fn build(context: &Context) -> anyhow::Result<()> {
    context.clean_output_dir()?;

    copy_static_files(context)?;

    let tera = setup_template_engine(&context.absolute("templates"), &context.config)?;

    render_sections(context, &tera)?;

    Ok(())
}
