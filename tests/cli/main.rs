use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod errors;

const BIN_NAME: &str = "strings-audit";

pub const APP_BASE: &str = "app/src/main/res/values/strings.xml";
pub const SHARED_BASE: &str = "shared/src/commonMain/composeResources/values/strings.xml";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    /// Write an `app` locale file into `app/src/main/res/<folder>/strings.xml`.
    pub fn write_app_locale(&self, folder: &str, content: &str) -> Result<()> {
        self.write_file(&format!("app/src/main/res/{}/strings.xml", folder), content)
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }
}

/// Snapshot filters replacing the temporary project directory with `[TEMP]`.
pub const TEMP_DIR_FILTERS: [(&str, &str); 1] =
    [(r"(?:/[^/\s\x22]+)*/\.tmp[A-Za-z0-9_]+", "[TEMP]")];

/// Build a `<resources>` document from `(tag, name)` pairs.
pub fn resources(entries: &[(&str, &str)]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n");
    for (tag, name) in entries {
        match *tag {
            "plurals" => xml.push_str(&format!(
                "    <plurals name=\"{}\"><item quantity=\"other\">x</item></plurals>\n",
                name
            )),
            "string-array" => xml.push_str(&format!(
                "    <string-array name=\"{}\"><item>x</item></string-array>\n",
                name
            )),
            _ => xml.push_str(&format!("    <{} name=\"{}\">x</{}>\n", tag, name, tag)),
        }
    }
    xml.push_str("</resources>\n");
    xml
}
