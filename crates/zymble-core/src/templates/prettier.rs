//! Prettier configuration content and serialization

use crate::error::{Result, ScaffoldError};
use crate::project::ModuleType;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// One per-glob option override
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Override {
    pub files: String,
    pub options: OverrideOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverrideOptions {
    pub parser: String,
}

/// Formatter rule set; field order is the emitted key order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrettierConfig {
    pub trailing_comma: String,
    pub print_width: u32,
    pub tab_width: u32,
    pub semi: bool,
    pub single_quote: bool,
    pub arrow_parens: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsx_single_quote: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<Override>,
}

impl Default for PrettierConfig {
    fn default() -> Self {
        Self {
            trailing_comma: "es5".to_string(),
            print_width: 80,
            tab_width: 2,
            semi: true,
            single_quote: true,
            arrow_parens: "always".to_string(),
            jsx_single_quote: None,
            overrides: Vec::new(),
        }
    }
}

impl PrettierConfig {
    /// Base rules plus the React and TypeScript additions when detected
    pub fn for_project(has_react: bool, has_typescript: bool) -> Self {
        let mut config = Self::default();
        if has_react {
            config.jsx_single_quote = Some(false);
        }
        if has_typescript {
            config.overrides = ["*.ts", "*.tsx"]
                .into_iter()
                .map(|files| Override {
                    files: files.to_string(),
                    options: OverrideOptions {
                        parser: "typescript".to_string(),
                    },
                })
                .collect();
        }
        config
    }
}

/// On-disk format of the generated config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    /// `prettier.config.js`, module system taken from package.json
    Js,
    Cjs,
    Mjs,
}

impl ConfigFormat {
    /// Every format, in menu order
    pub const ALL: [ConfigFormat; 5] = [
        ConfigFormat::Json,
        ConfigFormat::Yaml,
        ConfigFormat::Js,
        ConfigFormat::Cjs,
        ConfigFormat::Mjs,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ConfigFormat::Json => ".prettierrc.json",
            ConfigFormat::Yaml => ".prettierrc.yaml",
            ConfigFormat::Js => "prettier.config.js",
            ConfigFormat::Cjs => "prettier.config.cjs",
            ConfigFormat::Mjs => "prettier.config.mjs",
        }
    }

    /// Module system a script config is written for
    pub fn module_system(&self, declared: ModuleType) -> ModuleType {
        match self {
            ConfigFormat::Cjs => ModuleType::CommonJs,
            ConfigFormat::Mjs => ModuleType::Module,
            _ => declared,
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// Serialize `config` in `format`, honoring the project's module system for scripts
pub fn render_config(
    config: &PrettierConfig,
    format: ConfigFormat,
    declared: ModuleType,
) -> Result<String> {
    let render_err = |detail: String| ScaffoldError::Render {
        what: format.file_name().to_string(),
        detail,
    };

    match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| render_err(e.to_string())),
        ConfigFormat::Yaml => serde_yaml::to_string(config).map_err(|e| render_err(e.to_string())),
        ConfigFormat::Js | ConfigFormat::Cjs | ConfigFormat::Mjs => {
            let value = serde_json::to_value(config).map_err(|e| render_err(e.to_string()))?;
            let opener = match format.module_system(declared) {
                ModuleType::CommonJs => "module.exports = {",
                ModuleType::Module => "export default {",
            };
            Ok(module_body(opener, &value))
        }
    }
}

fn module_body(opener: &str, value: &Value) -> String {
    let mut out = format!("{}\n", opener);
    if let Value::Object(fields) = value {
        for (key, field) in fields {
            out.push_str(&format!("\t{}: {},\n", key, field));
        }
    }
    out.push_str("};\n");
    out
}
