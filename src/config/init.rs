// ABOUTME: Config scaffolding for new projects.
// ABOUTME: Writes a commented tntbox.yml template.

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::Username;

use super::CONFIG_FILENAME;

pub fn init_config(dir: &Path, default_user: Option<&str>, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let user = match default_user {
        Some(name) => Username::new(name).map_err(|e| Error::InvalidConfig(e.to_string()))?,
        None => Username::new("admin")?,
    };

    std::fs::write(&config_path, generate_template_yaml(&user)?)?;
    tracing::debug!(path = %config_path.display(), "wrote config template");

    Ok(())
}

fn generate_template_yaml(user: &Username) -> Result<String> {
    // Names may contain YAML syntax such as `#` or `: `.
    let name = serde_yaml::to_string(user)?;
    let name = name.trim_end();
    let env = user
        .as_str()
        .to_ascii_uppercase()
        .replace(|c: char| !c.is_ascii_alphanumeric(), "_");

    Ok(format!(
        r#"# Per-call timeout applied to every box request
timeout: 5s

# User switched to by `tntbox render su` when no name is given
default_user: {name}

# Passwords for `tntbox render user create|passwd`, by user name
credentials:
  {name}:
    env: TNTBOX_{env}_PASSWORD
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn template_parses_back() {
        for name in ["ops", "ops #1", "a: b", "'quoted'", "- dash"] {
            let yaml = generate_template_yaml(&Username::new(name).unwrap()).unwrap();
            let config = Config::from_yaml(&yaml).unwrap();
            assert_eq!(config.default_user.unwrap().as_str(), name);
            assert!(config.credentials.contains_key(name), "{name}");
        }
    }
}
