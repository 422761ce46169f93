use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use eyre::{Context, Result};

use crate::config::models::MeshConfig;

/// Load configuration from an optional file plus `MALHA_`-prefixed
/// environment overrides. Supported file formats: YAML, JSON, TOML.
///
/// With no file and no environment the defaults describe the standard demo
/// topology, so every binary is runnable out of the box. Nested keys use a
/// double underscore in the environment, e.g.
/// `MALHA_UPSTREAMS__ORDERS=http://127.0.0.1:9001/pedidos`.
pub fn load_config(config_path: Option<&str>) -> Result<MeshConfig> {
    let mut builder = Config::builder();

    if let Some(config_path) = config_path {
        let path = Path::new(config_path);

        // Determine file format based on extension
        let format = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            Some("json") => FileFormat::Json,
            Some("toml") => FileFormat::Toml,
            _ => FileFormat::Yaml, // Default to YAML
        };

        builder = builder.add_source(File::new(config_path, format));
    }

    let settings = builder
        .add_source(Environment::with_prefix("MALHA").separator("__"))
        .build()
        .with_context(|| {
            format!(
                "Failed to build config from {}",
                config_path.unwrap_or("defaults")
            )
        })?;

    let mesh_config: MeshConfig = settings.try_deserialize().with_context(|| {
        format!(
            "Failed to deserialize config from {}",
            config_path.unwrap_or("defaults")
        )
    })?;

    Ok(mesh_config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::config::models::ServiceName;

    #[test]
    fn test_load_defaults_without_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:5000");
        assert_eq!(config.upstreams.len(), 3);
        assert_eq!(config.forward_timeout_secs, 3);
    }

    #[test]
    fn test_load_yaml_config() {
        let yaml_content = r#"
listen_addr: "127.0.0.1:3000"
forward_timeout_secs: 1
upstreams:
  orders: "http://127.0.0.1:9001/pedidos"
  payments: "http://127.0.0.1:9002/pagamentos"
  inventory: "http://127.0.0.1:9003/estoque"
"#;

        let mut temp_file = NamedTempFile::with_suffix(".yaml").unwrap();
        write!(temp_file, "{}", yaml_content).unwrap();

        let config = load_config(temp_file.path().to_str()).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert_eq!(config.forward_timeout_secs, 1);
        assert_eq!(
            config.upstreams.get(&ServiceName::Orders).unwrap(),
            "http://127.0.0.1:9001/pedidos"
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let yaml_content = r#"
listen_addr: "127.0.0.1:8080"
"#;

        let mut temp_file = NamedTempFile::with_suffix(".yaml").unwrap();
        write!(temp_file, "{}", yaml_content).unwrap();

        let config = load_config(temp_file.path().to_str()).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        // Untouched sections fall back to the demo defaults
        assert_eq!(config.forward_timeout_secs, 3);
        assert_eq!(
            config.upstreams.get(&ServiceName::Inventory).unwrap(),
            "http://estoque:5000/estoque"
        );
    }
}
