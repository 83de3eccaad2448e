use std::env;

pub const DEFAULT_TENANTS_TABLE: &str = "tenants";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub tenants_table: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tenants_table = lookup("TENANTS_TABLE")
            .filter(|table| !table.is_empty())
            .unwrap_or_else(|| DEFAULT_TENANTS_TABLE.to_string());

        Self { tenants_table }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_tenants_table() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.tenants_table, "tenants");
    }

    #[test]
    fn empty_value_falls_back_to_default() {
        let config = Config::from_lookup(|_| Some(String::new()));
        assert_eq!(config.tenants_table, "tenants");
    }

    #[test]
    fn reads_table_override() {
        let config = Config::from_lookup(|key| match key {
            "TENANTS_TABLE" => Some("tenants-staging".to_string()),
            _ => None,
        });
        assert_eq!(config.tenants_table, "tenants-staging");
    }
}
