use std::path::PathBuf;

pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_addr: String,
    pub seed_file: Option<PathBuf>,
}

impl Config {
    /// Reads `SERVER_ADDR` and `ORDERS_SEED_FILE`. Call after `dotenvy::dotenv()`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            server_addr: non_empty("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.into()),
            seed_file: non_empty("ORDERS_SEED_FILE").map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[]));
        assert_eq!(cfg.server_addr, DEFAULT_SERVER_ADDR);
        assert_eq!(cfg.seed_file, None);
    }

    #[test]
    fn reads_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("SERVER_ADDR", "0.0.0.0:5000"),
            ("ORDERS_SEED_FILE", "data/orders.json"),
        ]));
        assert_eq!(cfg.server_addr, "0.0.0.0:5000");
        assert_eq!(cfg.seed_file, Some(PathBuf::from("data/orders.json")));
    }

    #[test]
    fn blank_values_fall_back() {
        let cfg = Config::from_lookup(lookup(&[("SERVER_ADDR", "  "), ("ORDERS_SEED_FILE", "")]));
        assert_eq!(cfg.server_addr, DEFAULT_SERVER_ADDR);
        assert_eq!(cfg.seed_file, None);
    }
}
