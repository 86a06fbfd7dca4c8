// src/config.rs

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

/// Number of questions handed out per test when `QUESTIONS_PER_TEST` is unset.
pub const NUM_QUESTIONS_PER_TEST: usize = 5;

/// Registration numbers that are routed to the admin page.
pub const DEFAULT_ADMIN_REGS: [&str; 3] = ["00000000", "11111111", "22222222"];

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    pub server_addr: String,
    pub questions_per_test: usize,
    pub admin_regs: Vec<String>,
    pub rust_log: String,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("static"),
            server_addr: "0.0.0.0:3000".to_string(),
            questions_per_test: NUM_QUESTIONS_PER_TEST,
            admin_regs: DEFAULT_ADMIN_REGS.iter().map(|r| r.to_string()).collect(),
            rust_log: "info".to_string(),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let server_addr = env::var("SERVER_ADDR").unwrap_or(defaults.server_addr);

        let questions_per_test = env::var("QUESTIONS_PER_TEST")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.questions_per_test);

        let admin_regs = env::var("ADMIN_REGS")
            .map(|v| parse_admin_regs(&v))
            .unwrap_or(defaults.admin_regs);

        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);

        let log_dir = env::var("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        Self {
            data_dir,
            static_dir,
            server_addr,
            questions_per_test,
            admin_regs,
            rust_log,
            log_dir,
        }
    }

    pub fn is_admin(&self, reg: &str) -> bool {
        self.admin_regs.iter().any(|a| a == reg)
    }
}

fn parse_admin_regs(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_regs_are_split_and_trimmed() {
        let regs = parse_admin_regs(" 12345678, 87654321 ,,");
        assert_eq!(regs, vec!["12345678", "87654321"]);
    }

    #[test]
    fn default_allow_list_recognises_admins() {
        let config = Config::default();
        assert!(config.is_admin("11111111"));
        assert!(!config.is_admin("12345678"));
    }
}
