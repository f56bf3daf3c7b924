use regex::Regex;
use std::fs;
use std::path::Path;

const CANDIDATES: [&str; 4] = [
    "config.toml",
    "config.example.toml",
    ".env.example",
    "config.dev.toml",
];

/// Fail CI if committed config templates carry a 64-hex private key or a filled-in API key.
#[test]
fn no_committed_secrets_in_configs() {
    let hex_key = Regex::new(r"0x?[a-fA-F0-9]{64}").unwrap();
    let api_key = Regex::new(r#"(?i)^\s*zero_ex_api_key\s*=\s*"?[A-Za-z0-9-]{16,}"#).unwrap();
    for file in CANDIDATES {
        if !Path::new(file).exists() {
            continue;
        }
        let body = fs::read_to_string(file).expect("read config");
        for (idx, line) in body.lines().enumerate() {
            if hex_key.is_match(line) || api_key.is_match(line) {
                panic!("Secret-looking value in {} at line {}", file, idx + 1);
            }
        }
    }
}

#[test]
fn example_config_keeps_secrets_out_of_the_file() {
    let Ok(body) = fs::read_to_string("config.example.toml") else {
        return;
    };
    for key in ["private_key", "zero_ex_api_key"] {
        assert!(
            !body.lines().any(|l| l.trim_start().starts_with(key)),
            "{key} belongs in the environment, not config.example.toml"
        );
    }
}
