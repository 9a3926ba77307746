use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// switchboard signaling relay server
#[derive(Parser, Serialize, Deserialize, Clone, Debug)]
#[command(name = "switchboard", version, about = "WebRTC signaling relay server")]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "SWITCHBOARD_PORT", default_value = "8000")]
    pub port: u16,

    /// Bind address
    #[arg(long, env = "SWITCHBOARD_BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind_address: String,

    /// Path to TOML config file
    #[arg(long, default_value = "./switchboard.toml")]
    pub config: String,

    /// Enable structured JSON logging (for Docker/production)
    #[arg(long, env = "SWITCHBOARD_JSON_LOGS")]
    pub json_logs: bool,

    /// Output a commented TOML config template and exit
    #[arg(long)]
    pub generate_config: bool,

    /// TURN credential proxy configuration (loaded from [turn] section in TOML)
    #[arg(skip)]
    #[serde(default)]
    pub turn: Option<TurnConfig>,
}

/// Configuration for the external TURN credential-issuance service.
/// The server never mints credentials itself; it proxies one token-create
/// request per client call and returns the result verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnConfig {
    /// Account SID for the credential service
    pub account_sid: String,

    /// Auth token for the credential service (HTTP basic auth)
    pub auth_token: String,

    /// Base URL of the credential service API
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl TurnConfig {
    /// Token-create endpoint for this account.
    pub fn token_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Tokens.json",
            self.api_base.trim_end_matches('/'),
            self.account_sid
        )
    }
}

fn default_api_base() -> String {
    "https://api.twilio.com".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_address: "0.0.0.0".to_string(),
            config: "./switchboard.toml".to_string(),
            json_logs: false,
            generate_config: false,
            turn: None,
        }
    }
}

impl Config {
    /// Load config with layered precedence:
    /// built-in defaults < TOML file < env vars (SWITCHBOARD_*) < CLI args
    pub fn load() -> Result<Self, figment::Error> {
        let cli = Config::parse();
        let config_path = cli.config.clone();

        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("SWITCHBOARD_"))
            .merge(Serialized::defaults(cli))
            .extract()
    }
}

/// Generate a commented TOML config template
pub fn generate_config_template() -> String {
    r#"# switchboard Signaling Relay Configuration
# Place this file at ./switchboard.toml or specify with --config <path>
# All settings can be overridden via environment variables (SWITCHBOARD_PORT, etc.)
# or CLI flags (--port, etc.)

# Server port (default: 8000)
# port = 8000

# Bind address (default: 0.0.0.0 — all interfaces)
# bind_address = "0.0.0.0"

# Enable structured JSON logging for Docker/production
# json_logs = false

# ---- TURN Credential Proxy ----
# Credentials for the external credential-issuance service.
# When this section is absent, GET /api/get-turn-credentials returns 503.
# [turn]
# account_sid = ""
# auth_token = ""
# api_base = "https://api.twilio.com"
"#
    .to_string()
}
