//! Configuration diagnostics
//!
//! Reports which provider and gateway credentials are present in the
//! environment without sending anything:
//!
//! ```bash
//! cargo run --example diagnostics -p sg_infra
//! ```

use sg_infra::sms::{AzureSmsConfig, TwilioConfig};
use sg_shared::config::{AuthServerConfig, JwtConfig, ServerConfig};

fn check(name: &str, result: Result<String, String>) {
    match result {
        Ok(detail) => println!("  [ok]      {:<24} {}", name, detail),
        Err(e) => println!("  [missing] {:<24} {}", name, e),
    }
}

fn main() {
    dotenvy::dotenv().ok();

    println!("SmsGate configuration diagnostics");
    println!();

    check(
        "Azure SMS (default)",
        AzureSmsConfig::from_env()
            .map(|c| format!("endpoint {}, from {}", c.endpoint, c.from_number))
            .map_err(|e| e.to_string()),
    );
    check(
        "Twilio SMS (alternate)",
        TwilioConfig::from_env()
            .map(|c| format!("account {}, from {}", c.account_sid, c.from_number))
            .map_err(|e| e.to_string()),
    );
    check(
        "Auth server",
        AuthServerConfig::from_env()
            .map(|c| c.base_url)
            .map_err(|e| e.to_string()),
    );
    check(
        "JWT validation",
        JwtConfig::from_env()
            .map(|c| format!("issuer {}, audience {}", c.issuer, c.audience))
            .map_err(|e| e.to_string()),
    );
    check(
        "HTTP server",
        ServerConfig::from_env()
            .map(|c| c.bind_address())
            .map_err(|e| e.to_string()),
    );

    println!();
    println!("The URL shortener endpoints need no credentials.");
}
