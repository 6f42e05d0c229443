use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "taxi-dashboard", version, about = "Taxi Trip Analytics TUI")]
pub struct CliArgs {
    /// Print stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the analytics API base URL
    #[arg(long, value_name = "URL")]
    pub api: Option<String>,

    /// Override the taxi zone GeoJSON path
    #[arg(long, value_name = "PATH")]
    pub zones: Option<String>,

    /// Number of top pickup/drop off zones to request
    #[arg(long, value_name = "N")]
    pub limit: Option<u32>,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(api) = &self.api {
            std::env::set_var("TAXI_API_BASE", api);
        }
        if let Some(zones) = &self.zones {
            std::env::set_var("TAXI_ZONES_PATH", zones);
        }
        if let Some(limit) = self.limit {
            std::env::set_var("TAXI_TOP_LIMIT", limit.to_string());
        }
        if let Some(timeout) = self.timeout {
            std::env::set_var("TAXI_HTTP_TIMEOUT_SECS", timeout.to_string());
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn parses_overrides() {
        let args = CliArgs::parse_from([
            "taxi-dashboard",
            "--headless",
            "--json",
            "--api",
            "http://analytics:8080",
            "--limit",
            "5",
        ]);

        assert!(args.headless);
        assert!(args.json);
        assert_eq!(args.api.as_deref(), Some("http://analytics:8080"));
        assert_eq!(args.limit, Some(5));
        assert_eq!(args.timeout, None);
    }

    #[test]
    fn help_mentions_every_flag() {
        let help = CliArgs::command().render_help().to_string();
        for flag in ["--headless", "--json", "--api", "--zones", "--limit", "--timeout"] {
            assert!(help.contains(flag), "missing {flag}");
        }
    }
}
