pub mod config {
    use serde::Deserialize;

    /// Prefix of the environment variables the server reads, e.g. `NOTES_PORT`.
    const ENV_PREFIX: &str = "NOTES";

    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct Config {
        #[serde(default = "default_host")]
        pub host: String,
        #[serde(default = "default_port")]
        pub port: u16,
    }

    impl Config {
        /// Loads configuration from environment variables.
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_source(config::Environment::with_prefix(ENV_PREFIX))
        }

        fn from_source(environment: config::Environment) -> anyhow::Result<Self> {
            let settings = config::Config::builder()
                .add_source(environment)
                .build()?;

            let config: Config = settings.try_deserialize()?;
            Ok(config)
        }

        /// The socket address the server binds to.
        pub fn address(&self) -> String {
            format!("{}:{}", self.host, self.port)
        }
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                host: default_host(),
                port: default_port(),
            }
        }
    }

    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        3000
    }

}

pub mod note;
pub mod web;
