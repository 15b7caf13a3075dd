use anyhow::Context;

/// The configuration parameters for the application.
///
/// These are pulled from environment variables, which is how the Lambda
/// container is populated. See `.env.sample` for details.
#[derive(Debug)]
pub struct Config {
    /// The connection URL for the Postgres database the audit rows land in.
    pub database_url: String,

    /// The environment we are in
    pub environment: Environment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Production,
    Develop,
    Local,
}

impl Environment {
    fn from_str(environment: &str) -> anyhow::Result<Self> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            other => anyhow::bail!("unsupported environment {}", other),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be provided")?;
        let environment = std::env::var("ENVIRONMENT").unwrap_or("local".to_string());

        Ok(Config {
            database_url,
            environment: Environment::from_str(environment.as_str())?,
        })
    }
}
