#![recursion_limit = "256"]

use std::sync::Arc;

use anyhow::Context;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{
    run, service_fn,
    tracing::{self, subscriber::EnvFilter},
    Error, LambdaEvent,
};
use sqlx::postgres::PgPoolOptions;
use upload_recorder::config::Config;
use upload_recorder::handler::handler;
use upload_recorder::service;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    tracing::subscriber::fmt()
        .with_line_number(true)
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .with_current_span(true) // Include current span in formatted events
        .with_span_list(false) // Disable nesting all spans
        .flatten_event(true) // Flattens event fields
        .init();

    tracing::info!("initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;

    tracing::trace!("initialized config");

    // We should only ever need 1 connection
    let db_pool = PgPoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .connect(&config.database_url)
        .await
        .context("could not connect to db")?;

    let db = service::db::DB::new(db_pool);
    db.ensure_schema()
        .await
        .context("could not prepare uploads table")?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let s3_client = service::s3::S3::new(aws_sdk_s3::Client::new(&aws_config));

    // Shared references
    let shared_db = Arc::new(db);
    let shared_s3 = Arc::new(s3_client);

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let db = shared_db.clone();
        let s3 = shared_s3.clone();

        async move { handler(db, s3, event).await }
    });

    run(func).await
}
