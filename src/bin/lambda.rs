//! AWS Lambda HTTP front end for the projection engine

use inflation_projection::api;
use lambda_http::{run, service_fn, Body, Request, RequestExt, Response};
use lambda_runtime::Error;
use std::collections::HashMap;

async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    let query: HashMap<String, String> = event
        .query_string_parameters()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let body: &[u8] = event.body();
    let reply = api::handle(body, &query);

    let response = Response::builder()
        .status(reply.status)
        .header("content-type", "application/json")
        .body(Body::from(reply.body))
        .map_err(Box::new)?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(function_handler)).await
}
