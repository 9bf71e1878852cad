//! Confluence infrastructure - REST client and response normalization

mod client;
mod http_client;
pub mod markup;
mod payload;

pub use client::ConfluenceClient;
pub use http_client::{BasicAuth, HttpClient, HttpClientTrait, HttpResponse};

#[cfg(test)]
pub use http_client::mock;
