use crate::error::HttpError;
use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, Response};
use std::fmt::Debug;

/// Transport used to deliver notifications.
///
/// Implementations perform exactly one request per call. Returning `Ok` means the request
/// completed, whatever the status code of the response.
#[async_trait]
pub trait HttpClient: Debug + Send + Sync {
    /// Send the request and return the response.
    async fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Bytes>, HttpError>;
}

#[async_trait]
impl<C: HttpClient + ?Sized> HttpClient for std::sync::Arc<C> {
    async fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Bytes>, HttpError> {
        (**self).send(request).await
    }
}

#[cfg(feature = "reqwest")]
mod reqwest {
    use super::{async_trait, Bytes, HttpClient, HttpError, Request, Response};

    #[async_trait]
    impl HttpClient for reqwest::Client {
        async fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Bytes>, HttpError> {
            let request = request.try_into()?;
            let mut response = self.execute(request).await?;
            let headers = std::mem::take(response.headers_mut());
            let mut http_response = Response::builder()
                .status(response.status())
                .body(response.bytes().await?)?;
            *http_response.headers_mut() = headers;
            Ok(http_response)
        }
    }

    /// Blocks the calling thread for the duration of the request. Do not use it from within an
    /// async runtime's worker threads.
    #[cfg(any(
        feature = "reqwest-blocking-client",
        feature = "reqwest-blocking-client-rustls"
    ))]
    #[async_trait]
    impl HttpClient for reqwest::blocking::Client {
        async fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Bytes>, HttpError> {
            let request = request.try_into()?;
            let mut response = self.execute(request)?;
            let headers = std::mem::take(response.headers_mut());
            let mut http_response = Response::builder()
                .status(response.status())
                .body(response.bytes()?)?;
            *http_response.headers_mut() = headers;
            Ok(http_response)
        }
    }
}
