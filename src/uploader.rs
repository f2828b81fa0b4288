use crate::{models::MessageCard, Error, HttpClient};
use http::{Request, Uri};

/// Posts a message card to the webhook.
///
/// The response status is not inspected. Webhooks may answer accepted messages with arbitrary
/// status codes, so only transport failures are reported.
pub(crate) async fn send<C: HttpClient + ?Sized>(
    client: &C,
    endpoint: &Uri,
    card: &MessageCard,
) -> Result<(), Error> {
    let body = serde_json::to_vec(card).map_err(Error::SerializePayload)?;
    let request = Request::post(endpoint.clone())
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body)
        .expect("request should be valid");

    match client.send(request).await {
        Ok(response) => {
            #[cfg(feature = "internal-logs")]
            tracing::debug!(
                status = response.status().as_u16(),
                "notification delivered"
            );
            #[cfg(not(feature = "internal-logs"))]
            let _ = response;
            Ok(())
        }
        Err(err) => {
            #[cfg(feature = "internal-logs")]
            tracing::warn!(error = %err, "notification delivery failed");
            Err(Error::Delivery(err))
        }
    }
}
