use serde::Serialize;

use crate::Result;

/// POST `data` as JSON to `uri` and return the remote's response.
///
/// Any status is returned as-is; only transport and encoding failures are
/// errors.
pub async fn push_json_to_remote<T: Serialize + ?Sized>(
    client: &reqwest::Client,
    uri: &str,
    data: &T,
) -> Result<reqwest::Response> {
    tracing::debug!(uri, "Pushing JSON to remote");

    let response = client.post(uri).json(data).send().await?;

    tracing::debug!(uri, status = %response.status(), "Remote responded");
    Ok(response)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderMap;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use super::*;

    async fn spawn_echo_server() -> String {
        async fn echo(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
            Json(json!({
                "content_type": headers["content-type"].to_str().unwrap(),
                "received": body,
            }))
        }

        let app = Router::new().route("/hook", post(echo));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}/hook")
    }

    #[tokio::test]
    async fn test_push_json_to_remote() {
        let uri = spawn_echo_server().await;
        let client = reqwest::Client::new();

        let response = push_json_to_remote(&client, &uri, &json!({ "trainee_id": "2" }))
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["content_type"], "application/json");
        assert_eq!(body["received"]["trainee_id"], "2");
    }

    #[tokio::test]
    async fn test_push_json_to_unreachable_remote() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = reqwest::Client::new();
        let result = push_json_to_remote(&client, &format!("http://{addr}/hook"), &json!({})).await;

        assert!(matches!(result, Err(crate::ToolkitError::Http(_))));
    }
}
