//! EmailJS REST client.
//!
//! `POST {endpoint}` with a JSON body of the service, template and public
//! key plus the template parameters. Any 2xx response counts as delivered.

use crate::app::state::FormData;
use crate::config::MailConfig;
use crate::mail::{MailError, MailRequest, MailTransport, SendReceipt};
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct SendBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a FormData,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

#[derive(Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    endpoint: String,
}

impl EmailJsClient {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Build the HTTP request without sending it. Empty send constants are
    /// refused here so a misconfigured form fails the same way as a
    /// rejected one.
    pub fn build_request(&self, request: &MailRequest) -> Result<reqwest::Request, MailError> {
        if request.service_id.is_empty() {
            return Err(MailError::NotConfigured("service_id"));
        }
        if request.template_id.is_empty() {
            return Err(MailError::NotConfigured("template_id"));
        }
        if request.public_key.is_empty() {
            return Err(MailError::NotConfigured("public_key"));
        }

        let body = SendBody {
            service_id: &request.service_id,
            template_id: &request.template_id,
            user_id: &request.public_key,
            template_params: &request.params,
            access_token: request.access_token.as_deref().filter(|t| !t.is_empty()),
        };

        Ok(self.http.post(&self.endpoint).json(&body).build()?)
    }
}

impl MailTransport for EmailJsClient {
    fn send(&self, request: MailRequest) -> BoxFuture<'static, Result<SendReceipt, MailError>> {
        let http = self.http.clone();
        let built = self.build_request(&request);
        async move {
            let response = http.execute(built?).await?;
            let status = response.status();
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::debug!(status = status.as_u16(), error = %e, "failed to read response body");
                    String::new()
                }
            };
            if status.is_success() {
                Ok(SendReceipt {
                    status: status.as_u16(),
                    text,
                })
            } else {
                Err(MailError::Rejected {
                    status: status.as_u16(),
                    text,
                })
            }
        }
        .boxed()
    }
}
