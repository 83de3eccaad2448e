use async_trait::async_trait;
use aws_sdk_sns::error::DisplayErrorContext;
use serde::{Deserialize, Serialize};

use crate::error::ReminderError;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PublishResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, phone_number: &str, message: &str) -> Result<PublishResponse, ReminderError>;
}

pub struct SnsNotifier {
    client: aws_sdk_sns::Client,
}

impl SnsNotifier {
    pub fn new(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, phone_number: &str, message: &str) -> Result<PublishResponse, ReminderError> {
        let output = self
            .client
            .publish()
            .phone_number(phone_number)
            .message(message)
            .send()
            .await
            .map_err(|err| ReminderError::Publish(DisplayErrorContext(&err).to_string()))?;

        Ok(PublishResponse {
            message_id: output.message_id().map(str::to_string),
            sequence_number: output.sequence_number().map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_sns::operation::publish::{PublishError, PublishOutput};
    use aws_sdk_sns::types::error::InvalidParameterException;
    use aws_smithy_mocks::{mock, mock_client};

    #[test]
    fn response_uses_service_field_names() {
        let response = PublishResponse {
            message_id: Some("abc-123".to_string()),
            sequence_number: None,
        };
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"MessageId":"abc-123"}"#);
    }

    #[tokio::test]
    async fn sns_publishes_to_the_phone_number() {
        let publish = mock!(aws_sdk_sns::Client::publish)
            .match_requests(|req| {
                req.phone_number() == Some("+15551234567") && req.message() == Some(r#"{"event":"rent_due_reminder"}"#)
            })
            .then_output(|| PublishOutput::builder().message_id("abc-123").build());
        let notifier = SnsNotifier::new(mock_client!(aws_sdk_sns, [&publish]));

        let response = notifier
            .publish("+15551234567", r#"{"event":"rent_due_reminder"}"#)
            .await
            .unwrap();
        assert_eq!(response.message_id.as_deref(), Some("abc-123"));
        assert_eq!(response.sequence_number, None);
        assert_eq!(publish.num_calls(), 1);
    }

    #[tokio::test]
    async fn sns_failure_keeps_service_text() {
        let publish = mock!(aws_sdk_sns::Client::publish).then_error(|| {
            PublishError::InvalidParameterException(
                InvalidParameterException::builder()
                    .message("Invalid parameter: PhoneNumber Reason: N/A is not valid to publish to")
                    .build(),
            )
        });
        let notifier = SnsNotifier::new(mock_client!(aws_sdk_sns, [&publish]));

        let err = notifier.publish("N/A", "{}").await.unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert!(err
            .client_message()
            .contains("Invalid parameter: PhoneNumber Reason: N/A is not valid to publish to"));
        assert_eq!(publish.num_calls(), 1);
    }
}
