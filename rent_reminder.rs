pub mod config;
pub mod error;
pub mod message;
pub mod notifier;
pub mod tenant;

use chrono::{DateTime, Utc};
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use crate::error::ReminderError;
use crate::message::{compose_reminder, month_name};
use crate::notifier::{Notifier, PublishResponse};
use crate::tenant::TenantStore;

// Invocations are not always well typed, so the unit is kept as raw JSON
#[derive(Serialize, Deserialize, PartialEq, Debug, Default, Clone)]
pub struct ReminderEvent {
    #[serde(default)]
    pub building_unit: Option<Value>,
}

impl ReminderEvent {
    pub fn new(building_unit: impl Into<String>) -> Self {
        Self {
            building_unit: Some(Value::String(building_unit.into())),
        }
    }
}

// null, false, 0, "", [] and {} all count as no unit
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct ReminderResult {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl ReminderResult {
    fn success(response: &PublishResponse) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code: 200,
            body: serde_json::to_string(response)?,
        })
    }

    fn failure(err: &ReminderError) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code: err.status_code(),
            body: serde_json::to_string(&json!({ "error": err.client_message() }))?,
        })
    }
}

pub async fn function_handler<S, N>(
    store: &S,
    notifier: &N,
    event: LambdaEvent<ReminderEvent>,
) -> Result<ReminderResult, Error>
where
    S: TenantStore + ?Sized,
    N: Notifier + ?Sized,
{
    handle(store, notifier, &event.payload, Utc::now()).await
}

// Failures become non-2xx results, never Err
pub async fn handle<S, N>(
    store: &S,
    notifier: &N,
    event: &ReminderEvent,
    now: DateTime<Utc>,
) -> Result<ReminderResult, Error>
where
    S: TenantStore + ?Sized,
    N: Notifier + ?Sized,
{
    let result = match send_reminder(store, notifier, event, now).await {
        Ok(response) => ReminderResult::success(&response)?,
        Err(err) => ReminderResult::failure(&err)?,
    };
    Ok(result)
}

async fn send_reminder<S, N>(
    store: &S,
    notifier: &N,
    event: &ReminderEvent,
    now: DateTime<Utc>,
) -> Result<PublishResponse, ReminderError>
where
    S: TenantStore + ?Sized,
    N: Notifier + ?Sized,
{
    let building_unit = match event.building_unit.as_ref() {
        Some(value) if !is_blank(value) => value,
        _ => {
            warn!("No building_unit provided in the event");
            return Err(ReminderError::MissingBuildingUnit);
        }
    };

    // Table keys are strings, so no other value can match a tenant
    let building_unit = match building_unit {
        Value::String(unit) => unit.as_str(),
        other => {
            info!(building_unit = %other, "building_unit is not a string");
            return Err(ReminderError::NotFound(other.to_string()));
        }
    };

    let tenant = match store.get_tenant(building_unit).await {
        Ok(Some(tenant)) => tenant,
        Ok(None) => {
            info!(building_unit, "No tenant info found");
            return Err(ReminderError::NotFound(building_unit.to_string()));
        }
        Err(err) => {
            error!(building_unit, error = %err, "Tenant lookup failed");
            return Err(err);
        }
    };

    let payload = compose_reminder(&tenant, &month_name(now));
    let message = serde_json::to_string(&payload).map_err(|err| ReminderError::Publish(err.to_string()))?;

    match notifier.publish(&tenant.phone_number, &message).await {
        Ok(response) => {
            info!(
                tenant_name = %tenant.tenant_name,
                phone_number = %tenant.phone_number,
                "Reminder sent"
            );
            Ok(response)
        }
        Err(err) => {
            error!(
                tenant_name = %tenant.tenant_name,
                phone_number = %tenant.phone_number,
                error = %err,
                "Failed to send reminder"
            );
            Err(err)
        }
    }
}

// Placeholder for persisting reminder events
pub fn write_to_db(event: &ReminderEvent) {
    debug!(building_unit = ?event.building_unit, "write_to_db is not implemented");
}
