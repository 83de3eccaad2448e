use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ReminderError;

pub const UNKNOWN_TENANT: &str = "Unknown Tenant";
pub const NO_PHONE_NUMBER: &str = "N/A";

// Missing optional columns are filled in at decode time
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TenantRecord {
    pub building_unit: String,
    #[serde(default = "default_tenant_name")]
    pub tenant_name: String,
    #[serde(default = "default_phone_number")]
    pub phone_number: String,
    #[serde(default)]
    pub rent_price: Decimal,
}

fn default_tenant_name() -> String {
    UNKNOWN_TENANT.to_string()
}

fn default_phone_number() -> String {
    NO_PHONE_NUMBER.to_string()
}

impl TenantRecord {
    pub fn from_item(building_unit: &str, item: &HashMap<String, AttributeValue>) -> Self {
        let text = |name: &str| item.get(name).and_then(|value| value.as_s().ok()).cloned();

        let rent_price = match item.get("rent_price") {
            None => Decimal::ZERO,
            Some(value) => parse_price(value).unwrap_or_else(|| {
                warn!(building_unit, ?value, "Unreadable rent_price, using 0.00");
                Decimal::ZERO
            }),
        };

        Self {
            building_unit: text("building_unit").unwrap_or_else(|| building_unit.to_string()),
            tenant_name: text("tenant_name").unwrap_or_else(default_tenant_name),
            phone_number: text("phone_number").unwrap_or_else(default_phone_number),
            rent_price,
        }
    }
}

// DynamoDB numbers may come back in exponent form
fn parse_price(value: &AttributeValue) -> Option<Decimal> {
    match value {
        AttributeValue::N(n) | AttributeValue::S(n) => {
            let n = n.trim();
            n.parse().ok().or_else(|| Decimal::from_scientific(n).ok())
        }
        _ => None,
    }
}

#[async_trait]
pub trait TenantStore: Send + Sync {
    async fn get_tenant(&self, building_unit: &str) -> Result<Option<TenantRecord>, ReminderError>;
}

pub struct DynamoTenantStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoTenantStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl TenantStore for DynamoTenantStore {
    async fn get_tenant(&self, building_unit: &str) -> Result<Option<TenantRecord>, ReminderError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("building_unit", AttributeValue::S(building_unit.to_string()))
            .send()
            .await
            .map_err(|err| ReminderError::Store {
                unit: building_unit.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        Ok(output
            .item()
            .map(|item| TenantRecord::from_item(building_unit, item)))
    }
}

// For local runs and tests
#[derive(Default)]
pub struct InMemoryTenantStore {
    tenants: HashMap<String, TenantRecord>,
}

impl InMemoryTenantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tenants(tenants: impl IntoIterator<Item = TenantRecord>) -> Self {
        Self {
            tenants: tenants
                .into_iter()
                .map(|tenant| (tenant.building_unit.clone(), tenant))
                .collect(),
        }
    }

    pub fn insert(&mut self, tenant: TenantRecord) {
        self.tenants.insert(tenant.building_unit.clone(), tenant);
    }
}

#[async_trait]
impl TenantStore for InMemoryTenantStore {
    async fn get_tenant(&self, building_unit: &str) -> Result<Option<TenantRecord>, ReminderError> {
        Ok(self.tenants.get(building_unit).cloned())
    }
}
