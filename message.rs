use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::tenant::TenantRecord;

pub const EVENT_TYPE: &str = "rent_due_reminder";

pub const LATE_FEE_POLICY: &str =
    "If paid late, a fee of $35 will be added on the first day, and $25 for each day after that.";

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ReminderPayload {
    pub event: &'static str,
    pub tenant_name: String,
    pub due_date: String,
    pub reminder_date: String,
    pub reminder_message: String,
}

pub fn month_name(now: DateTime<Utc>) -> String {
    now.format("%B").to_string()
}

pub fn compose_reminder(tenant: &TenantRecord, month: &str) -> ReminderPayload {
    let due_date = format!("5th of {month}");
    let reminder_date = format!("1st of {month}");

    let reminder_message = format!(
        "Hello {name}, this is a friendly reminder that your rent for {month} is due on or before {due_date}. \
         The total amount due is ${rent:.2}. \
         {LATE_FEE_POLICY} \
         Please make sure to pay it on time. If you have any questions, feel free to contact [Contact Info].",
        name = tenant.tenant_name,
        rent = tenant.rent_price.round_dp(2),
    );

    ReminderPayload {
        event: EVENT_TYPE,
        tenant_name: tenant.tenant_name.clone(),
        due_date,
        reminder_date,
        reminder_message,
    }
}
