use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{api, store};

pub use crate::store::ticket::Id;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Id,
    pub customer_id: api::customer::Id,
    pub employee_id: Option<api::employee::Id>,
    pub description: String,
    pub emergency: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_completed: Option<OffsetDateTime>,
}

impl From<&store::Ticket> for Ticket {
    fn from(ticket: &store::Ticket) -> Self {
        Self {
            id: ticket.id,
            customer_id: ticket.customer_id,
            employee_id: ticket.employee_id,
            description: ticket.description.clone(),
            emergency: ticket.emergency,
            date_completed: ticket.date_completed,
        }
    }
}

/// [`Ticket`] with its customer and employee looked up.
///
/// A reference pointing to a missing entity is left empty.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Resolved {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub customer: Option<api::Customer>,
    pub employee: Option<api::Employee>,
}

impl Resolved {
    pub fn resolve(ticket: &store::Ticket, data: &store::Data) -> Self {
        Self {
            ticket: ticket.into(),
            customer: data
                .customer_by_id(ticket.customer_id)
                .map(api::Customer::from),
            employee: ticket
                .employee_id
                .and_then(|id| data.employee_by_id(id))
                .map(api::Employee::from),
        }
    }
}

/// Body of create and update requests.
///
/// `id` is ignored on creation and must match the route on update.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    #[serde(default)]
    pub id: Option<Id>,
    pub customer_id: api::customer::Id,
    #[serde(default)]
    pub employee_id: Option<api::employee::Id>,
    pub description: String,
    #[serde(default)]
    pub emergency: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_completed: Option<OffsetDateTime>,
}

impl Input {
    pub fn into_ticket(self, id: Id) -> store::Ticket {
        store::Ticket {
            id,
            customer_id: self.customer_id,
            employee_id: self.employee_id,
            description: self.description,
            emergency: self.emergency,
            date_completed: self.date_completed,
        }
    }
}
