use serde::{Deserialize, Serialize};

use crate::{api, store};

pub use crate::store::customer::Id;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Customer {
    pub id: Id,
    pub name: String,
    pub address: String,
}

impl From<&store::Customer> for Customer {
    fn from(customer: &store::Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            address: customer.address.clone(),
        }
    }
}

/// [`Customer`] along with all of its service tickets.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithTickets {
    #[serde(flatten)]
    pub customer: Customer,
    pub service_tickets: Vec<api::Ticket>,
}

impl WithTickets {
    pub fn resolve(customer: &store::Customer, data: &store::Data) -> Self {
        Self {
            customer: customer.into(),
            service_tickets: data
                .tickets_for_customer(customer.id)
                .map(api::Ticket::from)
                .collect(),
        }
    }
}
