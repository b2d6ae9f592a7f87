use serde::{Deserialize, Serialize};

use crate::{api, store};

pub use crate::store::employee::Id;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Employee {
    pub id: Id,
    pub name: String,
    pub specialty: String,
}

impl From<&store::Employee> for Employee {
    fn from(employee: &store::Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            specialty: employee.specialty.clone(),
        }
    }
}

/// [`Employee`] along with the service tickets assigned to them.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithTickets {
    #[serde(flatten)]
    pub employee: Employee,
    pub service_tickets: Vec<api::Ticket>,
}

impl WithTickets {
    pub fn resolve(employee: &store::Employee, data: &store::Data) -> Self {
        Self {
            employee: employee.into(),
            service_tickets: data
                .tickets_for_employee(employee.id)
                .map(api::Ticket::from)
                .collect(),
        }
    }
}
