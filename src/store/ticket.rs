use derive_more::Display;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{customer, employee, Data, Error};

#[derive(Clone, Debug, PartialEq)]
pub struct Ticket {
    pub id: Id,
    pub customer_id: customer::Id,
    pub employee_id: Option<employee::Id>,
    pub description: String,
    pub emergency: bool,
    pub date_completed: Option<OffsetDateTime>,
}

impl Ticket {
    /// Indicates whether the ticket is still waiting to be completed.
    pub fn is_open(&self) -> bool {
        self.date_completed.is_none()
    }

    pub fn is_assigned(&self) -> bool {
        self.employee_id.is_some()
    }

    /// Indicates whether the ticket was completed at or after `since`.
    pub fn completed_since(&self, since: OffsetDateTime) -> bool {
        self.date_completed.is_some_and(|at| at >= since)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(u32);

impl Id {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for Id {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Data {
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn ticket_by_id(&self, id: Id) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn tickets_for_customer(
        &self,
        id: customer::Id,
    ) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter().filter(move |t| t.customer_id == id)
    }

    pub fn tickets_for_employee(
        &self,
        id: employee::Id,
    ) -> impl Iterator<Item = &Ticket> {
        self.tickets
            .iter()
            .filter(move |t| t.employee_id == Some(id))
    }

    /// Appends the ticket under a freshly assigned id, ignoring the one it
    /// carries.
    ///
    /// Ids continue from the greatest existing one, so the first ticket of an
    /// empty store gets id `1`.
    pub fn add_ticket(&mut self, ticket: Ticket) -> &Ticket {
        let id = self
            .tickets
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or_default()
            .next();
        self.tickets.push(Ticket { id, ..ticket });
        &self.tickets[self.tickets.len() - 1]
    }

    /// Replaces the ticket stored under `id` as a whole.
    pub fn replace_ticket(
        &mut self,
        id: Id,
        ticket: Ticket,
    ) -> Result<(), Error> {
        let slot = self
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::TicketNotFound(id))?;
        *slot = Ticket { id, ..ticket };
        Ok(())
    }

    pub fn remove_ticket(&mut self, id: Id) -> Result<Ticket, Error> {
        let pos = self
            .tickets
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::TicketNotFound(id))?;
        Ok(self.tickets.remove(pos))
    }

    /// Marks the ticket as completed at `now`, overwriting any earlier
    /// completion date.
    pub fn complete_ticket(
        &mut self,
        id: Id,
        now: OffsetDateTime,
    ) -> Result<(), Error> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::TicketNotFound(id))?;
        ticket.date_completed = Some(now);
        Ok(())
    }
}
