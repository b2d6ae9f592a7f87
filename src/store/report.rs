//! Derived views over the current store contents.
//!
//! Every report is recomputed from scratch on each call and never mutates
//! the store. Results keep store order unless stated otherwise.

use std::{cmp::Reverse, collections::HashSet, time::Duration};

use itertools::Itertools as _;
use time::{Date, OffsetDateTime};

use super::{employee, Customer, Data, Employee, Ticket};

/// Start of the `window` ending at `now`, clamped to the earliest
/// representable date for windows reaching past it.
fn window_start(now: OffsetDateTime, window: Duration) -> OffsetDateTime {
    time::Duration::try_from(window)
        .ok()
        .and_then(|window| now.checked_sub(window))
        .unwrap_or_else(|| Date::MIN.midnight().assume_utc())
}

impl Data {
    pub fn unassigned_tickets(&self) -> Vec<&Ticket> {
        self.tickets.iter().filter(|t| !t.is_assigned()).collect()
    }

    pub fn incomplete_emergencies(&self) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.emergency && t.is_open())
            .collect()
    }

    /// Completed tickets, the longest-closed one first.
    pub fn completed_oldest_first(&self) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| !t.is_open())
            .sorted_by_key(|t| t.date_completed)
            .collect()
    }

    /// Open tickets in the order they should be worked on: emergencies
    /// before the rest, and within each group unassigned before assigned.
    pub fn incomplete_by_priority(&self) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.is_open())
            .sorted_by_key(|t| (!t.emergency, t.is_assigned()))
            .collect()
    }

    /// Employee who completed the most tickets within `window` before `now`.
    ///
    /// Ties go to the employee listed first.
    pub fn employee_of_the_month(
        &self,
        now: OffsetDateTime,
        window: Duration,
    ) -> Option<&Employee> {
        let since = window_start(now, window);
        self.employees
            .iter()
            .map(|e| {
                let completed = self
                    .tickets_for_employee(e.id)
                    .filter(|t| t.completed_since(since))
                    .count();
                (e, completed)
            })
            .min_by_key(|&(_, completed)| Reverse(completed))
            .map(|(e, _)| e)
    }

    /// Employees not assigned to any open ticket.
    pub fn available_employees(&self) -> Vec<&Employee> {
        let busy = self
            .tickets
            .iter()
            .filter(|t| t.is_open())
            .filter_map(|t| t.employee_id)
            .collect::<HashSet<_>>();
        self.employees
            .iter()
            .filter(|e| !busy.contains(&e.id))
            .collect()
    }

    /// Customers without any ticket closed within `window` before `now`.
    pub fn customers_not_closed_within(
        &self,
        now: OffsetDateTime,
        window: Duration,
    ) -> Vec<&Customer> {
        let since = window_start(now, window);
        self.customers
            .iter()
            .filter(|c| {
                !self
                    .tickets_for_customer(c.id)
                    .any(|t| t.completed_since(since))
            })
            .collect()
    }

    /// Distinct customers of the tickets assigned to the employee, in order
    /// of their first ticket.
    pub fn customers_assigned_to(&self, id: employee::Id) -> Vec<&Customer> {
        self.tickets_for_employee(id)
            .map(|t| t.customer_id)
            .unique()
            .filter_map(|customer_id| self.customer_by_id(customer_id))
            .collect()
    }
}
