use time::OffsetDateTime;

use super::{
    customer, employee, ticket, Customer, Data, Employee, Store, Ticket,
};

impl Store {
    /// Creates a store filled with the startup data, completed tickets
    /// closed at `now`.
    pub fn seeded(now: OffsetDateTime) -> Self {
        Self::new(Data::seed(now))
    }
}

impl Data {
    pub fn seed(now: OffsetDateTime) -> Self {
        let customers = [
            (1, "Bob", "1234 Somewhere Road"),
            (2, "Todd", "5678 Nowhere Street"),
            (3, "Karen", "9876 Sample Street"),
        ]
        .into_iter()
        .map(|(id, name, address)| Customer {
            id: customer::Id::from(id),
            name: name.into(),
            address: address.into(),
        })
        .collect();

        let employees = [
            (1, "Mr Bean", "Accountant"),
            (2, "Ms Smith", "Secretary"),
            (3, "Steve", "Janitor"),
        ]
        .into_iter()
        .map(|(id, name, specialty)| Employee {
            id: employee::Id::from(id),
            name: name.into(),
            specialty: specialty.into(),
        })
        .collect();

        let tickets = [
            (
                1,
                1,
                None,
                "Ticket #1: The mysterious case of the dancing laptop",
                false,
                Some(now),
            ),
            (
                2,
                3,
                Some(3),
                "Ticket #2: Network connectivity issue in the main office",
                true,
                Some(now),
            ),
            (
                3,
                1,
                Some(2),
                "Ticket #3: Software installation problem on user's computer",
                false,
                Some(now),
            ),
            (
                4,
                2,
                Some(1),
                "Ticket #4: Printer not responding in the accounting department",
                false,
                Some(now),
            ),
            (5, 3, Some(2), "Ticket #5: Website server outage", true, None),
        ]
        .into_iter()
        .map(
            |(id, customer_id, employee_id, description, emergency, date)| {
                Ticket {
                    id: ticket::Id::from(id),
                    customer_id: customer::Id::from(customer_id),
                    employee_id: employee_id.map(employee::Id::from),
                    description: description.into(),
                    emergency,
                    date_completed: date,
                }
            },
        )
        .collect();

        Self::new(customers, employees, tickets)
    }
}
