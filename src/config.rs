use std::{net, time};

use serde::Deserialize;

#[derive(Deserialize)]
pub struct Config {
    pub http: Http,
    #[serde(default)]
    pub reports: Reports,
}

#[derive(Deserialize)]
pub struct Http {
    pub server: Server,
    #[serde(default)]
    pub cors: Cors,
}

#[derive(Deserialize)]
pub struct Server {
    pub addr: net::SocketAddr,
}

#[derive(Default, Deserialize)]
pub struct Cors {
    pub allowed_origins: Vec<String>,
}

/// Look-back windows of the time-based reports.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub struct Reports {
    #[serde(default = "Reports::default_employee_of_month")]
    #[serde(with = "humantime_serde")]
    pub employee_of_month: time::Duration,
    #[serde(default = "Reports::default_customer_inactivity")]
    #[serde(with = "humantime_serde")]
    pub customer_inactivity: time::Duration,
}

impl Reports {
    const DAY: u64 = 24 * 60 * 60;

    fn default_employee_of_month() -> time::Duration {
        time::Duration::from_secs(30 * Self::DAY)
    }

    fn default_customer_inactivity() -> time::Duration {
        time::Duration::from_secs(365 * Self::DAY)
    }
}

impl Default for Reports {
    fn default() -> Self {
        Self {
            employee_of_month: Self::default_employee_of_month(),
            customer_inactivity: Self::default_customer_inactivity(),
        }
    }
}
