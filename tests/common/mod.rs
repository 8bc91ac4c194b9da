#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use client_console::domain::client::Client;
use client_console::domain::manager::Manager;
use client_console::domain::types::{ClientId, ManagerId};

pub fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 14)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

/// A minimal record with only an id and a name.
pub fn client(id: i32, name: &str) -> Client {
    Client {
        id: ClientId::new(id).unwrap(),
        name: name.to_string(),
        phone: None,
        annual_revenue: None,
        industry: None,
        manager_id: None,
        manager_name: None,
        updated_at: timestamp(),
    }
}

/// `count` records named so that alphabetical and id order agree, which
/// keeps sequence-number assertions easy to read.
pub fn numbered_clients(count: usize) -> Vec<Client> {
    (1..=count)
        .map(|i| client(i as i32, &format!("Client {i:03}")))
        .collect()
}

pub fn managers() -> Vec<Manager> {
    vec![
        Manager {
            id: ManagerId::new(1).unwrap(),
            name: "Dana Reeves".to_string(),
        },
        Manager {
            id: ManagerId::new(2).unwrap(),
            name: "Lee Chang".to_string(),
        },
    ]
}

/// A small business data set exercising every filter dimension.
pub fn sample_clients() -> Vec<Client> {
    let assigned = |mut c: Client, industry: &str, revenue: Option<f64>, manager: Option<i32>| {
        c.industry = Some(industry.to_string());
        c.annual_revenue = revenue;
        c.manager_id = manager.map(|id| ManagerId::new(id).unwrap());
        c.manager_name = manager.map(|id| match id {
            1 => "Dana Reeves".to_string(),
            _ => "Lee Chang".to_string(),
        });
        c
    };

    vec![
        assigned(
            client(1, "Acme Industrial"),
            "Manufacturing",
            Some(120_000.0),
            Some(1),
        ),
        assigned(client(2, "Acme Labs"), "Technology", Some(45_000.0), Some(2)),
        assigned(client(3, "Blue Finch Coffee"), "Food", None, Some(1)),
        assigned(client(4, "Cobalt Energy"), "Energy", Some(800_000.0), None),
        assigned(
            client(5, "Delta Logistics"),
            "Transport",
            Some(30_000.0),
            Some(2),
        ),
        assigned(client(6, "acme outlet"), "Retail", Some(15_000.0), None),
    ]
}
