//! Sample fixture: Brazilian cities and a handful of tech events.
//!
//! On an empty store the rows get ids in declaration order, so city 1
//! (São Paulo) and city 2 (Brasília) host events while the rest do not.

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, PaginatorTrait, EntityTrait};
use tracing::debug;

use crate::{city, errors::ModelError, event};

pub const CITIES: [&str; 8] = [
    "São Paulo",
    "Brasília",
    "Fortaleza",
    "Salvador",
    "Manaus",
    "Curitiba",
    "Belo Horizonte",
    "Belém",
];

/// (name, (year, month, day), url, index into `CITIES`)
pub const EVENTS: [(&str, (i32, u32, u32), &str, usize); 4] = [
    ("Feira do Software", (2021, 5, 16), "https://www.feiradosoftware.com", 0),
    ("CCXP", (2021, 4, 13), "https://www.ccxp.com.br", 0),
    ("Congresso Linux", (2021, 5, 23), "https://www.congressolinux.com.br", 1),
    ("Experiência Python", (2021, 6, 15), "https://www.experienciapython.com", 1),
];

#[derive(Debug, Clone)]
pub struct SampleData {
    pub cities: Vec<city::Model>,
    pub events: Vec<event::Model>,
}

impl SampleData {
    pub fn city(&self, name: &str) -> Option<&city::Model> {
        self.cities.iter().find(|c| c.name == name)
    }
}

/// Insert the fixture unless the `city` table already has rows.
pub async fn sample_data<C: ConnectionTrait>(db: &C) -> Result<Option<SampleData>, ModelError> {
    if city::Entity::find().count(db).await? > 0 {
        return Ok(None);
    }

    let mut cities = Vec::with_capacity(CITIES.len());
    for name in CITIES {
        cities.push(city::create(db, name).await?);
    }

    let mut events = Vec::with_capacity(EVENTS.len());
    for (name, (y, m, d), url, host) in EVENTS {
        let date = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| ModelError::Db(format!("invalid fixture date {y}-{m}-{d}")))?;
        let city_id = cities[host].id;
        events.push(event::create(db, name, date, url, city_id).await?);
    }
    debug!(cities = cities.len(), events = events.len(), "seeded sample data");

    Ok(Some(SampleData { cities, events }))
}
