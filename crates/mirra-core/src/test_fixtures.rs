//! Shared test graph: a shipment holding generic containers of manifests,
//! with null slots, empty lists, and leaf dates in the mix.

use crate::types::Date;
use mirra_derive::Entity;

#[derive(Debug, Default, Entity)]
pub struct Shipment {
    pub id: u64,
    pub carrier: Option<String>,
    pub tags: Vec<String>,
    pub crates: Vec<Option<Container<Manifest>>>,
}

#[derive(Debug, Default, Entity)]
pub struct Container<T> {
    pub children: Vec<Container<T>>,
    pub payload: Option<T>,
}

#[derive(Debug, Default, Entity)]
pub struct Manifest {
    pub weight: Option<i64>,
    pub units: i64,
    pub readings: Vec<Option<i64>>,
    pub sealed_on: Date,
}

pub fn sample_shipment() -> Shipment {
    Shipment {
        id: 7,
        carrier: Some("acme".to_string()),
        tags: vec!["fragile".to_string()],
        crates: vec![
            Some(Container {
                children: vec![],
                payload: Some(Manifest {
                    weight: Some(100),
                    units: 3,
                    readings: vec![Some(1), Some(2), Some(3)],
                    sealed_on: Date::new(2024, 6, 1),
                }),
            }),
            None,
        ],
    }
}
