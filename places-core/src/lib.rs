pub mod entities;
pub mod gateways;
pub mod links;
pub mod query;
pub mod rate_limit;
pub mod refine;
pub mod usecases;

pub mod prelude {
    pub use crate::{
        entities::*,
        gateways::{LanguageModelGateway, PlacesGateway},
        links::MapLinks,
        query::Query,
        usecases::Error,
    };
}
