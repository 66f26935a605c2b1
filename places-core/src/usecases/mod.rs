mod error;
mod generate_text;
mod search_places;


pub use self::{error::Error, generate_text::*, search_places::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::*, links::*, query::Query};
}
