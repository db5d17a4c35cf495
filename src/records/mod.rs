//! Record catalog: the concrete constraint tables and typed models served
//! by the API.

mod catalog;
mod location;
mod login;
mod person;

pub use catalog::ApiSchemas;
pub use location::{location_schema, Location};
pub use login::{login_schema, LoginResult, LOGIN_MESSAGE};
pub use person::{
    person_detail_schema, person_out_schema, person_query_schema, person_schema, HairColor,
    PersonRecord,
};
