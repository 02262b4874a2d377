//! Resource services
//!
//! One thin service per API resource. Each method maps one domain
//! operation to one gateway call; payloads in and out are untyped JSON
//! values, since the server owns the domain model.

mod auth;
mod price_database;
mod subscriptions;
mod units;
mod workbooks;

pub use auth::AuthApi;
pub use price_database::PriceDatabasesApi;
pub use subscriptions::SubscriptionsApi;
pub use units::UnitsApi;
pub use workbooks::WorkbooksApi;
