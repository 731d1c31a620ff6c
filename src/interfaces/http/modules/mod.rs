pub mod auth;
pub mod cards;
pub mod dashboard;
pub mod health;
pub mod metrics;
pub mod request_id;
pub mod roles;
pub mod users;
