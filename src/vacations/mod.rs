pub mod repo;
pub mod repo_types;

pub use repo::{PgVacationRepo, VacationRepo};
pub use repo_types::{NewVacation, Vacation};
