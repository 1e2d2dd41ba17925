// Repository layer for database operations

pub mod job;
pub mod organization;

pub use job::JobRepository;
pub use organization::OrganizationRepository;
