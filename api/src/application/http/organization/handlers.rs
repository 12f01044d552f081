pub mod create_organization;
pub mod get_organization;
pub mod get_organizations;
