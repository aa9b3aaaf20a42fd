pub mod fetch_repositories;
pub mod scan_repositories;
pub mod status_check;
