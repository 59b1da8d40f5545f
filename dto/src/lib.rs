pub mod login_failure;
pub mod product;
pub mod upload_report;
