pub mod fixture;
pub mod reports;
pub mod tester;

pub use fixture::FileCatalogueSource;
pub use tester::*;
