mod conversions;
mod types;

pub use types::{EmployeeProjectResponse, EmployeeResponse, SaveEmployeeRequest};
