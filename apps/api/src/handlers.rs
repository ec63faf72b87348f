pub mod assignments;
pub mod employees;
pub mod health;
pub mod projects;
pub mod roles;

#[cfg(test)]
mod tests;
