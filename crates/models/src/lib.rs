pub mod db;
pub mod errors;
pub mod reservation;

#[cfg(test)]
mod tests;
