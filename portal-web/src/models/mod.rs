pub mod app_state;

#[cfg(test)]
mod app_state_test;
