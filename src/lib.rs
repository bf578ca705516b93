pub mod commands;
pub mod paths;
pub mod profiles;
pub mod render;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
