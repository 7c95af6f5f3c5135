pub mod argsets;
pub mod cloudcore;
pub mod command;
pub mod constants;
pub mod helpers;
pub mod validation;
