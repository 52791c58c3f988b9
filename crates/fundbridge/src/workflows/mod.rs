pub mod dashboard;
pub mod schemes;
pub mod site;
