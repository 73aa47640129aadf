pub(crate) mod arithmetic_controller;
pub(crate) mod health_check_controller;
