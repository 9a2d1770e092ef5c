pub mod assignment_service;
pub mod auth_service;
pub mod order_service;
pub mod pick_service;
pub mod rules;
