pub mod plan_handlers;
