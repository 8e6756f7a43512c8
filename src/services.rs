pub mod allocator;
pub mod currency_service;
pub mod itinerary_builder;
pub mod planner_service;
