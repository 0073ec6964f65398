// Business domains
pub mod group;
pub mod member;
pub mod payments;
