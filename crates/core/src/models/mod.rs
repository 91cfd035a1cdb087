mod fixtures;
mod hierarchy;
mod trainee;

pub use fixtures::sample_trainees;
pub use hierarchy::{
    AutomaticTextMessage, Checkin, Company, Language, Location, Region, TextMessage, Training,
};
pub use trainee::Trainee;
