pub mod job;
pub mod skill;
