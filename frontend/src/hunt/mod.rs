pub mod checklist;
pub mod preview;
pub mod wizard;
