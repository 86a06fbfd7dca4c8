// src/store/mod.rs

pub mod json;
pub mod marks_ledger;
pub mod question_bank;
pub mod student_registry;

pub use marks_ledger::MarksLedger;
pub use question_bank::QuestionBank;
pub use student_registry::StudentRegistry;
