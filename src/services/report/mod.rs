pub mod assembler;
pub mod calculator;
pub mod chart;
pub mod scheduler;
