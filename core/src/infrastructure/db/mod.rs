pub mod columns;
pub mod postgres;
