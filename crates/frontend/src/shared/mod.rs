pub mod file_reader;
pub mod icons;
pub mod llm;
