pub mod mountains;
