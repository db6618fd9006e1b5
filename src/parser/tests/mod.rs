//! Тесты для лексического анализатора

pub mod lexer_tests;
