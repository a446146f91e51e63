pub mod glossary;
pub mod notepad;
pub mod session;
pub mod style_guide;
pub mod translate;
