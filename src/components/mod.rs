//! UI components: the particle scene and the content terminal.

pub mod particle_field;
pub mod terminal;
