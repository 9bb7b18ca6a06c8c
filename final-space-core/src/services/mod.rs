//! Business logic service layer

mod character_service;

pub use character_service::CharacterService;
