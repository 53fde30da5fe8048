pub mod experience;
pub mod icons;
pub mod navbar;
pub mod project_card;
pub mod section;
