pub mod card_list;
pub mod flashcard;
pub mod nav_bar;
pub mod section_heading;
pub mod word_form;
