//! UI Components
//!
//! Leptos components mounted into the server-rendered creator page.

mod category_slot;
mod item_image;
mod outfit_form;
mod source_picker;

pub use category_slot::CategorySlot;
pub use item_image::ItemImage;
pub use outfit_form::OutfitForm;
pub use source_picker::SourcePicker;
